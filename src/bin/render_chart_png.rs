use std::path::PathBuf;

use world_chart::api::{ChartConfig, ChartEngine};
use world_chart::core::Viewport;
use world_chart::core::datasets::us_gross_national_debt;
use world_chart::error::{ChartError, ChartResult};
use world_chart::render::CairoRenderer;
use world_chart::telemetry::init_default_tracing;

const DEFAULT_OUTPUT: &str = "us_gross_national_debt.png";
const DEFAULT_WIDTH: u32 = 780;
const DEFAULT_HEIGHT: u32 = 610;

/// Usage: `render_chart_png [output.png] [width] [height] [config.json]`
fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("render_chart_png: {err}");
        std::process::exit(1);
    }
}

fn run() -> ChartResult<()> {
    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_owned()));
    let width = parse_dimension(args.next(), DEFAULT_WIDTH, "width")?;
    let height = parse_dimension(args.next(), DEFAULT_HEIGHT, "height")?;
    let config = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .map_err(|err| ChartError::InvalidData(format!("failed to read {path}: {err}")))?;
            ChartConfig::from_json_str(&raw)?
        }
        None => ChartConfig::us_gross_national_debt(),
    };

    let renderer = CairoRenderer::new(width as i32, height as i32)?;
    let mut engine = ChartEngine::new(renderer, config)?;
    engine.set_data(us_gross_national_debt())?;
    let cached_points = engine
        .render(Viewport::new(width, height))?
        .screen_cache
        .len();

    let renderer = engine.into_renderer();
    renderer.write_png(&output)?;
    println!(
        "wrote {} ({}x{}, {} points)",
        output.display(),
        width,
        height,
        cached_points
    );
    Ok(())
}

fn parse_dimension(raw: Option<String>, default: u32, name: &str) -> ChartResult<u32> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|value| *value > 0 && *value <= i32::MAX as u32)
            .ok_or_else(|| ChartError::InvalidData(format!("{name} must be a positive integer"))),
    }
}
