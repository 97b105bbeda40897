#[cfg(feature = "gtk4-adapter")]
fn main() {
    use gtk4 as gtk;
    use gtk4::prelude::*;

    use world_chart::api::{ChartConfig, ChartEngine};
    use world_chart::core::datasets::us_gross_national_debt;
    use world_chart::platform_gtk::GtkChartAdapter;
    use world_chart::render::CairoRenderer;

    let _ = world_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.world_chart.demos.debt")
        .build();

    app.connect_activate(|app| {
        let engine = CairoRenderer::new(1, 1)
            .and_then(|renderer| {
                ChartEngine::new(renderer, ChartConfig::us_gross_national_debt())
            })
            .and_then(|mut engine| {
                engine.set_data(us_gross_national_debt())?;
                Ok(engine)
            });
        let engine = match engine {
            Ok(engine) => engine,
            Err(err) => {
                eprintln!("failed to initialize chart: {err}");
                return;
            }
        };

        let adapter = GtkChartAdapter::new(engine);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title("world-chart | U.S. Gross National Debt")
            .default_width(780)
            .default_height(610)
            .build();
        window.set_child(Some(adapter.drawing_area()));
        window.present();
    });

    let _ = app.run();
}

#[cfg(not(feature = "gtk4-adapter"))]
fn main() {
    println!("run with: cargo run --features desktop --example gtk_debt_chart");
}
