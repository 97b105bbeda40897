use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use world_chart::api::{ChartConfig, ChartEngine};
use world_chart::core::datasets::us_gross_national_debt;
use world_chart::core::{PixelPoint, PixelRect, Sample, Viewport};
use world_chart::render::{
    Color, DrawCommand, NullRenderer, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextVAlign,
};

fn debt_engine() -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
        .expect("engine init");
    engine
        .set_data(us_gross_national_debt())
        .expect("set data");
    engine
}

#[test]
fn debt_chart_emits_expected_command_counts() {
    let mut engine = debt_engine();
    engine.render(Viewport::new(780, 610)).expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_command_count, 123);
    assert_eq!(renderer.last_line_count, 34);
    assert_eq!(renderer.last_text_count, 35);
    assert_eq!(renderer.last_ellipse_count, 52);
}

#[test]
fn commands_are_ordered_back_to_front() {
    let engine = debt_engine();
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");
    let commands = &pass.frame.commands;

    match &commands[0] {
        DrawCommand::Text(title) => {
            assert_eq!(title.text, "U.S. Gross National Debt");
            assert_eq!(title.x, 390.0);
            assert_eq!(title.y, 20.0);
            assert_eq!(title.font_size_px, 20.0);
            assert_eq!(title.color, Color::BLUE);
            assert_eq!(title.h_align, TextHAlign::Center);
        }
        other => panic!("expected title text, got {other:?}"),
    }
    match &commands[1] {
        DrawCommand::FillRect(rect) => {
            assert_eq!((rect.x, rect.y, rect.width, rect.height), (70.0, 40.0, 700.0, 500.0));
            assert_eq!(rect.fill_color, Color::WHITE);
        }
        other => panic!("expected plot background, got {other:?}"),
    }
    assert!(matches!(commands[2], DrawCommand::Polyline(_)));
    assert!(matches!(commands[3], DrawCommand::FillEllipse(_)));
    assert!(matches!(commands[4], DrawCommand::StrokeEllipse(_)));

    let last_marker = commands
        .iter()
        .rposition(|command| matches!(command, DrawCommand::StrokeEllipse(_)))
        .expect("markers");
    let first_axis_line = commands
        .iter()
        .position(|command| matches!(command, DrawCommand::Line(_)))
        .expect("axis lines");
    assert!(last_marker < first_axis_line);
}

#[test]
fn markers_are_drawn_at_cached_positions_with_fixed_radius() {
    let engine = debt_engine();
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    let filled: Vec<_> = pass.frame.filled_ellipses().collect();
    let cache = pass.layout.screen_cache.points();
    assert_eq!(filled.len(), cache.len());
    for (ellipse, point) in filled.iter().zip(cache) {
        assert_eq!((ellipse.x, ellipse.y), (point.x, point.y));
        assert_eq!(ellipse.radius_x, 4.0);
        assert_eq!(ellipse.radius_y, 4.0);
        assert_eq!(ellipse.color, Color::LIME);
    }

    let polyline = pass.frame.polylines().next().expect("series line");
    assert_eq!(polyline.points.as_slice(), cache);
    assert_eq!(polyline.color, Color::GREEN);
}

#[test]
fn value_axis_labels_sit_left_of_plot() {
    let engine = debt_engine();
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    let right_aligned: Vec<_> = pass
        .frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Right)
        .collect();
    assert_eq!(right_aligned.len(), 20);
    assert_eq!(right_aligned[0].text, "0");
    assert_eq!(right_aligned[19].text, "19000");
    for label in &right_aligned {
        assert_eq!(label.x, 60.0);
        assert!(label.transform.is_identity());
    }
    assert_abs_diff_eq!(right_aligned[0].y, 540.0, epsilon = 1e-9);
    assert_abs_diff_eq!(right_aligned[19].y, 40.0, epsilon = 1e-9);
}

#[test]
fn year_labels_are_rotated_below_their_ticks() {
    let engine = debt_engine();
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    let year_labels: Vec<_> = pass
        .frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Left)
        .collect();
    assert_eq!(year_labels.len(), 12);
    assert_eq!(year_labels[0].text, "1900");
    assert_eq!(year_labels[11].text, "2010");

    let first = year_labels[0];
    let anchor = first.anchor();
    assert_abs_diff_eq!(anchor.x, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(anchor.y, 550.0, epsilon = 1e-9);
    // Reading direction runs down the screen.
    let along = first.transform.apply_xy(10.0, 0.0);
    assert_abs_diff_eq!(along.x, 70.0, epsilon = 1e-9);
    assert_abs_diff_eq!(along.y, 560.0, epsilon = 1e-9);
}

#[test]
fn axis_titles_are_placed_against_surface_edges() {
    let engine = debt_engine();
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    let y_title = pass
        .frame
        .texts()
        .find(|text| text.text == "Debt ($ billions)")
        .expect("y title");
    assert_eq!(y_title.v_align, TextVAlign::Top);
    let anchor = y_title.anchor();
    assert_abs_diff_eq!(anchor.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(anchor.y, 290.0, epsilon = 1e-9);
    let along = y_title.transform.apply_xy(10.0, 0.0);
    assert!(along.y < anchor.y);

    let x_title = pass
        .frame
        .texts()
        .find(|text| text.text == "Year")
        .expect("x title");
    assert_eq!(x_title.v_align, TextVAlign::Bottom);
    assert_eq!((x_title.x, x_title.y), (420.0, 610.0));
    assert_eq!(x_title.color, Color::GREEN);
}

#[test]
fn empty_series_renders_axes_only() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
            .expect("engine init");
    let layout = engine.render(Viewport::new(780, 610)).expect("render");
    assert!(layout.screen_cache.is_empty());

    let renderer = engine.renderer();
    assert_eq!(renderer.last_text_count, 35);
    assert_eq!(renderer.last_line_count, 34);
    assert_eq!(renderer.last_ellipse_count, 0);
    assert_eq!(engine.hit_test(553.0, 516.0), None);
}

#[test]
fn single_sample_gets_a_marker_but_no_line() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
            .expect("engine init");
    engine
        .set_data(vec![Sample::new(1980.0, 909.0)])
        .expect("set data");
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    assert_eq!(pass.frame.polylines().count(), 0);
    assert_eq!(pass.frame.filled_ellipses().count(), 1);
}

#[test]
fn untitled_chart_skips_title_commands() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartConfig::us_gross_national_debt().with_titles("", "", ""),
    )
    .expect("engine init");
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    assert!(matches!(pass.frame.commands[0], DrawCommand::FillRect(_)));
    assert_eq!(pass.frame.texts().count(), 32);
}

#[test]
fn zero_sized_surface_still_renders_a_valid_frame() {
    let mut engine = debt_engine();
    let layout = engine.render(Viewport::new(0, 0)).expect("render");

    assert!(layout.plot.degenerate);
    assert_eq!(layout.plot.plot, PixelRect::new(70.0, 40.0, 1.0, 1.0));
    assert_eq!(layout.screen_cache.len(), 26);
    assert!(
        layout
            .screen_cache
            .points()
            .iter()
            .all(|point| point.x.is_finite() && point.y.is_finite())
    );
}

#[test]
fn building_a_pass_does_not_commit_it() {
    let engine = debt_engine();
    engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");
    assert!(engine.last_layout().is_none());
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn custom_tick_formatter_changes_labels_only() {
    let mut engine = debt_engine();
    engine.set_y_label_formatter(std::sync::Arc::new(|value: f64| format!("${value}")));
    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");

    let labels: Vec<_> = pass
        .frame
        .texts()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.clone())
        .collect();
    assert_eq!(labels.len(), 20);
    assert_eq!(labels[1], "$1000");
}

proptest! {
    #[test]
    fn screen_cache_mirrors_the_pass_transform(
        width in 100u32..2000,
        height in 120u32..2000,
        values in prop::collection::vec((1900.0f64..2016.0, 0.0f64..19_000.0), 0..40),
    ) {
        let samples: Vec<Sample> = values
            .into_iter()
            .map(|(x, y)| Sample::new(x, y))
            .collect();
        let mut engine =
            ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
                .expect("engine init");
        engine.set_data(samples.clone()).expect("set data");

        let layout = engine.render(Viewport::new(width, height)).expect("render");
        prop_assert_eq!(layout.screen_cache.len(), samples.len());
        for (sample, point) in samples.iter().zip(layout.screen_cache.points()) {
            prop_assert_eq!(*point, layout.transform.apply(*sample));
        }
    }
}

#[test]
fn sample_projecting_to_infinity_is_skipped_without_failing_the_pass() {
    let mut samples = us_gross_national_debt();
    samples.push(Sample::new(1.0e308, 100.0));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
            .expect("engine init");
    engine.set_data(samples).expect("finite samples are accepted");

    let layout = engine
        .render(Viewport::new(780, 610))
        .expect("pass still renders");
    assert_eq!(layout.screen_cache.len(), 27);
    assert!(!layout.screen_cache.get(26).expect("slot kept").is_finite());

    let renderer = engine.renderer();
    assert_eq!(renderer.last_text_count, 35);
    assert_eq!(renderer.last_line_count, 34);
    assert_eq!(renderer.last_ellipse_count, 52);
    assert_eq!(engine.hit_test(553.0, 516.0), Some(8));
}

#[test]
fn series_line_breaks_around_an_unprojectable_sample() {
    let mut samples = us_gross_national_debt();
    samples.insert(13, Sample::new(-1.0e308, 100.0));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
            .expect("engine init");
    engine.set_data(samples.clone()).expect("set data");

    let pass = engine
        .build_render_pass(Viewport::new(780, 610))
        .expect("build pass");
    let runs: Vec<usize> = pass
        .frame
        .polylines()
        .map(|polyline| polyline.points.len())
        .collect();
    assert_eq!(runs, [13, 13]);
    assert_eq!(pass.frame.filled_ellipses().count(), 26);

    // Indices after the gap still line up with the series.
    let layout = engine.render(Viewport::new(780, 610)).expect("render");
    let point = layout.screen_cache.get(14).expect("2003 sample");
    assert_eq!(engine.hit_test(point.x, point.y), Some(14));
    assert_eq!(samples[14], Sample::new(2003.0, 6_783.0));
}

#[test]
fn hand_built_frame_with_non_finite_polyline_is_rejected() {
    let mut frame = RenderFrame::new(Viewport::new(10, 10));
    frame.push(DrawCommand::Polyline(PolylinePrimitive::new(
        vec![PixelPoint::new(0.0, 0.0), PixelPoint::new(f64::INFINITY, 1.0)],
        1.0,
        Color::BLACK,
    )));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}
