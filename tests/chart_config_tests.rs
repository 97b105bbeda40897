use world_chart::api::{ChartConfig, ChartEngine};
use world_chart::core::{Axis, ChartMargins, WorldBounds};
use world_chart::render::NullRenderer;
use world_chart::ChartError;

#[test]
fn config_survives_json_round_trip() {
    let config = ChartConfig::us_gross_national_debt()
        .with_tick_steps(20.0, 2000.0)
        .with_point_radii(5.0, 6.0);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn omitted_fields_fall_back_to_defaults() {
    let json = r#"{
        "world": { "x_min": 1900.0, "x_max": 2016.0, "y_min": 0.0, "y_max": 19000.0 }
    }"#;
    let config = ChartConfig::from_json_str(json).expect("parse");

    assert_eq!(config.x_tick_step, 10.0);
    assert_eq!(config.y_tick_step, 1000.0);
    assert_eq!(config.margins, ChartMargins::default());
    assert_eq!(config.point_radius, 4.0);
    assert_eq!(config.point_hit_radius, 4.0);
    assert!(config.title.is_empty());
}

#[test]
fn invalid_json_is_reported_as_invalid_data() {
    let err = ChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn zero_tick_step_fails_at_engine_construction() {
    let config = ChartConfig::us_gross_national_debt().with_tick_steps(10.0, 0.0);
    let err = ChartEngine::new(NullRenderer::default(), config)
        .err()
        .expect("zero step must be rejected");
    assert!(matches!(err, ChartError::InvalidTickStep { axis: Axis::Y, .. }));
}

#[test]
fn zero_tick_step_in_json_is_rejected_on_load() {
    let json = r#"{
        "world": { "x_min": 1900.0, "x_max": 2016.0, "y_min": 0.0, "y_max": 19000.0 },
        "x_tick_step": 0.0
    }"#;
    let err = ChartConfig::from_json_str(json).expect_err("zero step");
    assert!(matches!(err, ChartError::InvalidTickStep { axis: Axis::X, .. }));
}

#[test]
fn inverted_world_bounds_are_rejected() {
    let err = WorldBounds::new(2016.0, 1900.0, 0.0, 19_000.0).expect_err("inverted x");
    assert!(matches!(err, ChartError::InvalidWorldBounds { .. }));

    let json = r#"{ "world": { "x_min": 0.0, "x_max": 1.0, "y_min": 5.0, "y_max": 5.0 } }"#;
    let err = ChartConfig::from_json_str(json).expect_err("flat y");
    assert!(matches!(err, ChartError::InvalidWorldBounds { .. }));
}

#[test]
fn non_positive_hit_radius_is_rejected() {
    let config = ChartConfig::us_gross_national_debt().with_point_radii(4.0, 0.0);
    let err = config.validate().expect_err("zero hit radius");
    assert!(err.to_string().contains("point_hit_radius"));
}

#[test]
fn debt_config_plans_expected_ticks() {
    let engine = ChartEngine::new(NullRenderer::default(), ChartConfig::us_gross_national_debt())
        .expect("engine init");
    assert_eq!(engine.x_tick_spec().positions().len(), 12);
    assert_eq!(engine.y_tick_spec().positions().len(), 20);
    assert_eq!(engine.config().title, "U.S. Gross National Debt");
}
