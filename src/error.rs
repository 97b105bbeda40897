use thiserror::Error;

use crate::core::Axis;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid {axis} tick step: {step} (must be finite and > 0)")]
    InvalidTickStep { axis: Axis, step: f64 },

    #[error(
        "invalid world bounds: x=[{x_min}, {x_max}], y=[{y_min}, {y_max}] (must be finite with min < max)"
    )]
    InvalidWorldBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
