//! world-chart: a line-and-point chart engine for resizable surfaces.
//!
//! The crate maps a fixed world rectangle (year × value) onto a plot area that
//! is recomputed on every resize, emits backend-agnostic draw commands, keeps
//! the screen projection of each render pass, and hit-tests pointer positions
//! against it for hover tooltips.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
