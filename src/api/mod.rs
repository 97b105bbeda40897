mod engine;
mod engine_config;
mod hover_controller;
mod label_formatter_controller;
mod layout_result;
mod render_frame_builder;
mod render_style;

pub use engine::ChartEngine;
pub use engine_config::ChartConfig;
pub use layout_result::{LayoutResult, RenderPass};
pub use render_style::RenderStyle;
