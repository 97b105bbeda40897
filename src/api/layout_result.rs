use crate::core::{AffineTransform, PlotLayout, ScreenCache};
use crate::render::RenderFrame;

/// State one render pass hands to hover handling.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub plot: PlotLayout,
    /// World-to-pixel transform used for the series and axes.
    pub transform: AffineTransform,
    pub screen_cache: ScreenCache,
}

/// A built but not yet committed render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub frame: RenderFrame,
    pub layout: LayoutResult,
}
