use tracing::{debug, trace};

use crate::core::{ChartLayout, Sample, TickSpec, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, TooltipFormatter, default_tooltip_formatter};
use crate::render::Renderer;

use super::{ChartConfig, LayoutResult, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series, turns each surface size into an ordered
/// render frame, keeps the screen projection of the latest completed pass,
/// and answers hover queries against it.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) style: RenderStyle,
    pub(super) layout: ChartLayout,
    pub(super) x_ticks: TickSpec,
    pub(super) y_ticks: TickSpec,
    pub(super) samples: Vec<Sample>,
    pub(super) last_layout: Option<LayoutResult>,
    pub(super) hover: HoverState,
    pub(super) tooltip_formatter: TooltipFormatter,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty series.
    ///
    /// The whole config is validated here so that a bad tick step or world
    /// rectangle is reported before the first repaint.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let x_ticks = config.x_tick_spec()?;
        let y_ticks = config.y_tick_spec()?;
        debug!(
            x_ticks = x_ticks.positions().len(),
            y_ticks = y_ticks.positions().len(),
            "chart engine configured"
        );

        Ok(Self {
            renderer,
            layout: ChartLayout::new(config.margins),
            config,
            style: RenderStyle::default(),
            x_ticks,
            y_ticks,
            samples: Vec::new(),
            last_layout: None,
            hover: HoverState::default(),
            tooltip_formatter: default_tooltip_formatter(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Replaces the series. Sample order is kept exactly as given.
    ///
    /// The previous screen projection no longer lines up with the new series,
    /// so hover queries report nothing until the next render. The displayed
    /// tooltip is left to the next pointer event to clear.
    pub fn set_data(&mut self, samples: Vec<Sample>) -> ChartResult<()> {
        if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "sample {index} must have finite coordinates"
            )));
        }

        debug!(count = samples.len(), "set chart samples");
        self.samples = samples;
        self.last_layout = None;
        Ok(())
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Geometry and screen projection of the latest completed render pass.
    #[must_use]
    pub fn last_layout(&self) -> Option<&LayoutResult> {
        self.last_layout.as_ref()
    }

    /// Runs a full repaint for a surface of `viewport` size.
    ///
    /// The screen cache is replaced only once the backend accepted the frame.
    pub fn render(&mut self, viewport: Viewport) -> ChartResult<&LayoutResult> {
        let pass = self.build_render_pass(viewport)?;
        self.renderer.render(&pass.frame)?;
        Ok(self.commit_layout(pass.layout))
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        viewport: Viewport,
    ) -> ChartResult<&LayoutResult>
    where
        R: CairoContextRenderer,
    {
        let pass = self.build_render_pass(viewport)?;
        self.renderer.render_on_cairo_context(context, &pass.frame)?;
        Ok(self.commit_layout(pass.layout))
    }

    fn commit_layout(&mut self, layout: LayoutResult) -> &LayoutResult {
        trace!(
            width = layout.plot.viewport.width,
            height = layout.plot.viewport.height,
            degenerate = layout.plot.degenerate,
            cached_points = layout.screen_cache.len(),
            "render pass committed"
        );
        self.last_layout.insert(layout)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
