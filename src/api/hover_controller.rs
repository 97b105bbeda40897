use tracing::trace;

use crate::core::{HitTester, PixelPoint};
use crate::interaction::{TooltipFormatter, TooltipUpdate};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Index of the first sample whose hover box contains `(x, y)`, checked
    /// against the latest completed render pass. `None` before any render.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let layout = self.last_layout.as_ref()?;
        HitTester::new(self.config.point_hit_radius)
            .query(layout.screen_cache.points(), PixelPoint::new(x, y))
    }

    /// Handles a pointer move and reports whether the tooltip text changed.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> TooltipUpdate {
        let hit = self.hit_test(x, y);
        let text = hit
            .and_then(|index| self.samples.get(index).copied())
            .map(|sample| (self.tooltip_formatter)(sample))
            .unwrap_or_default();

        let update = self.hover.update(hit, text);
        if let TooltipUpdate::Changed(text) = &update {
            trace!(x, y, hovered = ?hit, tooltip = %text, "tooltip changed");
        }
        update
    }

    /// Handles the pointer leaving the surface.
    pub fn pointer_leave(&mut self) -> TooltipUpdate {
        self.hover.clear()
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn tooltip_text(&self) -> &str {
        self.hover.tooltip()
    }

    /// Replaces the tooltip text builder; takes effect on the next pointer move.
    pub fn set_tooltip_formatter(&mut self, formatter: TooltipFormatter) {
        self.tooltip_formatter = formatter;
    }
}
