use crate::core::{LabelFormatter, TickSpec};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn x_tick_spec(&self) -> &TickSpec {
        &self.x_ticks
    }

    #[must_use]
    pub fn y_tick_spec(&self) -> &TickSpec {
        &self.y_ticks
    }

    /// Sets the X tick label formatter (default: integer truncation).
    pub fn set_x_label_formatter(&mut self, formatter: LabelFormatter) {
        self.x_ticks = self.x_ticks.relabeled(formatter);
    }

    /// Sets the Y tick label formatter (default: integer truncation).
    pub fn set_y_label_formatter(&mut self, formatter: LabelFormatter) {
        self.y_ticks = self.y_ticks.relabeled(formatter);
    }
}
