use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{PixelRect, Viewport};
use crate::error::{ChartError, ChartResult};

/// Smallest plot extent handed to downstream math.
pub const MIN_PLOT_EXTENT_PX: f64 = 1.0;

/// Space reserved around the plot area for titles and axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            left: 70.0,
            right: 10.0,
            top: 40.0,
            bottom: 70.0,
        }
    }
}

impl ChartMargins {
    pub fn validate(self) -> ChartResult<()> {
        for (edge, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{edge}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Plot-area geometry for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub viewport: Viewport,
    pub plot: PixelRect,
    /// Set when margins consumed the surface and an extent was clamped.
    pub degenerate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartLayout {
    margins: ChartMargins,
}

impl ChartLayout {
    #[must_use]
    pub fn new(margins: ChartMargins) -> Self {
        Self { margins }
    }

    #[must_use]
    pub fn margins(self) -> ChartMargins {
        self.margins
    }

    /// Derives the plot rectangle for `viewport`.
    ///
    /// Nothing is cached between calls; every resize must call this again.
    #[must_use]
    pub fn compute(self, viewport: Viewport) -> PlotLayout {
        let surface_width = f64::from(viewport.width);
        let surface_height = f64::from(viewport.height);
        let raw_width = surface_width - self.margins.left - self.margins.right;
        let raw_height = surface_height - self.margins.top - self.margins.bottom;

        let degenerate = raw_width < MIN_PLOT_EXTENT_PX || raw_height < MIN_PLOT_EXTENT_PX;
        if degenerate {
            debug!(
                width = viewport.width,
                height = viewport.height,
                raw_width,
                raw_height,
                "surface too small for margins; clamping plot area"
            );
        }

        PlotLayout {
            viewport,
            plot: PixelRect::new(
                self.margins.left,
                self.margins.top,
                raw_width.max(MIN_PLOT_EXTENT_PX),
                raw_height.max(MIN_PLOT_EXTENT_PX),
            ),
            degenerate,
        }
    }
}
