use serde::{Deserialize, Serialize};

use crate::core::{Axis, ChartMargins, TickSpec, WorldBounds};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can load chart setup from
/// JSON without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub world: WorldBounds,
    #[serde(default = "default_x_tick_step")]
    pub x_tick_step: f64,
    #[serde(default = "default_y_tick_step")]
    pub y_tick_step: f64,
    #[serde(default)]
    pub margins: ChartMargins,
    /// Marker radius in pixels, independent of the world transform.
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    /// Half-size of the square hover box around each marker.
    #[serde(default = "default_point_hit_radius")]
    pub point_hit_radius: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_axis_title: String,
    #[serde(default)]
    pub y_axis_title: String,
}

impl ChartConfig {
    /// Creates a config with default ticks, margins and radii and no titles.
    #[must_use]
    pub fn new(world: WorldBounds) -> Self {
        Self {
            world,
            x_tick_step: default_x_tick_step(),
            y_tick_step: default_y_tick_step(),
            margins: ChartMargins::default(),
            point_radius: default_point_radius(),
            point_hit_radius: default_point_hit_radius(),
            title: String::new(),
            x_axis_title: String::new(),
            y_axis_title: String::new(),
        }
    }

    /// Config matching `core::datasets::us_gross_national_debt`.
    #[must_use]
    pub fn us_gross_national_debt() -> Self {
        Self::new(WorldBounds {
            x_min: 1900.0,
            x_max: 2016.0,
            y_min: 0.0,
            y_max: 19_000.0,
        })
        .with_titles("U.S. Gross National Debt", "Year", "Debt ($ billions)")
    }

    #[must_use]
    pub fn with_tick_steps(mut self, x_tick_step: f64, y_tick_step: f64) -> Self {
        self.x_tick_step = x_tick_step;
        self.y_tick_step = y_tick_step;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_point_radii(mut self, point_radius: f64, point_hit_radius: f64) -> Self {
        self.point_radius = point_radius;
        self.point_hit_radius = point_hit_radius;
        self
    }

    #[must_use]
    pub fn with_titles(
        mut self,
        title: impl Into<String>,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.x_axis_title = x_axis_title.into();
        self.y_axis_title = y_axis_title.into();
        self
    }

    /// Validates the whole config, including tick plans, before any render.
    pub fn validate(&self) -> ChartResult<()> {
        self.world.validate()?;
        self.margins.validate()?;
        self.x_tick_spec()?;
        self.y_tick_spec()?;

        for (name, value) in [
            ("point_radius", self.point_radius),
            ("point_hit_radius", self.point_hit_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }

    pub(super) fn x_tick_spec(&self) -> ChartResult<TickSpec> {
        TickSpec::new(Axis::X, self.world.x_min, self.world.x_max, self.x_tick_step)
    }

    pub(super) fn y_tick_spec(&self) -> ChartResult<TickSpec> {
        TickSpec::new(Axis::Y, self.world.y_min, self.world.y_max, self.y_tick_step)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_x_tick_step() -> f64 {
    10.0
}

fn default_y_tick_step() -> f64 {
    1000.0
}

fn default_point_radius() -> f64 {
    4.0
}

fn default_point_hit_radius() -> f64 {
    4.0
}
