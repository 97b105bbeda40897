pub mod axis;
pub mod datasets;
pub mod hit_test;
pub mod layout;
pub mod primitives;
pub mod screen_cache;
pub mod transform;
pub mod types;

pub use axis::{
    Axis, LabelFormatter, MAX_TICKS_PER_AXIS, Tick, TickPositions, TickSpec,
    default_label_formatter, tick_positions, truncate_label,
};
pub use hit_test::HitTester;
pub use layout::{ChartLayout, ChartMargins, MIN_PLOT_EXTENT_PX, PlotLayout};
pub use primitives::fractional_year;
pub use screen_cache::ScreenCache;
pub use transform::AffineTransform;
pub use types::{PixelPoint, PixelRect, Sample, Viewport, WorldBounds};
