use crate::core::transform::AffineTransform;
use crate::core::types::{PixelPoint, Sample};

/// Pixel positions of every sample, index-aligned with the series.
///
/// A cache is produced whole by one projection and never edited afterwards;
/// a new render pass replaces it with a fresh value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenCache {
    points: Vec<PixelPoint>,
}

impl ScreenCache {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn project(transform: AffineTransform, samples: &[Sample]) -> Self {
        Self {
            points: transform.apply_batch(samples),
        }
    }

    #[must_use]
    pub fn points(&self) -> &[PixelPoint] {
        &self.points
    }

    /// Cached points with finite coordinates, in series order.
    ///
    /// Samples far outside the world rectangle can project to infinity. They
    /// keep their slot so indices stay aligned, but nothing is drawn for them.
    pub fn drawable_points(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        self.points
            .iter()
            .copied()
            .filter(|point| point.is_finite())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<PixelPoint> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
