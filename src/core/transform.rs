#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::types::{PixelPoint, PixelRect, Sample, WorldBounds};

/// 2D affine transform stored as a 2x3 matrix.
///
/// A point maps as:
/// - `x' = m11 * x + m21 * y + dx`
/// - `y' = m12 * x + m22 * y + dy`
///
/// Values are immutable; composition produces new transforms so callers never
/// share a mutable "current transform".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            m11: 1.0,
            m12: 0.0,
            m21: 0.0,
            m22: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    #[must_use]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::identity()
        }
    }

    /// Clockwise rotation on screen (y grows downward) around the origin.
    #[must_use]
    pub fn rotation_degrees(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Builds the transform that sends the world corners
    /// `(x_min, y_max)`, `(x_max, y_max)` and `(x_min, y_min)` onto the given
    /// pixel points. Three correspondences fully determine an affine map.
    #[must_use]
    pub fn from_three_points(
        world: WorldBounds,
        top_left: PixelPoint,
        top_right: PixelPoint,
        bottom_left: PixelPoint,
    ) -> Self {
        let world_width = world.x_max - world.x_min;
        let world_height = world.y_min - world.y_max;

        let m11 = (top_right.x - top_left.x) / world_width;
        let m12 = (top_right.y - top_left.y) / world_width;
        let m21 = (bottom_left.x - top_left.x) / world_height;
        let m22 = (bottom_left.y - top_left.y) / world_height;

        Self {
            m11,
            m12,
            m21,
            m22,
            dx: top_left.x - m11 * world.x_min - m21 * world.y_max,
            dy: top_left.y - m12 * world.x_min - m22 * world.y_max,
        }
    }

    /// World-to-plot transform with the vertical flip: larger values land on
    /// smaller pixel rows.
    #[must_use]
    pub fn from_world_to_rect(world: WorldBounds, target: PixelRect) -> Self {
        Self::from_three_points(
            world,
            target.top_left(),
            target.top_right(),
            target.bottom_left(),
        )
    }

    /// Composes `self` followed by `next`.
    ///
    /// `rotation_degrees(90.0).then(translation(x, y))` rotates around the
    /// origin first and only then moves the result to `(x, y)`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            dx: self.dx * next.m11 + self.dy * next.m21 + next.dx,
            dy: self.dx * next.m12 + self.dy * next.m22 + next.dy,
        }
    }

    /// Returns `None` for singular or non-finite matrices.
    #[must_use]
    pub fn invert(self) -> Option<Self> {
        let det = self.m11 * self.m22 - self.m12 * self.m21;
        if !det.is_finite() || det == 0.0 {
            return None;
        }

        let m11 = self.m22 / det;
        let m12 = -self.m12 / det;
        let m21 = -self.m21 / det;
        let m22 = self.m11 / det;
        Some(Self {
            m11,
            m12,
            m21,
            m22,
            dx: -(self.dx * m11 + self.dy * m21),
            dy: -(self.dx * m12 + self.dy * m22),
        })
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::identity()
    }

    #[must_use]
    pub fn apply_xy(self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(
            self.m11 * x + self.m21 * y + self.dx,
            self.m12 * x + self.m22 * y + self.dy,
        )
    }

    #[must_use]
    pub fn apply(self, sample: Sample) -> PixelPoint {
        self.apply_xy(sample.x, sample.y)
    }

    /// Projects every sample, preserving index alignment with the input.
    #[must_use]
    pub fn apply_batch(self, samples: &[Sample]) -> Vec<PixelPoint> {
        #[cfg(feature = "parallel-projection")]
        {
            samples.par_iter().map(|sample| self.apply(*sample)).collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            samples.iter().map(|sample| self.apply(*sample)).collect()
        }
    }
}
