use crate::core::types::PixelPoint;

/// Pointer hit-testing against projected sample positions.
///
/// A point qualifies when both `|dx|` and `|dy|` are strictly below the
/// radius, so the hit area is a square box centered on the marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    radius: f64,
}

impl HitTester {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Returns the first index in `cache` order whose box contains `point`.
    #[must_use]
    pub fn query(self, cache: &[PixelPoint], point: PixelPoint) -> Option<usize> {
        cache.iter().position(|cached| {
            (point.x - cached.x).abs() < self.radius && (point.y - cached.y).abs() < self.radius
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_corner_inside_radius_hits_even_beyond_circle() {
        let cache = [PixelPoint::new(100.0, 100.0)];
        // Euclidean distance is ~4.95 but each axis is within 3.5.
        let hit = HitTester::new(4.0).query(&cache, PixelPoint::new(103.5, 103.5));
        assert_eq!(hit, Some(0));
    }

    #[test]
    fn boundary_distance_is_excluded() {
        let cache = [PixelPoint::new(10.0, 10.0)];
        assert_eq!(
            HitTester::new(4.0).query(&cache, PixelPoint::new(14.0, 10.0)),
            None
        );
    }

    #[test]
    fn overlapping_boxes_resolve_to_first_index() {
        let cache = [PixelPoint::new(10.0, 10.0), PixelPoint::new(11.0, 10.0)];
        assert_eq!(
            HitTester::new(4.0).query(&cache, PixelPoint::new(11.0, 10.0)),
            Some(0)
        );
    }
}
