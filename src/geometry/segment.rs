use crate::error::{GeometryError, Result};
use crate::math::{Affine2, Point2};

use super::intersect::{segment_intersection, SegmentIntersection};

/// A directed line segment between two points.
///
/// Direction is meaningful for the orientation predicates; the
/// intersection solver normalizes the endpoint order internally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// The origin point.
    pub org: Point2,
    /// The destination point.
    pub dst: Point2,
}

impl Segment {
    /// Creates a new segment from an origin and destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide, since the geometry
    /// predicates require a non-degenerate direction.
    pub fn new(org: Point2, dst: Point2) -> Result<Self> {
        if org == dst {
            return Err(GeometryError::DegenerateSegment { x: org.x, y: org.y });
        }
        Ok(Self { org, dst })
    }

    /// Returns the segment with origin and destination swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            org: self.dst,
            dst: self.org,
        }
    }

    /// Returns the segment with both endpoints transformed.
    #[must_use]
    pub fn transformed(&self, m: &Affine2) -> Self {
        Self {
            org: m * self.org,
            dst: m * self.dst,
        }
    }

    /// Computes the intersection with another segment.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> SegmentIntersection {
        segment_intersection(&self.org, &self.dst, &other.org, &other.dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Matrix3;

    #[test]
    fn rejects_coincident_endpoints() {
        let p = Point2::new(1.0, 2.0);
        let err = Segment::new(p, p);
        assert!(matches!(
            err,
            Err(GeometryError::DegenerateSegment { x, y }) if x == 1.0 && y == 2.0
        ));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let Ok(s) = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)) else {
            panic!("segment");
        };
        let r = s.reversed();
        assert_eq!(r.org, s.dst);
        assert_eq!(r.dst, s.org);
    }

    #[test]
    fn intersect_delegates_to_solver() {
        let Ok(s1) = Segment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)) else {
            panic!("segment 1");
        };
        let Ok(s2) = Segment::new(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0)) else {
            panic!("segment 2");
        };
        match s1.intersect(&s2) {
            SegmentIntersection::Point(p) => {
                assert!((p.x - 5.0).abs() < 1e-4);
                assert!(p.y.abs() < 1e-4);
            }
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn transformed_applies_affine() {
        let Ok(s) = Segment::new(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)) else {
            panic!("segment");
        };
        // Mirror across the y-axis.
        let mirror = Affine2::from_matrix_unchecked(Matrix3::new(
            -1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ));
        let t = s.transformed(&mirror);
        assert_eq!(t.org, Point2::new(-1.0, 0.0));
        assert_eq!(t.dst, Point2::new(-2.0, 0.0));
    }
}
