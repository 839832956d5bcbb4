//! Numerically stable segment-segment intersection.
//!
//! Solving the 2x2 linear system directly is ill-conditioned for
//! near-parallel segments and near-endpoint crossings. Instead the solver
//! runs two independent passes, one per coordinate: each pass sorts the
//! endpoints, rejects when the projections do not overlap, and interpolates
//! the intersection coordinate between the two closest compatible reference
//! points. This bounds the relative error because it never extrapolates.

use std::mem;

use crate::math::{avg, near0, Point2, Vector2, NEAR0};

use super::distance::{distance_h, distance_h_scaled, distance_v, distance_v_scaled};

/// Outcome of intersecting two line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not cross.
    None,
    /// The segments are parallel within the near-zero tolerance; no
    /// intersection point is computed.
    Parallel,
    /// The segments cross at the contained point.
    Point(Point2),
}

/// Computes the intersection of segments `(org1, dst1)` and `(org2, dst2)`.
///
/// Segment direction does not matter; each pass normalizes the endpoint
/// order internally. Segments sharing an endpoint resolve to that endpoint
/// exactly. Near-misses whose signed distances are within [`NEAR0`] of zero
/// are admitted as touching; this tolerance keeps the planar subdivision
/// consistent when an endpoint sits almost exactly on another segment.
///
/// Zero-length segments are not guarded here; the caller must not pass
/// `org == dst` (see [`Segment::new`](super::segment::Segment::new) for a
/// checked construction).
#[must_use]
pub fn segment_intersection(
    org1: &Point2,
    dst1: &Point2,
    org2: &Point2,
    dst2: &Point2,
) -> SegmentIntersection {
    // Near-parallel segments have no stable intersection point.
    if near_parallel(org1, dst1, org2, dst2) {
        return SegmentIntersection::Parallel;
    }

    let Some(x) = intersection_x(org1, dst1, org2, dst2) else {
        return SegmentIntersection::None;
    };
    let Some(y) = intersection_y(org1, dst1, org2, dst2) else {
        return SegmentIntersection::None;
    };
    SegmentIntersection::Point(Point2::new(x, y))
}

/// Is the slope cross product of the two segments within the near-zero
/// tolerance?
#[allow(clippy::cast_possible_truncation)]
fn near_parallel(org1: &Point2, dst1: &Point2, org2: &Point2, dst2: &Point2) -> bool {
    let d1: Vector2 = org1 - dst1;
    let d2: Vector2 = org2 - dst2;

    let dk = (f64::from(d1.y) * f64::from(d2.x) - f64::from(d2.y) * f64::from(d1.x)) as f32;
    near0(dk)
}

/// Interpolation `(x * a + y * b) / (a + b)` for the intersection point.
///
/// `a` and `b` may be slightly negative from the tolerance policy and are
/// clamped to zero. Interpolating from the larger-weight side keeps the
/// result accurate even when `a` and `b` are very large; when both are
/// zero the midpoint is the only sensible answer.
#[allow(clippy::cast_possible_truncation)]
fn interpolate(x: f32, a: f64, y: f32, b: f64) -> f32 {
    let a = a.max(0.0);
    let b = b.max(0.0);

    if a >= b {
        if a == 0.0 {
            return avg(x, y);
        }
        (f64::from(x) + f64::from(y - x) * (b / (a + b))) as f32
    } else {
        (f64::from(y) + f64::from(x - y) * (a / (a + b))) as f32
    }
}

/// The x-coordinate pass.
///
/// Sorts the endpoints so `org1.x <= org2.x <= dst1.x` (rejecting when the
/// x-intervals do not overlap), then interpolates `result.x` between the
/// two endpoints bracketing the crossing:
///
/// ```text
///        org2
///          .
///          |   .
///      dy1 |       .
/// . . . . . . . . . . * . . . . . . . . . dst1
/// org1                |    .       | dy2
///                     |        .   |
///                     |            .
///                 result.x        dst2
/// ```
///
/// `result.x = (org2.x * dy2 + dst.x * dy1) / (dy1 + dy2)` where `dst` is
/// whichever of `dst1`/`dst2` ends the overlap.
fn intersection_x<'a>(
    mut org1: &'a Point2,
    mut dst1: &'a Point2,
    mut org2: &'a Point2,
    mut dst2: &'a Point2,
) -> Option<f32> {
    if org1.x > dst1.x {
        mem::swap(&mut org1, &mut dst1);
    }
    if org2.x > dst2.x {
        mem::swap(&mut org2, &mut dst2);
    }
    if org1.x > org2.x {
        mem::swap(&mut org1, &mut org2);
        mem::swap(&mut dst1, &mut dst2);
    }

    if org2.x > dst1.x {
        // The x-intervals do not overlap.
        return None;
    }

    if dst1.x <= dst2.x {
        // The overlap ends at dst1: org2 and dst1 each project onto the
        // other segment, so measure both with the full distance.
        let mut dy1 = f64::from(distance_v(org2, org1, dst1));
        let mut dy2 = f64::from(distance_v(dst1, org2, dst2));

        if dy1 + dy2 < 0.0 {
            dy1 = -dy1;
            dy2 = -dy2;
        }

        // Opposite signs mean no crossing, but distances within the
        // tolerance of zero are treated as touching.
        if dy1 < -f64::from(NEAR0) || dy2 < -f64::from(NEAR0) {
            return None;
        }

        Some(interpolate(org2.x, dy2, dst1.x, dy1))
    } else {
        // Both endpoints of segment 2 project onto segment 1. The scaled
        // distances share the same `dst1.x - org1.x` factor, which cancels
        // in the interpolation, so the cheap variant is exact here.
        let mut dy1 = distance_v_scaled(org2, org1, dst1).get();
        let mut dy2 = (-distance_v_scaled(dst2, org1, dst1)).get();

        if dy1 + dy2 < 0.0 {
            dy1 = -dy1;
            dy2 = -dy2;
        }

        if dy1 < -f64::from(NEAR0) || dy2 < -f64::from(NEAR0) {
            return None;
        }

        Some(interpolate(org2.x, dy2, dst2.x, dy1))
    }
}

/// The y-coordinate pass, symmetric to [`intersection_x`].
fn intersection_y<'a>(
    mut org1: &'a Point2,
    mut dst1: &'a Point2,
    mut org2: &'a Point2,
    mut dst2: &'a Point2,
) -> Option<f32> {
    if org1.y > dst1.y {
        mem::swap(&mut org1, &mut dst1);
    }
    if org2.y > dst2.y {
        mem::swap(&mut org2, &mut dst2);
    }
    if org1.y > org2.y {
        mem::swap(&mut org1, &mut org2);
        mem::swap(&mut dst1, &mut dst2);
    }

    if org2.y > dst1.y {
        // The y-intervals do not overlap.
        return None;
    }

    if dst1.y <= dst2.y {
        let mut dx1 = f64::from(distance_h(org2, org1, dst1));
        let mut dx2 = f64::from(distance_h(dst1, org2, dst2));

        if dx1 + dx2 < 0.0 {
            dx1 = -dx1;
            dx2 = -dx2;
        }

        if dx1 < -f64::from(NEAR0) || dx2 < -f64::from(NEAR0) {
            return None;
        }

        Some(interpolate(org2.y, dx2, dst1.y, dx1))
    } else {
        let mut dx1 = distance_h_scaled(org2, org1, dst1).get();
        let mut dx2 = (-distance_h_scaled(dst2, org1, dst1)).get();

        if dx1 + dx2 < 0.0 {
            dx1 = -dx1;
            dx2 = -dx2;
        }

        if dx1 < -f64::from(NEAR0) || dx2 < -f64::from(NEAR0) {
            return None;
        }

        Some(interpolate(org2.y, dx2, dst2.y, dx1))
    }
}
