//! Winding classification.
//!
//! The three-point CCW test runs on 16.16 fixed-point coordinates with a
//! 64-bit cross product, so the sign is exact for coordinates within the
//! fixed-point range. A plain float cross product would reintroduce the
//! cancellation error this is designed to avoid.

use crate::math::{fixed, Point2};

/// Is the turn from vector (p1→p0) to (p1→p2) counter-clockwise?
///
/// ```text
///                  p1
/// p2 . <----------- .
///                   |
///                   |
///                   .
///                  p0
/// ```
///
/// Returns `false` for collinear and degenerate triples. The result is
/// exact after the float-to-fixed conversion; points differing by less
/// than the fixed-point resolution collapse to collinear.
#[must_use]
pub fn is_ccw(p0: &Point2, p1: &Point2, p2: &Point2) -> bool {
    let x0 = i64::from(fixed::from_float(p0.x));
    let y0 = i64::from(fixed::from_float(p0.y));
    let x1 = i64::from(fixed::from_float(p1.x));
    let y1 = i64::from(fixed::from_float(p1.y));
    let x2 = i64::from(fixed::from_float(p2.x));
    let y2 = i64::from(fixed::from_float(p2.y));

    (x0 - x1) * (y2 - y1) - (y0 - y1) * (x2 - x1) > 0
}

/// Signed area of a polygon in the plane (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn signed_area(points: &[Point2]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0_f64;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += f64::from(points[i].x) * f64::from(points[j].y)
            - f64::from(points[j].x) * f64::from(points[i].y);
    }
    (sum * 0.5) as f32
}

/// Is the polygon wound counter-clockwise?
#[must_use]
pub fn is_polygon_ccw(points: &[Point2]) -> bool {
    signed_area(points) > 0.0
}
