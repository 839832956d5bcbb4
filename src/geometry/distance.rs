//! Point-to-segment distance and side predicates.
//!
//! The horizontal functions take a segment sorted so `upper.y <= lower.y`
//! and a center point with `upper.y <= center.y <= lower.y`; the vertical
//! functions are the symmetric variants sorted by x. Violating the ordering
//! is a programmer error, checked in debug builds only.

use crate::math::Point2;

/// A point-to-segment distance scaled by an implicit positive span.
///
/// The cheap distance computations return the true signed distance
/// multiplied by `yu + yl` (or `xl + xr`). The magnitude is NOT the
/// geometric distance; only the sign is meaningful. The raw value is
/// kept crate-private so it can feed only the scale-invariant
/// interpolation inside the intersection solver.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaledDistance(f64);

impl ScaledDistance {
    /// Sign of the underlying distance: `-1`, `0`, or `1`.
    #[must_use]
    pub fn sign(self) -> i32 {
        if self.0 < 0.0 {
            -1
        } else {
            i32::from(self.0 > 0.0)
        }
    }

    /// Raw scaled value, for the intersection interpolation only.
    pub(crate) fn get(self) -> f64 {
        self.0
    }
}

impl std::ops::Neg for ScaledDistance {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Signed horizontal distance from `center` to segment `(upper, lower)`.
///
/// Positive when `center` lies to the right of the segment's interpolated
/// x-coordinate at `center.y`, negative to the left. A horizontal segment
/// has no meaningful interpolation and yields exactly 0.
///
/// The interpolation starts from whichever endpoint is closer to `center`
/// in y, which keeps the relative error small near either end.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn distance_h(center: &Point2, upper: &Point2, lower: &Point2) -> f32 {
    debug_assert!(
        upper.y <= center.y && center.y <= lower.y,
        "expected upper({}) <= center({}) <= lower({}) in y",
        upper.y,
        center.y,
        lower.y
    );

    let yu = center.y - upper.y;
    let yl = lower.y - center.y;
    debug_assert!(yu >= 0.0 && yl >= 0.0);

    if yu + yl > 0.0 {
        if yu < yl {
            // distance = (center.x - upper.x) + (upper.x - lower.x) * yu / (yu + yl)
            let factor = f64::from(upper.x - lower.x) / f64::from(yu + yl);
            (center.x - upper.x) + (f64::from(yu) * factor) as f32
        } else {
            // distance = (center.x - lower.x) + (lower.x - upper.x) * yl / (yu + yl)
            let factor = f64::from(lower.x - upper.x) / f64::from(yu + yl);
            (center.x - lower.x) + (f64::from(yl) * factor) as f32
        }
    } else {
        // horizontal segment
        0.0
    }
}

/// Signed vertical distance from `center` to segment `(left, right)`.
///
/// Positive when `center` lies below the segment's interpolated
/// y-coordinate at `center.x`. A vertical segment yields exactly 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn distance_v(center: &Point2, left: &Point2, right: &Point2) -> f32 {
    debug_assert!(
        left.x <= center.x && center.x <= right.x,
        "expected left({}) <= center({}) <= right({}) in x",
        left.x,
        center.x,
        right.x
    );

    let xl = center.x - left.x;
    let xr = right.x - center.x;
    debug_assert!(xl >= 0.0 && xr >= 0.0);

    if xl + xr > 0.0 {
        if xl < xr {
            let factor = f64::from(left.y - right.y) / f64::from(xl + xr);
            (center.y - left.y) + (f64::from(xl) * factor) as f32
        } else {
            let factor = f64::from(right.y - left.y) / f64::from(xl + xr);
            (center.y - right.y) + (f64::from(xr) * factor) as f32
        }
    } else {
        // vertical segment
        0.0
    }
}

/// Horizontal distance scaled by `yu + yl`, sign-only.
///
/// Derivation: averaging the two endpoint interpolations of `distance_h`
/// gives
///
/// `distance * (yu + yl) = (center.x - lower.x) * yu + (center.x - upper.x) * yl`
///
/// which avoids the division entirely. `yu + yl` is non-negative, so the
/// sign matches the true distance.
#[must_use]
pub fn distance_h_scaled(center: &Point2, upper: &Point2, lower: &Point2) -> ScaledDistance {
    debug_assert!(
        upper.y <= center.y && center.y <= lower.y,
        "expected upper({}) <= center({}) <= lower({}) in y",
        upper.y,
        center.y,
        lower.y
    );

    let yu = center.y - upper.y;
    let yl = lower.y - center.y;
    debug_assert!(yu >= 0.0 && yl >= 0.0);

    if yu + yl > 0.0 {
        ScaledDistance(
            f64::from(center.x - lower.x) * f64::from(yu)
                + f64::from(center.x - upper.x) * f64::from(yl),
        )
    } else {
        ScaledDistance(0.0)
    }
}

/// Vertical distance scaled by `xl + xr`, sign-only.
#[must_use]
pub fn distance_v_scaled(center: &Point2, left: &Point2, right: &Point2) -> ScaledDistance {
    debug_assert!(
        left.x <= center.x && center.x <= right.x,
        "expected left({}) <= center({}) <= right({}) in x",
        left.x,
        center.x,
        right.x
    );

    let xl = center.x - left.x;
    let xr = right.x - center.x;
    debug_assert!(xl >= 0.0 && xr >= 0.0);

    if xl + xr > 0.0 {
        ScaledDistance(
            f64::from(center.y - right.y) * f64::from(xl)
                + f64::from(center.y - left.y) * f64::from(xr),
        )
    } else {
        ScaledDistance(0.0)
    }
}

/// Side of segment `(upper, lower)` the point `center` lies on: `-1` left,
/// `0` on the segment, `1` right.
///
/// Evaluates only the sign, via the scaled distance; faster than
/// [`distance_h`].
#[must_use]
pub fn position_h(center: &Point2, upper: &Point2, lower: &Point2) -> i32 {
    distance_h_scaled(center, upper, lower).sign()
}

/// Side of segment `(left, right)` the point `center` lies on: `-1` above,
/// `0` on the segment, `1` below.
#[must_use]
pub fn position_v(center: &Point2, left: &Point2, right: &Point2) -> i32 {
    distance_v_scaled(center, left, right).sign()
}

/// Is `v` strictly left of segment `(upper, lower)`?
#[must_use]
pub fn left_of_segment(v: &Point2, upper: &Point2, lower: &Point2) -> bool {
    position_h(v, upper, lower) < 0
}

/// Is `v` on segment `(upper, lower)` or left of it?
#[must_use]
pub fn on_or_left_of_segment(v: &Point2, upper: &Point2, lower: &Point2) -> bool {
    position_h(v, upper, lower) <= 0
}

/// Is `v` strictly right of segment `(upper, lower)`?
#[must_use]
pub fn right_of_segment(v: &Point2, upper: &Point2, lower: &Point2) -> bool {
    position_h(v, upper, lower) > 0
}

/// Is `v` on segment `(upper, lower)` or right of it?
#[must_use]
pub fn on_or_right_of_segment(v: &Point2, upper: &Point2, lower: &Point2) -> bool {
    position_h(v, upper, lower) >= 0
}

/// Is `v` strictly above segment `(left, right)`?
#[must_use]
pub fn above_segment(v: &Point2, left: &Point2, right: &Point2) -> bool {
    position_v(v, left, right) < 0
}

/// Is `v` on segment `(left, right)` or above it?
#[must_use]
pub fn on_or_above_segment(v: &Point2, left: &Point2, right: &Point2) -> bool {
    position_v(v, left, right) <= 0
}

/// Is `v` strictly below segment `(left, right)`?
#[must_use]
pub fn below_segment(v: &Point2, left: &Point2, right: &Point2) -> bool {
    position_v(v, left, right) > 0
}

/// Is `v` on segment `(left, right)` or below it?
#[must_use]
pub fn on_or_below_segment(v: &Point2, left: &Point2, right: &Point2) -> bool {
    position_v(v, left, right) >= 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f32 = 1e-5;

    #[test]
    fn distance_h_point_on_segment() {
        // center (5,5) lies exactly on the segment (0,0)->(10,10).
        let upper = Point2::new(0.0, 0.0);
        let lower = Point2::new(10.0, 10.0);
        let center = Point2::new(5.0, 5.0);
        let d = distance_h(&center, &upper, &lower);
        assert!(d.abs() < TOL, "d={d}");
        assert_eq!(position_h(&center, &upper, &lower), 0);
    }

    #[test]
    fn distance_h_left_and_right() {
        let upper = Point2::new(0.0, 0.0);
        let lower = Point2::new(0.0, 10.0);
        // Segment is the y-axis: distance is just x.
        let right = Point2::new(3.0, 4.0);
        let left = Point2::new(-2.0, 7.0);
        assert_relative_eq!(distance_h(&right, &upper, &lower), 3.0, epsilon = TOL);
        assert_relative_eq!(distance_h(&left, &upper, &lower), -2.0, epsilon = TOL);
        assert_eq!(position_h(&right, &upper, &lower), 1);
        assert_eq!(position_h(&left, &upper, &lower), -1);
    }

    #[test]
    fn distance_h_horizontal_segment_is_zero() {
        let upper = Point2::new(0.0, 2.0);
        let lower = Point2::new(10.0, 2.0);
        let center = Point2::new(100.0, 2.0);
        assert_eq!(distance_h(&center, &upper, &lower), 0.0);
        assert_eq!(position_h(&center, &upper, &lower), 0);
    }

    #[test]
    fn distance_v_above_and_below() {
        let left = Point2::new(0.0, 0.0);
        let right = Point2::new(10.0, 0.0);
        // Segment is the x-axis: distance is just y.
        let below = Point2::new(4.0, 2.5);
        let above = Point2::new(6.0, -1.5);
        assert_relative_eq!(distance_v(&below, &left, &right), 2.5, epsilon = TOL);
        assert_relative_eq!(distance_v(&above, &left, &right), -1.5, epsilon = TOL);
        assert_eq!(position_v(&below, &left, &right), 1);
        assert_eq!(position_v(&above, &left, &right), -1);
    }

    #[test]
    fn distance_v_vertical_segment_is_zero() {
        let left = Point2::new(3.0, 0.0);
        let right = Point2::new(3.0, 10.0);
        let center = Point2::new(3.0, 5.0);
        assert_eq!(distance_v(&center, &left, &right), 0.0);
    }

    #[test]
    fn position_matches_distance_sign() {
        let upper = Point2::new(1.0, -2.0);
        let lower = Point2::new(7.0, 9.0);
        let samples = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 3.5),
            Point2::new(9.0, 5.0),
            Point2::new(3.0, -2.0),
            Point2::new(5.5, 9.0),
        ];
        for center in &samples {
            let d = distance_h(center, &upper, &lower);
            let sign = if d < 0.0 {
                -1
            } else {
                i32::from(d > 0.0)
            };
            assert_eq!(
                position_h(center, &upper, &lower),
                sign,
                "center=({}, {})",
                center.x,
                center.y
            );
        }
    }

    #[test]
    fn scaled_distance_sign_only() {
        let upper = Point2::new(0.0, 0.0);
        let lower = Point2::new(0.0, 10.0);
        let center = Point2::new(3.0, 4.0);
        let scaled = distance_h_scaled(&center, &upper, &lower);
        assert_eq!(scaled.sign(), 1);
        // The raw magnitude carries the yu + yl factor: 3 * 10 = 30, not 3.
        assert_relative_eq!(scaled.get(), 30.0, epsilon = 1e-9);
        assert_eq!((-scaled).sign(), -1);
    }

    #[test]
    fn segment_side_predicates() {
        let upper = Point2::new(0.0, 0.0);
        let lower = Point2::new(0.0, 10.0);
        let l = Point2::new(-1.0, 5.0);
        let r = Point2::new(1.0, 5.0);
        let on = Point2::new(0.0, 5.0);
        assert!(left_of_segment(&l, &upper, &lower));
        assert!(!left_of_segment(&on, &upper, &lower));
        assert!(on_or_left_of_segment(&on, &upper, &lower));
        assert!(right_of_segment(&r, &upper, &lower));
        assert!(on_or_right_of_segment(&on, &upper, &lower));

        let left = Point2::new(0.0, 0.0);
        let right = Point2::new(10.0, 0.0);
        let top = Point2::new(5.0, -1.0);
        let bottom = Point2::new(5.0, 1.0);
        let mid = Point2::new(5.0, 0.0);
        assert!(above_segment(&top, &left, &right));
        assert!(on_or_above_segment(&mid, &left, &right));
        assert!(below_segment(&bottom, &left, &right));
        assert!(on_or_below_segment(&mid, &left, &right));
    }
}
