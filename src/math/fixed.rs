//! 16.16 signed fixed-point coordinates.
//!
//! The CCW classifier converts float coordinates to this format so the
//! cross product can be evaluated exactly in 64-bit integers. The format
//! covers coordinates in `[-32768, 32768)` with a resolution of `1/65536`.

use crate::error::{GeometryError, Result};

/// A coordinate in 16.16 signed fixed-point representation.
pub type Fixed16 = i32;

/// The fixed-point representation of 1.0.
pub const ONE: Fixed16 = 1 << 16;

/// The fixed-point representation of 0.5.
pub const HALF: Fixed16 = 1 << 15;

/// Near-zero threshold for fixed-point comparisons.
pub const NEAR0: Fixed16 = 1 << 4;

/// Largest float magnitude representable as [`Fixed16`].
const RANGE: f32 = 32768.0;

/// Converts a float coordinate to fixed point, truncating toward zero.
///
/// Out-of-range inputs saturate; use [`try_from_float`] when the caller
/// needs to detect them.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn from_float(x: f32) -> Fixed16 {
    (x * ONE as f32) as Fixed16
}

/// Converts a fixed-point coordinate back to a float.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_float(x: Fixed16) -> f32 {
    x as f32 * (1.0 / ONE as f32)
}

/// Checked conversion from float to fixed point.
///
/// # Errors
///
/// Returns `CoordinateOutOfRange` if `x` is not finite or lies outside
/// the representable range.
pub fn try_from_float(x: f32) -> Result<Fixed16> {
    if !x.is_finite() || x < -RANGE || x >= RANGE {
        return Err(GeometryError::CoordinateOutOfRange {
            value: x,
            min: -RANGE,
            max: RANGE,
        });
    }
    Ok(from_float(x))
}

/// Rounds a fixed-point coordinate to the nearest integer.
#[must_use]
pub fn round(x: Fixed16) -> i32 {
    (x.wrapping_add(HALF)) >> 16
}

/// Largest integer not greater than the fixed-point coordinate.
#[must_use]
pub fn floor(x: Fixed16) -> i32 {
    x >> 16
}

/// Smallest integer not less than the fixed-point coordinate.
#[must_use]
pub fn ceil(x: Fixed16) -> i32 {
    (x.wrapping_add(ONE - 1)) >> 16
}

/// Are two fixed-point coordinates within [`NEAR0`] of each other?
#[must_use]
pub fn near_eq(x: Fixed16, y: Fixed16) -> bool {
    (x - y).abs() <= NEAR0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_roundtrip() {
        let x = from_float(1.5);
        assert_eq!(x, ONE + HALF);
        assert!((to_float(x) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn rounding_modes() {
        assert_eq!(round(from_float(2.4)), 2);
        assert_eq!(round(from_float(2.6)), 3);
        assert_eq!(floor(from_float(2.9)), 2);
        assert_eq!(ceil(from_float(2.1)), 3);
        assert_eq!(floor(from_float(-0.5)), -1);
    }

    #[test]
    fn near_eq_resolution() {
        assert!(near_eq(from_float(1.0), from_float(1.0 + 1.0 / 65536.0)));
        assert!(!near_eq(from_float(1.0), from_float(1.01)));
    }

    #[test]
    fn checked_conversion_range() {
        assert!(try_from_float(100.0).is_ok());
        assert!(try_from_float(-32768.0).is_ok());
        assert!(try_from_float(40000.0).is_err());
        assert!(try_from_float(f32::NAN).is_err());
        assert!(try_from_float(f32::INFINITY).is_err());
    }
}
