pub mod fixed;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3x3 matrix type.
pub type Matrix3 = nalgebra::Matrix3<f32>;

/// 2D affine transformation, applied to points before/after tessellation.
pub type Affine2 = nalgebra::Affine2<f32>;

/// Global near-zero epsilon for floating-point comparisons.
///
/// Shared across the whole engine; every near-zero and near-equality
/// decision in this crate goes through this single constant.
pub const NEAR0: f32 = 1.0 / 4096.0;

/// Is `x` within [`NEAR0`] of zero?
#[must_use]
pub fn near0(x: f32) -> bool {
    x.abs() <= NEAR0
}

/// Are `x` and `y` within [`NEAR0`] of each other?
#[must_use]
pub fn near_eq(x: f32, y: f32) -> bool {
    (x - y).abs() <= NEAR0
}

/// Midpoint of `x` and `y`.
#[must_use]
pub fn avg(x: f32, y: f32) -> f32 {
    (x + y) * 0.5
}
