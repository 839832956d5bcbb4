use thiserror::Error;

/// Errors produced by the planar geometry kernel.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate segment: origin and destination coincide at ({x}, {y})")]
    DegenerateSegment { x: f32, y: f32 },

    #[error("coordinate {value} is outside the fixed-point range [{min}, {max})")]
    CoordinateOutOfRange { value: f32, min: f32, max: f32 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
