pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{is_ccw, segment_intersection, Segment, SegmentIntersection};
