pub mod distance;
pub mod intersect;
pub mod segment;
pub mod winding;

pub use distance::{
    distance_h, distance_h_scaled, distance_v, distance_v_scaled, position_h, position_v,
    ScaledDistance,
};
pub use intersect::{segment_intersection, SegmentIntersection};
pub use segment::Segment;
pub use winding::{is_ccw, is_polygon_ccw, signed_area};
