//! Non-persistent geometric queries.
//!
//! The most general methods provided by this module are:
//!
//! * [`query::distance_triangle_triangle()`](distance_triangle_triangle) to compute the minimum
//!   distance between two triangles.
//! * [`query::closest_points_triangle_triangle()`](closest_points_triangle_triangle) to compute
//!   the closest points between two triangles, if they are closer than a given margin.
//! * [`query::distance_segment_segment()`](distance_segment_segment) and
//!   [`query::closest_points_segment_segment()`](closest_points_segment_segment) for the
//!   segment-segment queries the triangle kernel is built on.
//!
//! The functions exported by the `details` submodule are lower-level versions of the ones above.
//! For example [`details::closest_points_triangle_triangle_with_distance`] also reports the
//! distance realized by the closest points, and
//! [`details::closest_points_segment_segment_with_direction`] reports the location of the
//! closest point on each segment together with a candidate separating direction.
//!
//! All queries take their operands expressed in a common coordinate frame and never mutate them.
//! The `try_` variants check their inputs for non-finite coordinates first; the other variants
//! leave the behavior for non-finite inputs unspecified.

pub use self::closest_points::{
    closest_points_segment_segment, closest_points_triangle_triangle,
    try_closest_points_triangle_triangle, ClosestPoints, TriangleTriangleClosestPoints,
};
pub use self::distance::{
    distance_segment_segment, distance_triangle_triangle, try_distance_triangle_triangle,
};
pub use self::error::NonFiniteInput;

pub mod closest_points;
pub mod distance;
mod error;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::closest_points::*;
    pub use super::distance::*;
}
