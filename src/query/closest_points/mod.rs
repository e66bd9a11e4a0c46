//! Implementation details of the closest points queries.

pub use self::closest_points::ClosestPoints;
pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_direction,
};
pub use self::closest_points_triangle_triangle::{
    closest_points_triangle_triangle, closest_points_triangle_triangle_with_distance,
    try_closest_points_triangle_triangle, TriangleTriangleClosestPoints,
};

mod closest_points;
mod closest_points_segment_segment;
mod closest_points_triangle_triangle;
