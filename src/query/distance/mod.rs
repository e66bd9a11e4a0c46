//! Implementation details of the distance queries.

pub use self::distance_segment_segment::distance_segment_segment;
pub use self::distance_triangle_triangle::{
    distance_triangle_triangle, try_distance_triangle_triangle,
};

mod distance_segment_segment;
mod distance_triangle_triangle;
