//! Shapes supported by the distance queries.

pub use self::segment::{Segment, SegmentPointLocation};
pub use self::triangle::Triangle;

mod segment;
mod triangle;
