extern crate nalgebra as na;

mod segment_segment_closest_points;
