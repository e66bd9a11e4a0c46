use crate::math::Real;
use crate::query::closest_points::closest_points_segment_segment_with_direction;
use crate::shape::Segment;

/// Distance between two segments.
#[inline]
pub fn distance_segment_segment(seg1: &Segment, seg2: &Segment) -> Real {
    let (loc1, loc2, _) = closest_points_segment_segment_with_direction(seg1, seg2);
    na::distance(&seg1.point_at(&loc1), &seg2.point_at(&loc2))
}
