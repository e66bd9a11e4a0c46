use crate::math::{Real, Vector};
use crate::query::ClosestPoints;
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
    margin: Real,
) -> ClosestPoints {
    let (loc1, loc2, _) = closest_points_segment_segment_with_direction(seg1, seg2);
    let p1 = seg1.point_at(&loc1);
    let p2 = seg2.point_at(&loc2);

    if na::distance_squared(&p1, &p2) <= margin * margin {
        ClosestPoints::WithinMargin(p1, p2)
    } else {
        ClosestPoints::Disjoint
    }
}

/// Closest points between two segments, with a candidate separating direction.
///
/// Returns the location of the closest point on each segment, and a vector parallel to the
/// line supporting the closest-point pair. The vector always points from `seg1` toward
/// `seg2`'s side, but it is *not* necessarily the difference of the two closest points: for
/// candidates involving a segment interior it is built so that it stays usable as a separating
/// direction even when the segments intersect or are degenerate.
///
/// Degenerate (zero-length) segments collapse to their start point; parallel segments resolve
/// through the clamp logic. No input ever produces an error.
// Implemented from the algorithm described in:
// Vladimir J. Lumelsky, On fast computation of distance between line segments.
// Information Processing Letters 21, 1985.
pub fn closest_points_segment_segment_with_direction(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation, Vector) {
    let p = seg1.a;
    let a = seg1.scaled_direction();
    let q = seg2.a;
    let b = seg2.scaled_direction();

    // `t` parameterizes `seg1`, `u` parameterizes `seg2`.
    let t_vec = q - p;
    let a_dot_a = a.norm_squared();
    let b_dot_b = b.norm_squared();
    let a_dot_b = a.dot(&b);
    let a_dot_t = a.dot(&t_vec);
    let b_dot_t = b.dot(&t_vec);

    // Unconstrained `t` minimizing the distance between the two supporting lines,
    // clamped onto `seg1`.
    let denom = a_dot_a * b_dot_b - a_dot_b * a_dot_b;
    let t = clamped_ratio(a_dot_t * b_dot_b - b_dot_t * a_dot_b, denom);

    // `u` for the point on `seg2`'s supporting line closest to the point at `t`.
    let u = guarded_ratio(t * a_dot_b - b_dot_t, b_dot_b);

    if u <= 0.0 {
        // The closest point on `seg2` is its start; re-derive `t` by projecting it onto `seg1`.
        let loc2 = SegmentPointLocation::OnVertex(0);
        let t = guarded_ratio(a_dot_t, a_dot_a);

        if t <= 0.0 {
            (SegmentPointLocation::OnVertex(0), loc2, t_vec)
        } else if t >= 1.0 {
            (SegmentPointLocation::OnVertex(1), loc2, q - (p + a))
        } else {
            // Perpendicular to `seg1` in the plane spanned by `a` and the connecting vector.
            let dir = a.cross(&t_vec.cross(&a));
            (SegmentPointLocation::OnEdge([1.0 - t, t]), loc2, dir)
        }
    } else if u >= 1.0 {
        // Symmetric case with `seg2`'s far endpoint.
        let loc2 = SegmentPointLocation::OnVertex(1);
        let y = q + b;
        let t = guarded_ratio(a_dot_b + a_dot_t, a_dot_a);

        if t <= 0.0 {
            (SegmentPointLocation::OnVertex(0), loc2, y - p)
        } else if t >= 1.0 {
            (SegmentPointLocation::OnVertex(1), loc2, y - (p + a))
        } else {
            let w = y - p;
            let dir = a.cross(&w.cross(&a));
            (SegmentPointLocation::OnEdge([1.0 - t, t]), loc2, dir)
        }
    } else {
        let loc2 = SegmentPointLocation::OnEdge([1.0 - u, u]);

        if t <= 0.0 {
            let dir = b.cross(&t_vec.cross(&b));
            (SegmentPointLocation::OnVertex(0), loc2, dir)
        } else if t >= 1.0 {
            let w = q - (p + a);
            let dir = b.cross(&w.cross(&b));
            (SegmentPointLocation::OnVertex(1), loc2, dir)
        } else {
            // Both closest points are interior: the common perpendicular is `a × b`, flipped
            // if it points away from `seg2`.
            let mut dir = a.cross(&b);
            if dir.dot(&t_vec) < 0.0 {
                dir = -dir;
            }
            (SegmentPointLocation::OnEdge([1.0 - t, t]), loc2, dir)
        }
    }
}

/// `num / denom` clamped to `[0, 1]`, with a zero denominator resolved explicitly instead of
/// being left to NaN/infinity propagation through the comparisons.
fn clamped_ratio(num: Real, denom: Real) -> Real {
    if denom == 0.0 {
        if num > 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        na::clamp(num / denom, 0.0, 1.0)
    }
}

/// Raw `num / denom`, with a zero denominator treated as the `0` clamp boundary.
///
/// The denominators guarded here vanish only for a zero-length direction, and then the
/// numerator vanishes with them, so `0` is the consistent resolution.
fn guarded_ratio(num: Real, denom: Real) -> Real {
    if denom == 0.0 {
        0.0
    } else {
        num / denom
    }
}
