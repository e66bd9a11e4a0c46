use approx::assert_relative_eq;
use na::Point3;
use tridist3d::query::details::closest_points_segment_segment_with_direction;
use tridist3d::query::{closest_points_segment_segment, distance_segment_segment, ClosestPoints};
use tridist3d::shape::{Segment, SegmentPointLocation};

fn closest_points(seg1: &Segment, seg2: &Segment) -> (Point3<f64>, Point3<f64>) {
    let (loc1, loc2, _) = closest_points_segment_segment_with_direction(seg1, seg2);
    (seg1.point_at(&loc1), seg2.point_at(&loc2))
}

#[test]
fn parallel_segments_at_unit_separation() {
    let seg1 = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));

    assert_relative_eq!(distance_segment_segment(&seg1, &seg2), 1.0);

    // Same, with the second segment shifted so that the overlap region is partial.
    let seg3 = Segment::new(Point3::new(0.5, 1.0, 0.0), Point3::new(1.5, 1.0, 0.0));
    assert_relative_eq!(distance_segment_segment(&seg1, &seg3), 1.0);
}

#[test]
fn perpendicular_skew_segments() {
    // Two skew edges of a unit cube-like configuration, crossing at x = 0.5 when
    // projected, one unit apart along z.
    let seg1 = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point3::new(0.5, -0.5, 1.0), Point3::new(0.5, 0.5, 1.0));

    let (loc1, loc2, dir) = closest_points_segment_segment_with_direction(&seg1, &seg2);

    assert_eq!(loc1, SegmentPointLocation::OnEdge([0.5, 0.5]));
    assert_eq!(loc2, SegmentPointLocation::OnEdge([0.5, 0.5]));
    assert_relative_eq!(seg1.point_at(&loc1), Point3::new(0.5, 0.0, 0.0));
    assert_relative_eq!(seg2.point_at(&loc2), Point3::new(0.5, 0.0, 1.0));
    assert_relative_eq!(distance_segment_segment(&seg1, &seg2), 1.0);

    // Interior-interior case: the returned direction is the common perpendicular and it
    // points from the first segment toward the second.
    assert_relative_eq!(dir.dot(&seg1.scaled_direction()), 0.0);
    assert_relative_eq!(dir.dot(&seg2.scaled_direction()), 0.0);
    assert!(dir.z > 0.0);
}

#[test]
fn endpoint_endpoint_closest_pair() {
    let seg1 = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point3::new(2.0, 1.0, 0.0), Point3::new(2.0, 2.0, 0.0));

    let (loc1, loc2, _) = closest_points_segment_segment_with_direction(&seg1, &seg2);
    assert_eq!(loc1, SegmentPointLocation::OnVertex(1));
    assert_eq!(loc2, SegmentPointLocation::OnVertex(0));
    assert_relative_eq!(distance_segment_segment(&seg1, &seg2), 2.0f64.sqrt());
}

#[test]
fn degenerate_segment_reduces_to_point_segment_distance() {
    let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));

    // The reference closed-form point-to-segment distance.
    let point_segment_distance = |pt: Point3<f64>| {
        let dir = seg.scaled_direction();
        let t = na::clamp((pt - seg.a).dot(&dir) / dir.norm_squared(), 0.0, 1.0);
        na::distance(&(seg.a + dir * t), &pt)
    };

    let configurations = [
        Point3::new(-1.0, 1.0, 0.0), // projects before `seg.a`
        Point3::new(3.0, 1.0, 0.0),  // projects past `seg.b`
        Point3::new(1.0, 2.0, 0.0),  // projects inside the segment
        Point3::new(0.5, -3.0, 4.0),
    ];

    for pt in configurations {
        let degenerate = Segment::new(pt, pt);
        assert_relative_eq!(
            distance_segment_segment(&seg, &degenerate),
            point_segment_distance(pt),
            epsilon = 1.0e-12
        );
        assert_relative_eq!(
            distance_segment_segment(&degenerate, &seg),
            point_segment_distance(pt),
            epsilon = 1.0e-12
        );
    }
}

#[test]
fn both_segments_degenerate() {
    let seg1 = Segment::new(Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 2.0, 3.0));
    let seg2 = Segment::new(Point3::new(4.0, 6.0, 3.0), Point3::new(4.0, 6.0, 3.0));

    assert_relative_eq!(distance_segment_segment(&seg1, &seg2), 5.0);
}

#[test]
fn direction_points_toward_second_segment() {
    let cases = [
        (
            Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
            Segment::new(Point3::new(0.5, 1.0, 0.0), Point3::new(1.5, 1.0, 0.0)),
        ),
        (
            Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
            Segment::new(Point3::new(0.5, -0.5, 1.0), Point3::new(0.5, 0.5, 1.0)),
        ),
        (
            Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 2.0)),
            Segment::new(Point3::new(3.0, 1.0, 1.0), Point3::new(4.0, 1.0, 1.0)),
        ),
    ];

    for (seg1, seg2) in &cases {
        let (loc1, loc2, dir) = closest_points_segment_segment_with_direction(seg1, seg2);
        let connecting = seg2.point_at(&loc2) - seg1.point_at(&loc1);
        assert!(dir.dot(&connecting) > 0.0);
    }
}

#[test]
fn margin_api() {
    let seg1 = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let seg2 = Segment::new(Point3::new(0.0, 1.0, 0.0), Point3::new(1.0, 1.0, 0.0));

    assert_eq!(
        closest_points_segment_segment(&seg1, &seg2, 0.5),
        ClosestPoints::Disjoint
    );

    match closest_points_segment_segment(&seg1, &seg2, 2.0) {
        ClosestPoints::WithinMargin(p1, p2) => {
            assert_relative_eq!(na::distance(&p1, &p2), 1.0);
        }
        other => panic!("expected WithinMargin, got {other:?}"),
    }
}
