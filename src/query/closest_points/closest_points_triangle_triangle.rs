use crate::math::{Point, Real};
use crate::query::closest_points::closest_points_segment_segment_with_direction;
use crate::query::{ClosestPoints, NonFiniteInput};
use crate::shape::Triangle;

/// Squared normal length below which a triangle is considered degenerate, skipping its
/// vertex-vs-face separation test.
const DEGENERATE_NORMAL_SQ_EPS: Real = 1.0e-15;

/// Result of the exact triangle-triangle closest points computation.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TriangleTriangleClosestPoints {
    /// The triangles overlap.
    ///
    /// No closest-point pair is reported: any point pair realizing the zero distance would be
    /// arbitrary.
    Intersecting,
    /// A closest-point pair was localized exactly.
    ///
    /// `dist` may be zero (or rounding-noise close to zero, when coplanar edges cross) if the
    /// triangle boundaries touch at the reported pair. Treat small `dist` values as a contact
    /// accordingly.
    Disjoint {
        /// The closest point on the first triangle.
        point1: Point,
        /// The closest point on the second triangle.
        point2: Point,
        /// The distance between the two triangles, realized by `point1` and `point2`.
        dist: Real,
    },
}

impl TriangleTriangleClosestPoints {
    /// The distance between the two triangles. Zero if they intersect.
    pub fn distance(&self) -> Real {
        match self {
            TriangleTriangleClosestPoints::Intersecting => 0.0,
            TriangleTriangleClosestPoints::Disjoint { dist, .. } => *dist,
        }
    }
}

/// Closest points between two triangles.
#[inline]
pub fn closest_points_triangle_triangle(
    tri1: &Triangle,
    tri2: &Triangle,
    margin: Real,
) -> ClosestPoints {
    match closest_points_triangle_triangle_with_distance(tri1, tri2) {
        TriangleTriangleClosestPoints::Intersecting => ClosestPoints::Intersecting,
        TriangleTriangleClosestPoints::Disjoint {
            point1,
            point2,
            dist,
        } => {
            if dist <= margin {
                ClosestPoints::WithinMargin(point1, point2)
            } else {
                ClosestPoints::Disjoint
            }
        }
    }
}

/// Closest points between two triangles, with validated inputs.
///
/// Returns an error if any input coordinate is non-finite.
pub fn try_closest_points_triangle_triangle(
    tri1: &Triangle,
    tri2: &Triangle,
    margin: Real,
) -> Result<ClosestPoints, NonFiniteInput> {
    if !tri1.is_finite() || !tri2.is_finite() {
        return Err(NonFiniteInput);
    }

    Ok(closest_points_triangle_triangle(tri1, tri2, margin))
}

/// Closest points between two triangles, with the distance they realize.
///
/// This runs a sequence of exact tests, returning as soon as one of them localizes the
/// closest-point pair:
///
/// 1. The nine edge pairs, each validated by a slab test against the two off-edge vertices.
/// 2. `tri1`'s face against the vertices of `tri2`.
/// 3. `tri2`'s face against the vertices of `tri1`.
/// 4. If none of the above resolved the pair but one of them proved the triangles disjoint
///    (an edge of one triangle parallel to the other's face, or a degenerate triangle), the
///    best edge-pair candidate is returned. Otherwise the triangles intersect.
// Implemented from the PQP triangle-triangle distance test:
// E. Larsen, S. Gottschalk, M. Lin, D. Manocha, Fast proximity queries with swept sphere
// volumes, tech. report TR99-018, UNC Chapel Hill, 1999.
pub fn closest_points_triangle_triangle_with_distance(
    tri1: &Triangle,
    tri2: &Triangle,
) -> TriangleTriangleClosestPoints {
    let verts1 = tri1.vertices();
    let verts2 = tri2.vertices();
    let edges1 = tri1.edges();
    let edges2 = tri2.edges();

    let mut shown_disjoint = false;

    // Best edge-pair candidate so far, seeded safely above any real candidate so the first
    // comparison always replaces it.
    let mut best_point1 = verts1[0];
    let mut best_point2 = verts2[0];
    let mut best_dist_sq = na::distance_squared(&verts1[0], &verts2[0]) + 1.0;

    // Case 1: for each edge pair, the vector between the closest points of the two edges
    // defines a slab. If the off-edge vertex of each triangle lies outside of it, the closest
    // points of the edges are the closest points of the triangles.
    for (i, edge1) in edges1.iter().enumerate() {
        for (j, edge2) in edges2.iter().enumerate() {
            let (loc1, loc2, dir) = closest_points_segment_segment_with_direction(edge1, edge2);
            let p = edge1.point_at(&loc1);
            let q = edge2.point_at(&loc2);

            let v = q - p;
            let dist_sq = v.norm_squared();

            // `<=` so that later pairs overwrite equal-distance earlier ones.
            if dist_sq <= best_dist_sq {
                best_point1 = p;
                best_point2 = q;
                best_dist_sq = dist_sq;

                // Edge `i` spans vertices `i` and `i + 1`; the off-edge vertex is `i + 2`.
                let a = (verts1[(i + 2) % 3] - p).dot(&dir);
                let b = (verts2[(j + 2) % 3] - q).dot(&dir);

                if a <= 0.0 && b >= 0.0 {
                    return TriangleTriangleClosestPoints::Disjoint {
                        point1: p,
                        point2: q,
                        dist: dist_sq.sqrt(),
                    };
                }

                // Even when the slab test fails, a positive separation along `dir` still
                // proves the triangles disjoint.
                if v.dot(&dir) - a.max(0.0) + b.min(0.0) > 0.0 {
                    shown_disjoint = true;
                }
            }
        }
    }

    // Case 2: a vertex of `tri2` closest to the interior of `tri1`'s face.
    match closest_face_vertex_points(tri1, tri2) {
        FaceVertexSeparation::ClosestPair(point1, point2, dist) => {
            return TriangleTriangleClosestPoints::Disjoint {
                point1,
                point2,
                dist,
            }
        }
        FaceVertexSeparation::Separating => shown_disjoint = true,
        FaceVertexSeparation::NotSeparating => {}
    }

    // Case 3: a vertex of `tri1` closest to the interior of `tri2`'s face.
    match closest_face_vertex_points(tri2, tri1) {
        FaceVertexSeparation::ClosestPair(point2, point1, dist) => {
            return TriangleTriangleClosestPoints::Disjoint {
                point1,
                point2,
                dist,
            }
        }
        FaceVertexSeparation::Separating => shown_disjoint = true,
        FaceVertexSeparation::NotSeparating => {}
    }

    // Case 4: no test localized the closest points exactly. If one of them still proved the
    // triangles disjoint (an edge parallel to the other face, or a degenerate triangle), the
    // best edge-pair candidate is the answer. Otherwise the triangles intersect.
    if shown_disjoint {
        TriangleTriangleClosestPoints::Disjoint {
            point1: best_point1,
            point2: best_point2,
            dist: best_dist_sq.sqrt(),
        }
    } else {
        TriangleTriangleClosestPoints::Intersecting
    }
}

/// Outcome of testing one triangle's face normal as a separating axis for the other
/// triangle's vertices.
enum FaceVertexSeparation {
    /// The normal does not separate the triangles, or the face triangle is degenerate.
    NotSeparating,
    /// The normal separates the triangles, but the extremal vertex does not project inside
    /// the face.
    Separating,
    /// The pair (point on `face`'s interior, vertex of `other`) realizes the distance.
    ClosestPair(Point, Point, Real),
}

fn closest_face_vertex_points(face: &Triangle, other: &Triangle) -> FaceVertexSeparation {
    let edges = face.edges_scaled_directions();
    let normal = edges[0].cross(&edges[1]);
    let normal_sq = normal.norm_squared();

    // A degenerate face cannot act as a separating plane.
    if normal_sq <= DEGENERATE_NORMAL_SQ_EPS {
        return FaceVertexSeparation::NotSeparating;
    }

    let fverts = face.vertices();
    let overts = other.vertices();

    let proj = [
        (fverts[0] - overts[0]).dot(&normal),
        (fverts[0] - overts[1]).dot(&normal),
        (fverts[0] - overts[2]).dot(&normal),
    ];

    // The normal is a separating axis only if all three projections share the same strict
    // sign; the candidate vertex is the one with the extremal projection.
    let vid = if proj[0] > 0.0 && proj[1] > 0.0 && proj[2] > 0.0 {
        let mut vid = if proj[0] < proj[1] { 0 } else { 1 };
        if proj[2] < proj[vid] {
            vid = 2;
        }
        vid
    } else if proj[0] < 0.0 && proj[1] < 0.0 && proj[2] < 0.0 {
        let mut vid = if proj[0] > proj[1] { 0 } else { 1 };
        if proj[2] > proj[vid] {
            vid = 2;
        }
        vid
    } else {
        return FaceVertexSeparation::NotSeparating;
    };

    let vertex = overts[vid];

    // The candidate vertex is closest to the face interior only if it lies inside all three
    // edge half-planes of the face.
    for i in 0..3 {
        let edge_normal = normal.cross(&edges[i]);
        if (vertex - fverts[i]).dot(&edge_normal) <= 0.0 {
            return FaceVertexSeparation::Separating;
        }
    }

    let face_point = vertex + normal * (proj[vid] / normal_sq);
    FaceVertexSeparation::ClosestPair(face_point, vertex, na::distance(&face_point, &vertex))
}
