use crate::math::Real;
use crate::query::closest_points::closest_points_triangle_triangle_with_distance;
use crate::query::NonFiniteInput;
use crate::shape::Triangle;

/// Minimum distance between two triangles.
///
/// Returns `0.0` (up to rounding, for coplanar crossing edges) if the triangles intersect
/// (touch or overlap).
#[inline]
pub fn distance_triangle_triangle(tri1: &Triangle, tri2: &Triangle) -> Real {
    closest_points_triangle_triangle_with_distance(tri1, tri2).distance()
}

/// Minimum distance between two triangles, with validated inputs.
///
/// Returns an error if any input coordinate is non-finite.
pub fn try_distance_triangle_triangle(
    tri1: &Triangle,
    tri2: &Triangle,
) -> Result<Real, NonFiniteInput> {
    if !tri1.is_finite() || !tri2.is_finite() {
        return Err(NonFiniteInput);
    }

    Ok(distance_triangle_triangle(tri1, tri2))
}
