//! Box and hypercube primitive SDF

use crate::math::SdfVector;

/// Signed distance to an axis-aligned box centered at origin
///
/// Works unchanged for boxes and 4D hypercuboids.
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `half_extents` - Distance from the center to each face
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_box<V: SdfVector>(point: V, half_extents: V) -> f32 {
    let q = point.abs() - half_extents;
    q.max_element().min(0.0) + q.max(V::ZERO).length()
}
