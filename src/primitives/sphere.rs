//! Sphere and hypersphere primitive SDF
//!
//! The same formula serves both: a 3D sphere for `Vec3`, a 4D hypersphere
//! for `Vec4`.

use crate::math::SdfVector;

/// Signed distance to a sphere centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `radius` - Sphere radius
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_sphere<V: SdfVector>(point: V, radius: f32) -> f32 {
    point.length() - radius
}
