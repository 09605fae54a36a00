//! Primitive constructors for SdfNode

use glam::Vec4;

use super::SdfNode;
use crate::math::SdfVector;

impl<V: SdfVector> SdfNode<V> {
    // === Primitive constructors ===

    /// Create a sphere with the given radius
    #[must_use]
    #[inline]
    pub fn sphere(radius: f32) -> Self {
        SdfNode::Sphere { radius }
    }

    /// Create an axis-aligned box from its half-extents
    #[must_use]
    #[inline]
    pub fn cuboid(half_extents: V) -> Self {
        SdfNode::Box { half_extents }
    }

    /// Create an axis-aligned cube with equal half-extents on every axis
    #[must_use]
    #[inline]
    pub fn cube(half_extent: f32) -> Self {
        SdfNode::Box {
            half_extents: V::splat(half_extent),
        }
    }
}

impl SdfNode<Vec4> {
    /// Create a 4D hypersphere with the given radius
    #[must_use]
    #[inline]
    pub fn hypersphere(radius: f32) -> Self {
        SdfNode::Sphere { radius }
    }

    /// Create a 4D hypercube with equal half-extents on every axis
    #[must_use]
    #[inline]
    pub fn hypercube(half_extent: f32) -> Self {
        SdfNode::cube(half_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_cube_splats_extent() {
        assert_eq!(
            SdfNode::<Vec3>::cube(2.0),
            SdfNode::Box {
                half_extents: Vec3::splat(2.0)
            }
        );
    }

    #[test]
    fn test_hypersphere_is_sphere() {
        assert_eq!(SdfNode::hypersphere(7.0), SdfNode::<Vec4>::sphere(7.0));
    }
}
