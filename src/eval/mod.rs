//! SDF evaluation
//!
//! Functions for evaluating SDF trees at points, plus the [`DistanceField`]
//! trait through which the marchers see any evaluable scene.

mod normal;
pub mod parallel;

pub use normal::{
    sample_normal, to_surface_vector, to_surface_vector_zw, TRAILING_PLANE_DIRECTIONS,
    TRAILING_PLANE_SAMPLE_RADIUS,
};
pub use parallel::{eval_batch, eval_batch_parallel};

use crate::math::SdfVector;
use crate::modifiers::*;
use crate::operations::*;
use crate::primitives::*;
use crate::transforms::*;
use crate::types::{SdfNode, SdfTree};
use std::sync::Arc;

/// Anything that can be sampled as a signed distance field
///
/// Implemented by [`SdfNode`], [`SdfTree`] and shared pointers to either, so
/// marchers accept a bare node, a container or a published scene snapshot.
pub trait DistanceField {
    /// Sample vector type (`Vec3` or `Vec4`)
    type Vector: SdfVector;

    /// Signed distance: negative inside, zero on the boundary, positive outside
    fn evaluate_distance(&self, position: Self::Vector) -> f32;

    /// Map a world position into the frame of the sub-field that owns it
    ///
    /// Used for texture lookups that must stick to moving geometry.
    fn local_sample_position(&self, position: Self::Vector) -> Self::Vector;
}

/// Evaluate an SDF tree at a single point
///
/// Recursively traverses the tree and computes the signed distance.
///
/// # Arguments
/// * `node` - The SDF tree root
/// * `point` - Point to evaluate
///
/// # Returns
/// Signed distance to the surface
#[inline]
pub fn eval<V: SdfVector>(node: &SdfNode<V>, point: V) -> f32 {
    match node {
        // === Primitives ===
        SdfNode::Sphere { radius } => sdf_sphere(point, *radius),
        SdfNode::Box { half_extents } => sdf_box(point, *half_extents),

        // === Operations ===
        SdfNode::Union { a, b } => sdf_union(eval(a, point), eval(b, point)),
        SdfNode::Intersection { a, b } => sdf_intersection(eval(a, point), eval(b, point)),
        SdfNode::Subtraction { a, b } => sdf_subtraction(eval(a, point), eval(b, point)),
        SdfNode::SmoothUnion { a, b, k } => sdf_smooth_union(eval(a, point), eval(b, point), *k),
        SdfNode::SmoothIntersection { a, b, k } => {
            sdf_smooth_intersection(eval(a, point), eval(b, point), *k)
        }
        SdfNode::SmoothSubtraction { a, b, k } => {
            sdf_smooth_subtraction(eval(a, point), eval(b, point), *k)
        }

        // === Transforms ===
        SdfNode::Translate { child, offset } => eval(child, transform_translate(point, *offset)),
        SdfNode::Transform { child, matrix } => eval(child, transform_matrix(point, matrix)),

        // === Modifiers ===
        SdfNode::Onion { child, thickness } => modifier_onion(eval(child, point), *thickness),
        SdfNode::Repeat { child, spacing } => eval(child, modifier_repeat(point, *spacing)),
        SdfNode::RepeatFinite {
            child,
            spacing,
            span,
        } => eval(child, modifier_repeat_finite(point, *spacing, *span)),
    }
}

/// Map a world point into the local frame of the primitive that owns it
///
/// Transforms and domain modifiers pass the mapped point down; hard booleans
/// follow the operand that supplied the distance; smooth booleans blend both
/// operands' local points with the same weight as their distances.
pub fn local_position<V: SdfVector>(node: &SdfNode<V>, point: V) -> V {
    match node {
        SdfNode::Sphere { .. } | SdfNode::Box { .. } => point,

        SdfNode::Union { a, b } => {
            if union_selects_lhs(eval(a, point), eval(b, point)) {
                local_position(a, point)
            } else {
                local_position(b, point)
            }
        }
        SdfNode::Intersection { a, b } => {
            if intersection_selects_lhs(eval(a, point), eval(b, point)) {
                local_position(a, point)
            } else {
                local_position(b, point)
            }
        }
        SdfNode::Subtraction { a, b } => {
            if subtraction_selects_lhs(eval(a, point), eval(b, point)) {
                local_position(a, point)
            } else {
                local_position(b, point)
            }
        }
        SdfNode::SmoothUnion { a, b, k } => {
            let h = smooth_union_factor(eval(a, point), eval(b, point), *k);
            blend(local_position(b, point), local_position(a, point), h)
        }
        SdfNode::SmoothIntersection { a, b, k } => {
            let h = smooth_intersection_factor(eval(a, point), eval(b, point), *k);
            blend(local_position(b, point), local_position(a, point), h)
        }
        SdfNode::SmoothSubtraction { a, b, k } => {
            let h = smooth_subtraction_factor(eval(a, point), eval(b, point), *k);
            blend(local_position(a, point), local_position(b, point), h)
        }

        SdfNode::Translate { child, offset } => {
            local_position(child, transform_translate(point, *offset))
        }
        SdfNode::Transform { child, matrix } => {
            local_position(child, transform_matrix(point, matrix))
        }

        SdfNode::Onion { child, .. } => local_position(child, point),
        SdfNode::Repeat { child, spacing } => {
            local_position(child, modifier_repeat(point, *spacing))
        }
        SdfNode::RepeatFinite {
            child,
            spacing,
            span,
        } => local_position(child, modifier_repeat_finite(point, *spacing, *span)),
    }
}

#[inline(always)]
fn blend<V: SdfVector>(from: V, to: V, t: f32) -> V {
    to * t + from * (1.0 - t)
}

impl<V: SdfVector> DistanceField for SdfNode<V> {
    type Vector = V;

    #[inline]
    fn evaluate_distance(&self, position: V) -> f32 {
        eval(self, position)
    }

    #[inline]
    fn local_sample_position(&self, position: V) -> V {
        local_position(self, position)
    }
}

impl<V: SdfVector> DistanceField for SdfTree<V> {
    type Vector = V;

    #[inline]
    fn evaluate_distance(&self, position: V) -> f32 {
        eval(&self.root, position)
    }

    #[inline]
    fn local_sample_position(&self, position: V) -> V {
        local_position(&self.root, position)
    }
}

impl<F: DistanceField + ?Sized> DistanceField for Arc<F> {
    type Vector = F::Vector;

    #[inline]
    fn evaluate_distance(&self, position: F::Vector) -> f32 {
        (**self).evaluate_distance(position)
    }

    #[inline]
    fn local_sample_position(&self, position: F::Vector) -> F::Vector {
        (**self).local_sample_position(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3, Vec4};

    #[test]
    fn test_eval_sphere() {
        let sphere = SdfNode::<Vec3>::sphere(1.0);
        assert!((eval(&sphere, Vec3::ZERO) + 1.0).abs() < 0.0001);
        assert!(eval(&sphere, Vec3::X).abs() < 0.0001);
        assert!((eval(&sphere, Vec3::new(2.0, 0.0, 0.0)) - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_eval_union_is_min() {
        let a = SdfNode::<Vec3>::sphere(1.0);
        let b = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(3.0, 0.0, 0.0));
        let shape = a.clone().union(b.clone());
        for p in [Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0), Vec3::new(-2.0, 4.0, 1.0)] {
            assert_eq!(eval(&shape, p), eval(&a, p).min(eval(&b, p)));
        }
    }

    #[test]
    fn test_eval_intersection_is_max() {
        let a = SdfNode::<Vec4>::hypersphere(1.0);
        let b = SdfNode::<Vec4>::hypercube(0.8);
        let shape = a.clone().intersection(b.clone());
        for p in [Vec4::ZERO, Vec4::splat(0.5), Vec4::new(2.0, 0.0, 0.0, -1.0)] {
            assert_eq!(eval(&shape, p), eval(&a, p).max(eval(&b, p)));
        }
    }

    #[test]
    fn test_eval_subtract_carves_cutter() {
        let shape = SdfNode::<Vec3>::sphere(1.0).subtract(SdfNode::cube(0.5));
        assert!(eval(&shape, Vec3::ZERO) > 0.0);
        assert!(eval(&shape, Vec3::X).abs() < 0.01);
    }

    #[test]
    fn test_eval_smooth_subtract_carves_cutter() {
        let base = SdfNode::<Vec3>::sphere(10.0);
        let hole = SdfNode::<Vec3>::sphere(3.0).translate(Vec3::new(10.0, 0.0, 0.0));
        let shape = base.smooth_subtract(hole, 0.5);
        // the cutter's center is now empty space
        assert!(eval(&shape, Vec3::new(10.0, 0.0, 0.0)) > 0.0);
        // the base's center now lies 7 units from the hole's wall
        assert!((eval(&shape, Vec3::ZERO) + 7.0).abs() < 1e-4);
        // the opposite side of the base keeps its surface
        assert!(eval(&shape, Vec3::new(-10.0, 0.0, 0.0)).abs() < 1e-4);
    }

    #[test]
    fn test_eval_translate_zero_is_identity() {
        let a = SdfNode::<Vec4>::hypercube(1.0);
        let t = a.clone().translate(Vec4::ZERO);
        for p in [Vec4::ZERO, Vec4::new(1.0, 2.0, -3.0, 0.5)] {
            assert_eq!(eval(&t, p), eval(&a, p));
        }
    }

    #[test]
    fn test_eval_transform_rotates_query() {
        let shape = SdfNode::<Vec4>::cuboid(Vec4::new(1.0, 1.0, 1.0, 5.0))
            .transform(crate::math::rot_zw(std::f32::consts::FRAC_PI_2));
        // query z maps onto child w, where the box is long
        let d = eval(&shape, Vec4::new(0.0, 0.0, 4.0, 0.0));
        assert!(d < 0.0);
    }

    #[test]
    fn test_eval_onion() {
        let shell = SdfNode::<Vec3>::sphere(2.0).onion(0.25);
        assert!((eval(&shell, Vec3::ZERO) - 1.75).abs() < 1e-5);
        assert!((eval(&shell, Vec3::new(2.0, 0.0, 0.0)) + 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_eval_finite_repetition_of_hyperspheres() {
        let grid = SdfNode::hypersphere(7.0).repeat_finite(Vec4::splat(17.0), Vec4::ONE);
        assert!((eval(&grid, Vec4::new(17.0, -17.0, 17.0, 0.0)) + 7.0).abs() < 1e-4);
        // outside the 3x3x3x3 block, distance grows again
        assert!(eval(&grid, Vec4::new(51.0, 0.0, 0.0, 0.0)) > 20.0);
    }

    #[test]
    fn test_local_position_follows_translation() {
        let shape = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(5.0, 0.0, 0.0));
        let local = local_position(&shape, Vec3::new(6.0, 0.0, 0.0));
        assert_eq!(local, Vec3::X);
    }

    #[test]
    fn test_local_position_follows_union_side() {
        let a = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(-5.0, 0.0, 0.0));
        let b = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(5.0, 0.0, 0.0));
        let shape = a.union(b);
        assert_eq!(local_position(&shape, Vec3::new(4.0, 0.0, 0.0)), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(local_position(&shape, Vec3::new(-4.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_local_position_smooth_union_far_from_seam() {
        let a = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(-5.0, 0.0, 0.0));
        let b = SdfNode::<Vec3>::sphere(1.0).translate(Vec3::new(5.0, 0.0, 0.0));
        let shape = a.smooth_union(b, 0.5);
        let local = local_position(&shape, Vec3::new(5.5, 0.0, 0.0));
        assert!((local - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_local_position_through_matrix() {
        let m = Mat4::from_translation(Vec3::new(0.0, -2.0, 0.0));
        let shape = SdfNode::<Vec3>::sphere(1.0).transform(m);
        assert_eq!(local_position(&shape, Vec3::new(0.0, 3.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_distance_field_through_tree_and_arc() {
        let tree = Arc::new(SdfTree::new(SdfNode::<Vec4>::hypersphere(2.0)));
        assert!((tree.evaluate_distance(Vec4::W * 3.0) - 1.0).abs() < 1e-6);
        assert_eq!(tree.local_sample_position(Vec4::X), Vec4::X);
    }
}
