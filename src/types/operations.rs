//! Boolean and blending operations for SdfNode

use super::SdfNode;
use crate::math::SdfVector;

impl<V: SdfVector> SdfNode<V> {
    // === Operation methods ===

    /// Union with another shape
    #[must_use]
    #[inline]
    pub fn union(self, other: SdfNode<V>) -> Self {
        SdfNode::Union {
            a: Box::new(self),
            b: Box::new(other),
        }
    }

    /// Intersection with another shape
    #[must_use]
    #[inline]
    pub fn intersection(self, other: SdfNode<V>) -> Self {
        SdfNode::Intersection {
            a: Box::new(self),
            b: Box::new(other),
        }
    }

    /// Carve `cutter` out of this shape
    #[must_use]
    #[inline]
    pub fn subtract(self, cutter: SdfNode<V>) -> Self {
        SdfNode::Subtraction {
            a: Box::new(cutter),
            b: Box::new(self),
        }
    }

    /// Smooth union with another shape
    #[must_use]
    #[inline]
    pub fn smooth_union(self, other: SdfNode<V>, k: f32) -> Self {
        SdfNode::SmoothUnion {
            a: Box::new(self),
            b: Box::new(other),
            k,
        }
    }

    /// Smooth intersection with another shape
    #[must_use]
    #[inline]
    pub fn smooth_intersection(self, other: SdfNode<V>, k: f32) -> Self {
        SdfNode::SmoothIntersection {
            a: Box::new(self),
            b: Box::new(other),
            k,
        }
    }

    /// Carve `cutter` out of this shape with a blended seam
    #[must_use]
    #[inline]
    pub fn smooth_subtract(self, cutter: SdfNode<V>, k: f32) -> Self {
        SdfNode::SmoothSubtraction {
            a: Box::new(self),
            b: Box::new(cutter),
            k,
        }
    }
}
