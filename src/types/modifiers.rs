//! Shape modifier methods for SdfNode

use super::SdfNode;
use crate::math::SdfVector;

impl<V: SdfVector> SdfNode<V> {
    // === Modifier methods ===

    /// Hollow shell of `thickness` around the surface
    #[must_use]
    #[inline]
    pub fn onion(self, thickness: f32) -> Self {
        SdfNode::Onion {
            child: Box::new(self),
            thickness,
        }
    }

    /// Infinite repetition
    #[must_use]
    #[inline]
    pub fn repeat(self, spacing: V) -> Self {
        SdfNode::Repeat {
            child: Box::new(self),
            spacing,
        }
    }

    /// Finite repetition with `span` copies on each side of the origin
    #[must_use]
    #[inline]
    pub fn repeat_finite(self, spacing: V, span: V) -> Self {
        SdfNode::RepeatFinite {
            child: Box::new(self),
            spacing,
            span,
        }
    }
}
