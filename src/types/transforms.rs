//! Spatial transform methods for SdfNode
//!
//! Besides the builders, transform nodes can be retargeted in place between
//! frames (an animated hypercube, a camera-attached cursor). Mutation must
//! not overlap a march; see [`Scene`](crate::scene::Scene) for the snapshot
//! mechanism that enforces this across threads.

use glam::Mat4;

use super::SdfNode;
use crate::math::SdfVector;

impl<V: SdfVector> SdfNode<V> {
    // === Transform methods ===

    /// Translate by vector
    #[must_use]
    #[inline]
    pub fn translate(self, offset: V) -> Self {
        SdfNode::Translate {
            child: Box::new(self),
            offset,
        }
    }

    /// Apply a world-to-child matrix to the query point
    #[must_use]
    #[inline]
    pub fn transform(self, matrix: Mat4) -> Self {
        SdfNode::Transform {
            child: Box::new(self),
            matrix,
        }
    }

    /// Replace the offset of a translation node
    ///
    /// Returns `false` (and leaves the node untouched) if `self` is not a
    /// [`SdfNode::Translate`].
    pub fn set_translation(&mut self, new_offset: V) -> bool {
        match self {
            SdfNode::Translate { offset, .. } => {
                *offset = new_offset;
                true
            }
            _ => false,
        }
    }

    /// Offset of a translation node
    pub fn translation(&self) -> Option<V> {
        match self {
            SdfNode::Translate { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Replace the matrix of a transform node
    ///
    /// Returns `false` if `self` is not a [`SdfNode::Transform`].
    pub fn set_transform(&mut self, new_matrix: Mat4) -> bool {
        match self {
            SdfNode::Transform { matrix, .. } => {
                *matrix = new_matrix;
                true
            }
            _ => false,
        }
    }

    /// Matrix of a transform node
    pub fn transform_matrix(&self) -> Option<Mat4> {
        match self {
            SdfNode::Transform { matrix, .. } => Some(*matrix),
            _ => None,
        }
    }
}
