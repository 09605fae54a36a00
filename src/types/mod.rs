//! Core types
//!
//! Defines the [`SdfNode`] tree structure and related types.
//!
//! A tree is generic over its sample vector: `SdfNode<Vec3>` describes
//! ordinary 3D geometry, `SdfNode<Vec4>` four-dimensional geometry. Both
//! operands of a composition share the same vector type, so a 3D field can
//! never be combined with a 4D one.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

mod constructors;
mod containers;
mod modifiers;
mod operations;
mod transforms;

pub use containers::{BiRay, Ray, SdfMetadata, SdfTree};

/// 3D SDF tree
pub type SdfNode3 = SdfNode<Vec3>;

/// 4D SDF tree
pub type SdfNode4 = SdfNode<Vec4>;

/// Category of an SDF node variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdfCategory {
    /// Leaf geometry nodes (spheres, boxes)
    Primitive,
    /// Boolean and blending operations (union, intersection, smooth union, etc.)
    Operation,
    /// Spatial transform nodes (translation, matrix)
    Transform,
    /// Surface and domain modifiers (onion, repetition)
    Modifier,
}

/// Signed Distance Function Node
///
/// Represents a node in the SDF tree. Each node can be:
/// - A primitive shape (sphere, box)
/// - An operation combining two shapes (union, intersection, etc.)
/// - A transform applied to a child node
/// - A modifier deforming a child node
///
/// Children are owned exclusively; a tree has no shared subtrees and no
/// cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SdfNode<V> {
    // === Primitives ===
    /// Sphere (3D) or hypersphere (4D) with radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },

    /// Axis-aligned box or hypercuboid
    Box {
        /// Distance from the center to each face
        half_extents: V,
    },

    // === Operations ===
    /// Union of two shapes (min distance)
    Union {
        /// First operand
        a: Box<SdfNode<V>>,
        /// Second operand
        b: Box<SdfNode<V>>,
    },

    /// Intersection of two shapes (max distance)
    Intersection {
        /// First operand
        a: Box<SdfNode<V>>,
        /// Second operand
        b: Box<SdfNode<V>>,
    },

    /// Subtraction: `b` with `a` carved out
    Subtraction {
        /// Left operand, the shape carved away
        a: Box<SdfNode<V>>,
        /// Right operand, the shape carved from
        b: Box<SdfNode<V>>,
    },

    /// Smooth union with blending
    SmoothUnion {
        /// First operand
        a: Box<SdfNode<V>>,
        /// Second operand
        b: Box<SdfNode<V>>,
        /// Blending radius
        k: f32,
    },

    /// Smooth intersection with blending
    SmoothIntersection {
        /// First operand
        a: Box<SdfNode<V>>,
        /// Second operand
        b: Box<SdfNode<V>>,
        /// Blending radius
        k: f32,
    },

    /// Smooth subtraction: `a` with `b` carved out
    ///
    /// The operand roles are the reverse of [`SdfNode::Subtraction`].
    SmoothSubtraction {
        /// Left operand, the shape carved from
        a: Box<SdfNode<V>>,
        /// Right operand, the shape carved away
        b: Box<SdfNode<V>>,
        /// Blending radius
        k: f32,
    },

    // === Transforms ===
    /// Translation
    Translate {
        /// Child node
        child: Box<SdfNode<V>>,
        /// Translation offset
        offset: V,
    },

    /// General 4x4 matrix, applied to the query point
    Transform {
        /// Child node
        child: Box<SdfNode<V>>,
        /// World-to-child matrix
        matrix: Mat4,
    },

    // === Modifiers ===
    /// Hollow shell around the child's surface
    Onion {
        /// Child node
        child: Box<SdfNode<V>>,
        /// Shell thickness
        thickness: f32,
    },

    /// Infinite repetition
    Repeat {
        /// Child node
        child: Box<SdfNode<V>>,
        /// Lattice spacing per axis
        spacing: V,
    },

    /// Finite repetition
    RepeatFinite {
        /// Child node
        child: Box<SdfNode<V>>,
        /// Lattice spacing per axis
        spacing: V,
        /// Copies on each side of the origin, per axis
        span: V,
    },
}

impl<V> SdfNode<V> {
    /// Count total nodes in the tree
    pub fn node_count(&self) -> u32 {
        match self {
            SdfNode::Sphere { .. } | SdfNode::Box { .. } => 1,

            SdfNode::Union { a, b }
            | SdfNode::Intersection { a, b }
            | SdfNode::Subtraction { a, b }
            | SdfNode::SmoothUnion { a, b, .. }
            | SdfNode::SmoothIntersection { a, b, .. }
            | SdfNode::SmoothSubtraction { a, b, .. } => 1 + a.node_count() + b.node_count(),

            SdfNode::Translate { child, .. }
            | SdfNode::Transform { child, .. }
            | SdfNode::Onion { child, .. }
            | SdfNode::Repeat { child, .. }
            | SdfNode::RepeatFinite { child, .. } => 1 + child.node_count(),
        }
    }

    /// Category of this node variant
    pub fn category(&self) -> SdfCategory {
        match self {
            SdfNode::Sphere { .. } | SdfNode::Box { .. } => SdfCategory::Primitive,
            SdfNode::Union { .. }
            | SdfNode::Intersection { .. }
            | SdfNode::Subtraction { .. }
            | SdfNode::SmoothUnion { .. }
            | SdfNode::SmoothIntersection { .. }
            | SdfNode::SmoothSubtraction { .. } => SdfCategory::Operation,
            SdfNode::Translate { .. } | SdfNode::Transform { .. } => SdfCategory::Transform,
            SdfNode::Onion { .. } | SdfNode::Repeat { .. } | SdfNode::RepeatFinite { .. } => {
                SdfCategory::Modifier
            }
        }
    }
}
