//! Container types: SdfTree, SdfMetadata, Ray, BiRay

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SdfNode;
use crate::math::SdfVector;

/// SDF Tree - top-level container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdfTree<V> {
    /// Version string
    pub version: String,
    /// Root node
    pub root: SdfNode<V>,
    /// Optional metadata
    pub metadata: Option<SdfMetadata>,
}

impl<V> SdfTree<V> {
    /// Create a new SDF tree
    pub fn new(root: SdfNode<V>) -> Self {
        SdfTree {
            version: crate::VERSION.to_string(),
            root,
            metadata: None,
        }
    }

    /// Create with metadata
    pub fn with_metadata(root: SdfNode<V>, metadata: SdfMetadata) -> Self {
        SdfTree {
            version: crate::VERSION.to_string(),
            root,
            metadata: Some(metadata),
        }
    }

    /// Get total node count
    pub fn node_count(&self) -> u32 {
        self.root.node_count()
    }
}

/// Optional metadata for SDF trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SdfMetadata {
    /// Name of the scene
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Custom key-value pairs
    pub custom: Option<HashMap<String, String>>,
}

impl SdfMetadata {
    /// Metadata carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        SdfMetadata {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Ray for single-parameter marching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<V> {
    /// Ray origin point
    pub origin: V,
    /// Ray direction (normalized)
    pub direction: V,
}

impl<V: SdfVector> Ray<V> {
    /// Create a new ray; the direction is normalized
    pub fn new(origin: V, direction: V) -> Self {
        Ray {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get point along ray at distance t
    #[inline(always)]
    pub fn at(&self, t: f32) -> V {
        self.origin + self.direction * t
    }
}

/// Ray with two independent directions, spanning a plane of samples
///
/// A BiRay is marched along `direction_main` while also sweeping
/// `direction_secondary`, which lets a single pixel integrate an extra axis
/// of 4D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiRay<V> {
    /// Shared origin
    pub origin: V,
    /// Primary marching direction (normalized)
    pub direction_main: V,
    /// Secondary marching direction (normalized)
    pub direction_secondary: V,
}

impl<V: SdfVector> BiRay<V> {
    /// Create a new bi-ray; both directions are normalized
    pub fn new(origin: V, direction_main: V, direction_secondary: V) -> Self {
        BiRay {
            origin,
            direction_main: direction_main.normalize_or_zero(),
            direction_secondary: direction_secondary.normalize_or_zero(),
        }
    }

    /// Point at `t_main` along the main and `t_secondary` along the secondary direction
    #[inline(always)]
    pub fn at(&self, t_main: f32, t_secondary: f32) -> V {
        self.origin + self.direction_main * t_main + self.direction_secondary * t_secondary
    }
}
