//! # hypermarch
//!
//! Signed distance field raymarching in three and four dimensions.
//!
//! Scenes are trees of [`SdfNode`]s over `Vec3` or `Vec4`. They are rendered
//! by sphere tracing single rays, or, for 4D scenes, by marching *BiRays*:
//! rays with two independent directions whose per-pixel answer is the
//! visible point of a whole plane of 4D space.
//!
//! ## Features
//!
//! - **Primitives**: Sphere / hypersphere, box / hypercube
//! - **Operations**: Union, Intersection, Subtraction (smooth variants)
//! - **Transforms**: Translate, Matrix
//! - **Modifiers**: Onion, Repeat, Finite repeat
//! - **Raymarching**: Sphere tracing, penumbra shadows, BiRay marching
//! - **Scenes**: Immutable snapshots, parallel batch rendering, presets
//! - **File I/O**: JSON trees and configuration
//!
//! ## Example
//!
//! ```rust
//! use hypermarch::prelude::*;
//!
//! // Two overlapping hyperspheres, offset along w
//! let scene = SdfNode::hypersphere(10.0)
//!     .translate(Vec4::new(0.0, 0.0, 0.0, 20.0))
//!     .union(SdfNode::hypersphere(10.0).translate(Vec4::new(0.0, 0.0, 30.0, -20.0)));
//!
//! // March one BiRay through the zw plane
//! let ray = BiRay::new(Vec4::new(0.0, 0.0, -100.0, 0.0), Vec4::Z, Vec4::W);
//! let to_world = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::W);
//! let result = raymarch_biray(&scene, &ray, &to_world, &RaymarchConfig::default());
//!
//! assert!(result.hit);
//! assert!(result.position.z < 0.0);
//! ```

#![warn(missing_docs)]

pub mod camera;
pub mod eval;
pub mod io;
pub mod math;
pub mod modifiers;
pub mod operations;
pub mod primitives;
pub mod raycast;
pub mod scene;
pub mod transforms;
pub mod types;

/// Crate version, stamped into saved trees
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::camera::{Camera4, CameraSettings, ProjectionMethod};
    pub use crate::eval::{
        eval, eval_batch, eval_batch_parallel, local_position, sample_normal, to_surface_vector,
        to_surface_vector_zw, DistanceField,
    };
    pub use crate::io::{
        from_json_string, load_config, load_tree_json, save_config, save_tree_json,
        to_json_string, IoError,
    };
    pub use crate::math::*;
    pub use crate::raycast::{
        raymarch, raymarch_batch, raymarch_batch_parallel, raymarch_biray,
        raymarch_biray_batch_parallel, shadow_march, with_shadow, PointLight, RaymarchConfig,
        RaymarchResult,
    };
    pub use crate::scene::{presets, render_biray_view, Scene, SceneSnapshot};
    pub use crate::types::{
        BiRay, Ray, SdfCategory, SdfMetadata, SdfNode, SdfNode3, SdfNode4, SdfTree,
    };
    pub use glam::{Mat4, Vec2, Vec3, Vec4};
}

pub use eval::{eval, DistanceField};
pub use raycast::{raymarch, raymarch_biray, RaymarchConfig, RaymarchResult};
pub use types::{SdfNode, SdfTree};
