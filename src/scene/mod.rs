//! Published scenes
//!
//! A [`Scene`] holds the current tree and marching configuration as one
//! immutable snapshot. Editing happens on an owned tree that is then
//! published in one swap; batches already running keep marching the
//! snapshot they started with.
//!
//! ```
//! use hypermarch::prelude::*;
//!
//! let scene = Scene::new(presets::hypersphere());
//! let before = scene.snapshot();
//!
//! let mut tree = (**before.tree()).clone();
//! tree.root.set_translation(Vec4::new(0.0, 0.0, 0.0, 10.0));
//! scene.publish(tree);
//!
//! assert_eq!(scene.snapshot().generation(), before.generation() + 1);
//! ```

pub mod presets;
mod render;

pub use render::render_biray_view;

use std::sync::{Arc, PoisonError, RwLock};

use glam::{Mat4, Vec4};

use crate::camera::Camera4;
use crate::eval::DistanceField;
use crate::math::SdfVector;
use crate::raycast::{
    raymarch_batch, raymarch_batch_parallel, raymarch_biray_batch_parallel, PointLight,
    RaymarchConfig, RaymarchResult,
};
use crate::types::{BiRay, Ray, SdfTree};

/// Immutable view of a scene at one point in time
#[derive(Debug, Clone)]
pub struct SceneSnapshot<V> {
    tree: Arc<SdfTree<V>>,
    config: RaymarchConfig,
    generation: u64,
}

impl<V> SceneSnapshot<V> {
    /// The tree this snapshot marches
    pub fn tree(&self) -> &Arc<SdfTree<V>> {
        &self.tree
    }

    /// Marching configuration published together with the tree
    pub fn config(&self) -> &RaymarchConfig {
        &self.config
    }

    /// Publication counter; the first snapshot of a scene is generation 0
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<V: SdfVector> DistanceField for SceneSnapshot<V> {
    type Vector = V;

    #[inline]
    fn evaluate_distance(&self, position: V) -> f32 {
        self.tree.evaluate_distance(position)
    }

    #[inline]
    fn local_sample_position(&self, position: V) -> V {
        self.tree.local_sample_position(position)
    }
}

/// Scene with a single writer and any number of concurrent readers
#[derive(Debug)]
pub struct Scene<V> {
    current: RwLock<SceneSnapshot<V>>,
}

impl<V: SdfVector> Scene<V> {
    /// Create a scene with the default marching configuration
    pub fn new(tree: SdfTree<V>) -> Self {
        Self::with_config(tree, RaymarchConfig::default())
    }

    /// Create a scene with a marching configuration
    pub fn with_config(tree: SdfTree<V>, config: RaymarchConfig) -> Self {
        Scene {
            current: RwLock::new(SceneSnapshot {
                tree: Arc::new(tree),
                config,
                generation: 0,
            }),
        }
    }

    /// Replace the current tree, keeping the configuration
    ///
    /// Snapshots taken earlier stay valid and unchanged.
    pub fn publish(&self, tree: SdfTree<V>) {
        let tree = Arc::new(tree);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = current.generation + 1;
        log::debug!(
            "publishing scene generation {} ({} nodes)",
            generation,
            tree.node_count()
        );
        *current = SceneSnapshot {
            tree,
            config: current.config,
            generation,
        };
    }

    /// The current snapshot
    pub fn snapshot(&self) -> SceneSnapshot<V> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Marching configuration of the current snapshot
    pub fn config(&self) -> RaymarchConfig {
        self.current.read().unwrap_or_else(PoisonError::into_inner).config
    }

    /// Replace the marching configuration, keeping the tree
    ///
    /// Publishes a new generation like [`publish`](Self::publish).
    pub fn set_config(&self, config: RaymarchConfig) {
        if config.is_degenerate() {
            log::warn!("degenerate raymarch configuration set, every march will miss");
        }
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = current.generation + 1;
        log::debug!("publishing scene generation {} (new configuration)", generation);
        *current = SceneSnapshot {
            tree: Arc::clone(&current.tree),
            config,
            generation,
        };
    }

    /// March rays against the current snapshot on the calling thread
    pub fn march_batch(&self, rays: &[Ray<V>]) -> Vec<RaymarchResult<V>> {
        let snapshot = self.snapshot();
        raymarch_batch(&snapshot, rays, snapshot.config())
    }

    /// March rays against the current snapshot in parallel
    pub fn march_batch_parallel(&self, rays: &[Ray<V>]) -> Vec<RaymarchResult<V>> {
        let snapshot = self.snapshot();
        raymarch_batch_parallel(&snapshot, rays, snapshot.config())
    }
}

impl Scene<Vec4> {
    /// March BiRays against the current snapshot in parallel
    pub fn march_biray_batch_parallel(&self, rays: &[(BiRay<Vec4>, Mat4)]) -> Vec<RaymarchResult<Vec4>> {
        let snapshot = self.snapshot();
        raymarch_biray_batch_parallel(&snapshot, rays, snapshot.config())
    }

    /// Render one view of the current snapshot; see [`render_biray_view`]
    pub fn render_biray_view(
        &self,
        camera: &Camera4,
        width: usize,
        height: usize,
        view_fraction: f32,
        light: &PointLight<Vec4>,
    ) -> Vec<RaymarchResult<Vec4>> {
        let snapshot = self.snapshot();
        render_biray_view(
            &snapshot,
            camera,
            width,
            height,
            view_fraction,
            snapshot.config(),
            light,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SdfNode;
    use glam::Vec3;

    fn sphere_scene() -> Scene<Vec3> {
        Scene::new(SdfTree::new(SdfNode::sphere(30.0)))
    }

    #[test]
    fn test_snapshot_survives_publish() {
        let scene = sphere_scene();
        let old = scene.snapshot();
        scene.publish(SdfTree::new(SdfNode::sphere(10.0)));
        let new = scene.snapshot();

        assert_eq!(old.evaluate_distance(Vec3::ZERO), -30.0);
        assert_eq!(new.evaluate_distance(Vec3::ZERO), -10.0);
        assert_eq!(old.generation(), 0);
        assert_eq!(new.generation(), 1);
    }

    #[test]
    fn test_config_roundtrip() {
        let scene = sphere_scene();
        assert_eq!(scene.config(), RaymarchConfig::default());
        scene.set_config(RaymarchConfig::fast());
        assert_eq!(scene.config(), RaymarchConfig::fast());
    }

    #[test]
    fn test_snapshot_pairs_tree_with_config() {
        let scene = sphere_scene();
        let old = scene.snapshot();
        scene.set_config(RaymarchConfig::fast());
        let fast = scene.snapshot();
        scene.publish(SdfTree::new(SdfNode::sphere(10.0)));
        let new = scene.snapshot();

        assert_eq!(*old.config(), RaymarchConfig::default());
        assert_eq!(*fast.config(), RaymarchConfig::fast());
        assert!(Arc::ptr_eq(old.tree(), fast.tree()));
        assert_eq!(fast.generation(), 1);

        assert_eq!(*new.config(), RaymarchConfig::fast());
        assert_eq!(new.evaluate_distance(Vec3::ZERO), -10.0);
        assert_eq!(new.generation(), 2);
    }

    #[test]
    fn test_march_batch_uses_current_tree() {
        let scene = sphere_scene();
        let rays = [Ray::new(Vec3::new(0.0, 0.0, -100.0), Vec3::Z)];

        let before = scene.march_batch(&rays);
        scene.publish(SdfTree::new(SdfNode::sphere(50.0)));
        let after = scene.march_batch_parallel(&rays);

        assert!((before[0].position.z + 30.0).abs() < 0.2);
        assert!((after[0].position.z + 50.0).abs() < 0.2);
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let scene = Arc::new(sphere_scene());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let scene = Arc::clone(&scene);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let d = scene.snapshot().evaluate_distance(Vec3::ZERO);
                        assert!(d == -30.0 || d == -20.0);
                    }
                })
            })
            .collect();

        for _ in 0..20 {
            scene.publish(SdfTree::new(SdfNode::sphere(20.0)));
        }
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(scene.snapshot().generation(), 20);
    }
}
