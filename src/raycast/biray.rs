//! Dual-parameter (BiRay) raymarching
//!
//! A BiRay marches two parameters at once: `t_main` along the main
//! direction and `t_secondary` along the secondary direction. Each pixel
//! thereby searches a whole plane of 4D space and reports the surface point
//! with the smallest main depth, which is what a two-axis projection of 4D
//! geometry needs.
//!
//! Work happens in *bi-ray space*, the frame whose columns are the camera's
//! right and up vectors and the two ray directions. Its z axis is the main
//! direction and its w axis the secondary one.
//!
//! The march has two phases:
//!
//! 1. **Cone search.** From the current `(t_main, t_secondary)` the nearest
//!    surface point (in the z/w plane) is projected into bi-ray space and
//!    turned into a step toward it. That step and two copies rotated by the
//!    cone half-angle are tried; the one landing closest to a surface wins.
//! 2. **Edge walk.** Once a surface is reached, the walk follows the
//!    silhouette in the z/w plane, toward smaller main depth, until the
//!    silhouette turns away. The end point is the visible point of the
//!    pixel.

use glam::{Mat4, Vec2, Vec4};
use rayon::prelude::*;

use super::march::Closest;
use super::{RaymarchConfig, RaymarchResult};
use crate::eval::{sample_normal, to_surface_vector_zw, DistanceField};
use crate::math::{rotate_angle, SdfVector};
use crate::types::BiRay;

/// Squared step length below which the previous step direction is reused
const MIN_NORMALIZABLE_STEP_SQ: f32 = 1e-6;

/// March a BiRay through a 4D field
///
/// # Arguments
/// * `field` - 4D distance field
/// * `ray` - BiRay to march
/// * `bi_ray_to_world` - Matrix with columns right, up, main direction and
///   secondary direction, as produced by [`Camera4::bi_ray`](crate::camera::Camera4::bi_ray)
/// * `config` - Marching thresholds, step size and cone angle
///
/// # Returns
/// A hit at the silhouette point with the smallest main depth, or a miss
/// carrying the closest sample. A degenerate configuration or a singular
/// matrix yields an immediate miss.
pub fn raymarch_biray<F>(
    field: &F,
    ray: &BiRay<Vec4>,
    bi_ray_to_world: &Mat4,
    config: &RaymarchConfig,
) -> RaymarchResult<Vec4>
where
    F: DistanceField<Vector = Vec4> + ?Sized,
{
    if config.is_degenerate() {
        return RaymarchResult::miss(field, ray.origin, ray.origin, 0);
    }
    let det = bi_ray_to_world.determinant();
    if !det.is_finite() || det.abs() < f32::EPSILON {
        log::warn!("singular bi-ray matrix (determinant {}), reporting a miss", det);
        return RaymarchResult::miss(field, ray.origin, ray.origin, 0);
    }

    let to_bi_ray = bi_ray_to_world.inverse();
    let march = BiRayMarch {
        field,
        ray,
        to_bi_ray,
        origin_bs: to_bi_ray * ray.origin,
        config,
    };
    march.run()
}

/// March many BiRays in parallel
///
/// Each entry pairs a ray with its bi-ray-to-world matrix. One rayon task
/// per ray; output order matches input order.
pub fn raymarch_biray_batch_parallel<F>(
    field: &F,
    rays: &[(BiRay<Vec4>, Mat4)],
    config: &RaymarchConfig,
) -> Vec<RaymarchResult<Vec4>>
where
    F: DistanceField<Vector = Vec4> + Sync + ?Sized,
{
    rays.par_iter()
        .map(|(ray, matrix)| raymarch_biray(field, ray, matrix, config))
        .collect()
}

/// Stretch a step in `(t_main, t_secondary)` to at least `min_step`
///
/// A step too short to normalize reuses the direction of `last_step`, or
/// `(min_step, 0)` when there is none yet.
fn enforce_min_step(step: Vec2, last_step: Vec2, min_step: f32) -> Vec2 {
    let len_sq = step.length_squared();
    if len_sq < MIN_NORMALIZABLE_STEP_SQ {
        match last_step.try_normalize() {
            Some(dir) => dir * min_step,
            None => Vec2::new(min_step, 0.0),
        }
    } else if len_sq < min_step * min_step {
        step / len_sq.sqrt() * min_step
    } else {
        step
    }
}

/// Pick the cone candidate landing closest to a surface
///
/// Ties go to the left candidate, then the middle one.
fn select_cone_step(left: (Vec2, f32), middle: (Vec2, f32), right: (Vec2, f32)) -> Vec2 {
    if left.1 <= middle.1 && left.1 <= right.1 {
        left.0
    } else if middle.1 <= right.1 {
        middle.0
    } else {
        right.0
    }
}

struct BiRayMarch<'a, F: ?Sized> {
    field: &'a F,
    ray: &'a BiRay<Vec4>,
    to_bi_ray: Mat4,
    origin_bs: Vec4,
    config: &'a RaymarchConfig,
}

impl<F> BiRayMarch<'_, F>
where
    F: DistanceField<Vector = Vec4> + ?Sized,
{
    fn run(&self) -> RaymarchResult<Vec4> {
        let config = self.config;
        let cone = config.cone_angle();
        let cone_stretch = 1.0 / cone.cos();
        let min_step = config.min_step_size;

        let mut t_main = 0.0f32;
        let mut t_secondary = 0.0f32;
        let mut steps = 0u32;
        let mut last_step = Vec2::ZERO;
        let mut closest = Closest::new(self.ray.origin);

        loop {
            steps += 1;
            let position = self.ray.at(t_main, t_secondary);
            let (distance, to_surface) = to_surface_vector_zw(self.field, position);
            if !distance.is_finite() || !position.is_finite() {
                break;
            }
            let surface = position + to_surface * distance;
            closest.update(distance, position);

            if distance < config.ray_hit_epsilon {
                return self.edge_walk(surface, steps);
            }

            if t_main > config.max_distance || steps >= config.max_steps {
                break;
            }

            // Step toward the nearest surface point, expressed in (t_main, t_secondary)
            let surface_bs = self.to_bi_ray * surface;
            let middle = Vec2::new(
                ((surface_bs.z - self.origin_bs.z).abs() - t_main).abs(),
                (surface_bs.w - self.origin_bs.w) - t_secondary,
            );

            let middle = enforce_min_step(middle, last_step, min_step);
            last_step = middle;

            let left = rotate_angle(middle, -cone) * cone_stretch;
            let right = rotate_angle(middle, cone) * cone_stretch;

            let distance_after = |step: Vec2| {
                self.field
                    .evaluate_distance(self.ray.at(t_main + step.x, t_secondary + step.y))
            };
            let step = select_cone_step(
                (left, distance_after(left)),
                (middle, distance_after(middle)),
                (right, distance_after(right)),
            );

            t_main += step.x;
            t_secondary += step.y;
        }

        let end = self.ray.at(t_main, t_secondary);
        RaymarchResult {
            traversed_primary: t_main,
            traversed_secondary: t_secondary,
            ..RaymarchResult::miss(self.field, end, closest.position, steps)
        }
    }

    /// Follow the silhouette toward smaller main depth, starting on the surface
    fn edge_walk(&self, start: Vec4, mut steps: u32) -> RaymarchResult<Vec4> {
        let config = self.config;
        let eps = config.ray_hit_epsilon;
        let min_step = config.min_step_size;

        let mut current = start;
        let mut test = start;
        let (mut test_distance, mut test_to_surface) = to_surface_vector_zw(self.field, test);

        loop {
            let on_surface = test_distance <= eps;
            if !on_surface || steps >= config.max_steps {
                break;
            }

            // Tangent in the z/w plane, turned so its secondary component grows
            let plane = test_to_surface.trailing_plane();
            let to_surface_bs = self.to_bi_ray * test_to_surface;
            let tangent = if to_surface_bs.w > 0.0 {
                Vec2::new(-plane.y, plane.x)
            } else {
                Vec2::new(plane.y, -plane.x)
            };

            // The silhouette no longer recedes along the main axis
            if tangent.x >= 0.0 {
                break;
            }

            steps += 1;
            current = test;
            test = current + Vec4::from_trailing_plane(tangent * min_step);
            (test_distance, test_to_surface) = to_surface_vector_zw(self.field, test);
        }

        // Walked off the surface: back up to the last on-surface sample
        let last = if test_distance <= eps { test } else { current };
        self.hit_at(last, steps)
    }

    fn hit_at(&self, position: Vec4, steps: u32) -> RaymarchResult<Vec4> {
        let config = self.config;
        let traversed = self.to_bi_ray * position - self.origin_bs;

        let bias = Vec4::new(0.0, 0.0, config.normal_bias_z, config.normal_bias_w);
        let normal = sample_normal(self.field, position - bias);
        let local_position = self.field.local_sample_position(position);
        let local_normal =
            (self.field.local_sample_position(position + normal) - local_position).normalize_or_zero();

        RaymarchResult {
            hit: true,
            signed_distance: self.field.evaluate_distance(position),
            steps,
            position,
            local_position,
            closest_position: position,
            normal,
            local_normal,
            traversed_primary: traversed.z,
            traversed_secondary: traversed.w,
            shadow_value: 0.0,
        }
    }
}
