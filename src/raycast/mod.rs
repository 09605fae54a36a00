//! Raymarching for SDFs
//!
//! Implements sphere tracing for single rays, penumbra shadow marching and
//! dual-parameter BiRay marching for 4D projections.
//!
//! All marchers are pure functions of an immutable field; none of them
//! allocate or log per step. Degenerate input (a zero step budget, a
//! singular bi-ray matrix, NaN distances) ends in a miss rather than an
//! error.

mod biray;
mod config;
mod march;

pub use biray::{raymarch_biray, raymarch_biray_batch_parallel};
pub use config::RaymarchConfig;
pub use march::{raymarch, raymarch_batch, raymarch_batch_parallel, RaymarchResult};

use crate::eval::{to_surface_vector_zw, DistanceField};
use crate::math::{clamp01, SdfVector};
use crate::types::Ray;
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Spherical point light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight<V> {
    /// Light center
    pub position: V,
    /// Light radius; larger lights cast softer, brighter shadows
    pub radius: f32,
}

impl<V> PointLight<V> {
    /// Create a new point light
    pub fn new(position: V, radius: f32) -> Self {
        PointLight { position, radius }
    }
}

impl Default for PointLight<Vec4> {
    fn default() -> Self {
        PointLight {
            position: Vec4::new(107.0, 75.0, -23.0, 30.0),
            radius: 100.0,
        }
    }
}

/// Penumbra shadow estimation
///
/// Marches from a surface point toward a light. Contact with an occluder
/// whose surface faces along the ray returns `0.0` (fully shadowed). Grazing
/// contacts only darken the penumbra. The result is scaled by how large the
/// light appears from the start point.
///
/// # Arguments
/// * `field` - Distance field
/// * `ray` - Shadow ray; origin just off the surface, direction toward the light
/// * `to_light_distance` - Distance from the ray origin to the light
/// * `light_radius` - Light radius
/// * `config` - Uses the shadow epsilon, step budget and penumbra factor
///
/// # Returns
/// Shadow factor in `[0, 1]`; `0.0` is fully occluded
pub fn shadow_march<F>(
    field: &F,
    ray: &Ray<F::Vector>,
    to_light_distance: f32,
    light_radius: f32,
    config: &RaymarchConfig,
) -> f32
where
    F: DistanceField + ?Sized,
{
    let eps = config.shadow_ray_hit_epsilon;
    let mut penumbra: f32 = 1.0;
    let mut t = 0.0;
    let mut steps = 0u32;

    loop {
        let point = ray.at(t);
        let mut d = field.evaluate_distance(point);
        if !d.is_finite() {
            break;
        }

        if d < eps {
            let (_, to_surface) = to_surface_vector_zw(field, point);
            if to_surface.dot(ray.direction) > 0.5 {
                return 0.0;
            }
        }

        d = d.max(eps);
        penumbra = penumbra.min(config.shadow_penumbra_factor * d / (t + 0.0001));
        t += d;
        steps += 1;

        if t > to_light_distance || steps > config.max_steps_shadow {
            break;
        }
    }

    penumbra * clamp01(light_radius / to_light_distance)
}

/// Fill in the shadow value of a hit
///
/// Builds the shadow ray from the hit position toward the light, offset by
/// `config.shadow_start_offset`, and returns a copy of `result` with
/// `shadow_value` set. Misses are returned unchanged.
pub fn with_shadow<F>(
    field: &F,
    result: &RaymarchResult<F::Vector>,
    light: &PointLight<F::Vector>,
    config: &RaymarchConfig,
) -> RaymarchResult<F::Vector>
where
    F: DistanceField + ?Sized,
{
    if !result.hit {
        return *result;
    }

    let direction = (light.position - result.position).normalize_or_zero();
    let origin = result.position + direction * config.shadow_start_offset;
    let to_light_distance = (light.position - origin).length();
    let ray = Ray::new(origin, direction);

    RaymarchResult {
        shadow_value: shadow_march(field, &ray, to_light_distance, light.radius, config),
        ..*result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SdfNode;

    fn occluder_scene() -> SdfNode<Vec4> {
        SdfNode::hypersphere(10.0).translate(Vec4::new(0.0, 0.0, 50.0, 0.0))
    }

    #[test]
    fn test_shadow_blocked_is_zero() {
        let ray = Ray::new(Vec4::ZERO, Vec4::Z);
        let s = shadow_march(&occluder_scene(), &ray, 100.0, 100.0, &RaymarchConfig::default());
        assert_eq!(s, 0.0);
    }

    #[test]
    fn test_shadow_unobstructed_is_positive() {
        let ray = Ray::new(Vec4::ZERO, -Vec4::Z);
        let s = shadow_march(&occluder_scene(), &ray, 100.0, 100.0, &RaymarchConfig::default());
        assert!(s > 0.0);
        assert!(s <= 1.0);
    }

    #[test]
    fn test_shadow_scales_with_light_size() {
        let ray = Ray::new(Vec4::ZERO, -Vec4::Z);
        let config = RaymarchConfig::default();
        let big = shadow_march(&occluder_scene(), &ray, 100.0, 100.0, &config);
        let small = shadow_march(&occluder_scene(), &ray, 100.0, 25.0, &config);
        assert!((small - big * 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_with_shadow_skips_misses() {
        let miss = RaymarchResult::<Vec4>::default();
        let out = with_shadow(&occluder_scene(), &miss, &PointLight::default(), &RaymarchConfig::default());
        assert_eq!(out, miss);
    }

    #[test]
    fn test_with_shadow_back_face_is_dark() {
        // a hit on the far side of the sphere, light in front of it
        let scene = SdfNode::hypersphere(30.0);
        let hit = RaymarchResult {
            hit: true,
            position: Vec4::new(0.0, 0.0, 30.0, 0.0),
            ..Default::default()
        };
        let light = PointLight::new(Vec4::new(0.0, 0.0, -200.0, 0.0), 50.0);
        let out = with_shadow(&scene, &hit, &light, &RaymarchConfig::default());
        assert_eq!(out.shadow_value, 0.0);
        assert!(out.hit);
    }

    #[test]
    fn test_with_shadow_lit_face() {
        let scene = SdfNode::hypersphere(30.0);
        let hit = RaymarchResult {
            hit: true,
            position: Vec4::new(0.0, 0.0, -30.0, 0.0),
            ..Default::default()
        };
        let light = PointLight::new(Vec4::new(0.0, 0.0, -200.0, 0.0), 50.0);
        let out = with_shadow(&scene, &hit, &light, &RaymarchConfig::default());
        assert!(out.shadow_value > 0.0);
    }
}
