//! Sphere tracing (single-ray raymarching)

use super::RaymarchConfig;
use crate::eval::{sample_normal, DistanceField};
use crate::math::SdfVector;
use crate::types::Ray;
use rayon::prelude::*;

/// Raymarch result with detailed information
///
/// Produced once per sample by every marcher, for hits and misses alike.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RaymarchResult<V> {
    /// Whether a surface was hit
    pub hit: bool,
    /// Field value at `position`
    pub signed_distance: f32,
    /// Number of marching steps taken
    pub steps: u32,
    /// Hit point, or the end of the ray on a miss
    pub position: V,
    /// `position` in the frame of the owning sub-field (zero on a miss)
    pub local_position: V,
    /// Sample with the smallest distance seen; equals `position` on a hit
    pub closest_position: V,
    /// Surface normal (zero on a miss)
    pub normal: V,
    /// Surface normal in the owning sub-field's frame (zero on a miss)
    pub local_normal: V,
    /// Distance travelled along the (main) direction
    pub traversed_primary: f32,
    /// Distance travelled along the secondary direction (BiRay only)
    pub traversed_secondary: f32,
    /// Shadow factor in `[0, 1]`, filled in by [`with_shadow`](super::with_shadow)
    pub shadow_value: f32,
}

impl<V: SdfVector> RaymarchResult<V> {
    /// Miss record ending at `position`
    pub(crate) fn miss<F>(field: &F, position: V, closest_position: V, steps: u32) -> Self
    where
        F: DistanceField<Vector = V> + ?Sized,
    {
        RaymarchResult {
            hit: false,
            signed_distance: field.evaluate_distance(position),
            steps,
            position,
            closest_position,
            ..Default::default()
        }
    }
}

/// Tracks the sample with the smallest distance seen so far
#[derive(Debug, Clone, Copy)]
pub(crate) struct Closest<V> {
    distance: f32,
    pub(crate) position: V,
}

impl<V: SdfVector> Closest<V> {
    pub(crate) fn new(start: V) -> Self {
        Closest {
            distance: f32::INFINITY,
            position: start,
        }
    }

    #[inline(always)]
    pub(crate) fn update(&mut self, distance: f32, position: V) {
        if distance < self.distance {
            self.distance = distance;
            self.position = position;
        }
    }
}

/// Perform sphere tracing along a ray
///
/// Steps by the sampled distance until it drops below
/// `config.ray_hit_epsilon` (hit) or the ray runs past `config.max_distance`
/// or `config.max_steps` (miss). A non-finite sample also ends in a miss.
///
/// # Arguments
/// * `field` - Distance field to march
/// * `ray` - Ray with a normalized direction
/// * `config` - Marching thresholds
pub fn raymarch<F>(field: &F, ray: &Ray<F::Vector>, config: &RaymarchConfig) -> RaymarchResult<F::Vector>
where
    F: DistanceField + ?Sized,
{
    if config.is_degenerate() {
        return RaymarchResult::miss(field, ray.origin, ray.origin, 0);
    }

    let mut t = 0.0;
    let mut steps = 0;
    let mut closest = Closest::new(ray.origin);

    loop {
        let point = ray.at(t);
        let d = field.evaluate_distance(point);
        if !d.is_finite() {
            break;
        }
        closest.update(d, point);

        if d < config.ray_hit_epsilon {
            let normal = sample_normal(field, point);
            return RaymarchResult {
                hit: true,
                signed_distance: d,
                steps,
                position: point,
                local_position: field.local_sample_position(point),
                closest_position: point,
                normal,
                local_normal: normal,
                traversed_primary: t,
                ..Default::default()
            };
        }

        t += d;
        steps += 1;

        if t > config.max_distance || steps >= config.max_steps {
            break;
        }
    }

    let end = ray.at(config.max_distance);
    RaymarchResult {
        traversed_primary: t,
        ..RaymarchResult::miss(field, end, closest.position, steps)
    }
}

/// March multiple rays (single-threaded)
pub fn raymarch_batch<F>(
    field: &F,
    rays: &[Ray<F::Vector>],
    config: &RaymarchConfig,
) -> Vec<RaymarchResult<F::Vector>>
where
    F: DistanceField + ?Sized,
{
    rays.iter().map(|ray| raymarch(field, ray, config)).collect()
}

/// March multiple rays in parallel
///
/// One rayon task per ray; output order matches input order.
pub fn raymarch_batch_parallel<F>(
    field: &F,
    rays: &[Ray<F::Vector>],
    config: &RaymarchConfig,
) -> Vec<RaymarchResult<F::Vector>>
where
    F: DistanceField + Sync + ?Sized,
{
    rays.par_iter().map(|ray| raymarch(field, ray, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SdfNode;
    use glam::{Vec3, Vec4};

    fn sphere_ray(direction: Vec3) -> Ray<Vec3> {
        Ray::new(Vec3::new(0.0, 0.0, -100.0), direction)
    }

    #[test]
    fn test_raymarch_sphere_hit() {
        let sphere = SdfNode::<Vec3>::sphere(30.0);
        let result = raymarch(&sphere, &sphere_ray(Vec3::Z), &RaymarchConfig::default());

        assert!(result.hit);
        assert!(result.signed_distance < 0.2);
        assert!((result.position.z + 30.0).abs() < 0.2);
        assert!(result.steps < 30);
        assert!((result.traversed_primary - 70.0).abs() < 0.2);
        assert!((result.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-2);
        assert_eq!(result.local_normal, result.normal);
        assert_eq!(result.closest_position, result.position);
    }

    #[test]
    fn test_raymarch_sphere_miss() {
        let sphere = SdfNode::<Vec3>::sphere(30.0);
        let config = RaymarchConfig::default();
        let result = raymarch(&sphere, &sphere_ray(-Vec3::Z), &config);

        assert!(!result.hit);
        assert_eq!(result.normal, Vec3::ZERO);
        assert_eq!(result.position, Vec3::new(0.0, 0.0, -100.0 - config.max_distance));
        // the best sample was the origin itself
        assert_eq!(result.closest_position, Vec3::new(0.0, 0.0, -100.0));
    }

    #[test]
    fn test_raymarch_grazing_miss_tracks_closest() {
        let sphere = SdfNode::<Vec3>::sphere(30.0);
        let ray = Ray::new(Vec3::new(0.0, 31.0, -100.0), Vec3::Z);
        let result = raymarch(&sphere, &ray, &RaymarchConfig::default());

        assert!(!result.hit);
        assert!(result.closest_position.z.abs() < 5.0, "{:?}", result.closest_position);
    }

    #[test]
    fn test_raymarch_4d_hypersphere() {
        let sphere = SdfNode::<Vec4>::hypersphere(10.0).translate(Vec4::new(0.0, 0.0, 0.0, 5.0));
        let ray = Ray::new(Vec4::new(0.0, 0.0, -50.0, 5.0), Vec4::Z);
        let result = raymarch(&sphere, &ray, &RaymarchConfig::default());

        assert!(result.hit);
        assert!((result.position.z + 10.0).abs() < 0.2);
        assert!((result.normal.length() - 1.0).abs() < 1e-3);
        assert!((result.local_position - Vec4::new(0.0, 0.0, -10.0, 0.0)).length() < 0.2);
    }

    #[test]
    fn test_raymarch_degenerate_config_misses() {
        let sphere = SdfNode::<Vec3>::sphere(30.0);
        let config = RaymarchConfig {
            max_steps: 0,
            ..Default::default()
        };
        let result = raymarch(&sphere, &sphere_ray(Vec3::Z), &config);
        assert!(!result.hit);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_raymarch_nan_field_misses() {
        let broken = SdfNode::<Vec3>::sphere(f32::NAN);
        let result = raymarch(&broken, &sphere_ray(Vec3::Z), &RaymarchConfig::default());
        assert!(!result.hit);
    }

    #[test]
    fn test_batch_parallel_matches_serial() {
        let sphere = SdfNode::<Vec3>::sphere(30.0);
        let rays: Vec<Ray<Vec3>> = (0..64)
            .map(|i| Ray::new(Vec3::new(i as f32 - 32.0, 0.0, -100.0), Vec3::Z))
            .collect();
        let config = RaymarchConfig::default();

        let serial = raymarch_batch(&sphere, &rays, &config);
        let parallel = raymarch_batch_parallel(&sphere, &rays, &config);
        assert_eq!(serial, parallel);
        assert!(serial[32].hit);
        assert!(!serial[0].hit);
    }
}
