//! Normal and surface-vector estimation
//!
//! All estimators use simplex-pattern finite differences: the field is
//! sampled at `p + dir * h` for every direction of
//! [`SdfVector::SAMPLE_DIRECTIONS`] and the weighted directions are summed.
//! This needs one sample fewer than central differences (four in 3D, five
//! in 4D).

use glam::Vec2;

use super::DistanceField;
use crate::math::SdfVector;

/// Sample directions for the trailing-plane surface vector
pub const TRAILING_PLANE_DIRECTIONS: [Vec2; 3] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-0.479, 0.86),
    Vec2::new(-0.479, -0.86),
];

/// Finite-difference radius for the trailing-plane surface vector
pub const TRAILING_PLANE_SAMPLE_RADIUS: f32 = 0.005;

/// Outward surface normal at `point`
///
/// Returns the zero vector where the gradient vanishes, never NaN.
#[inline]
pub fn sample_normal<F>(field: &F, point: F::Vector) -> F::Vector
where
    F: DistanceField + ?Sized,
{
    let h = F::Vector::NORMAL_SAMPLE_RADIUS;
    let mut sum = F::Vector::ZERO;
    for &dir in F::Vector::SAMPLE_DIRECTIONS {
        sum += dir * field.evaluate_distance(point + dir * h);
    }
    sum.normalize_or_zero()
}

/// Distance at `point` and the unit vector pointing toward the nearest surface
#[inline]
pub fn to_surface_vector<F>(field: &F, point: F::Vector) -> (f32, F::Vector)
where
    F: DistanceField + ?Sized,
{
    let distance = field.evaluate_distance(point);
    let h = F::Vector::SURFACE_SAMPLE_RADIUS;
    let mut sum = F::Vector::ZERO;
    for &dir in F::Vector::SAMPLE_DIRECTIONS {
        sum += dir * (field.evaluate_distance(point + dir * h) - distance);
    }
    (distance, -sum.normalize_or_zero())
}

/// Like [`to_surface_vector`], restricted to the trailing 2-plane
///
/// Only the last two components (z/w in 4D, y/z in 3D) are sampled; all
/// other components of the returned vector are exactly zero. This is the
/// plane a [`BiRay`](crate::types::BiRay) sweeps in bi-ray space.
#[inline]
pub fn to_surface_vector_zw<F>(field: &F, point: F::Vector) -> (f32, F::Vector)
where
    F: DistanceField + ?Sized,
{
    let distance = field.evaluate_distance(point);
    let mut sum = Vec2::ZERO;
    for dir in TRAILING_PLANE_DIRECTIONS {
        let offset = F::Vector::from_trailing_plane(dir * TRAILING_PLANE_SAMPLE_RADIUS);
        sum += dir * (field.evaluate_distance(point + offset) - distance);
    }
    let toward = -sum.normalize_or_zero();
    (distance, F::Vector::from_trailing_plane(toward))
}
