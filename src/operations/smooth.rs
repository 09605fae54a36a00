//! Smooth CSG operations for SDFs
//!
//! Polynomial blends in interpolation form. Each operation is split into a
//! blend factor `h` and the distance built from it, so the same `h` can
//! blend the operands' local sample positions.
//!
//! A zero blend radius is clamped to a tiny epsilon, which degrades each
//! blend to its hard counterpart instead of dividing by zero.

use crate::math::{clamp01, unclamped_lerp};

#[inline(always)]
fn safe_k(k: f32) -> f32 {
    k.max(1e-10)
}

/// Weight of the left operand in a smooth union
#[inline(always)]
pub fn smooth_union_factor(d1: f32, d2: f32, k: f32) -> f32 {
    clamp01(0.5 + 0.5 * (d2 - d1) / safe_k(k))
}

/// Smooth union of two SDFs
///
/// `lerp(d2, d1, h) - k h (1 - h)` with `h` from [`smooth_union_factor`].
#[inline(always)]
pub fn sdf_smooth_union(d1: f32, d2: f32, k: f32) -> f32 {
    let h = smooth_union_factor(d1, d2, k);
    unclamped_lerp(d2, d1, h) - k * h * (1.0 - h)
}

/// Weight of the left operand in a smooth intersection
#[inline(always)]
pub fn smooth_intersection_factor(d1: f32, d2: f32, k: f32) -> f32 {
    clamp01(0.5 - 0.5 * (d2 - d1) / safe_k(k))
}

/// Smooth intersection of two SDFs
#[inline(always)]
pub fn sdf_smooth_intersection(d1: f32, d2: f32, k: f32) -> f32 {
    let h = smooth_intersection_factor(d1, d2, k);
    unclamped_lerp(d2, d1, h) + k * h * (1.0 - h)
}

/// Weight of the (negated) cutter in a smooth subtraction
#[inline(always)]
pub fn smooth_subtraction_factor(d_base: f32, d_cutter: f32, k: f32) -> f32 {
    clamp01(0.5 - 0.5 * (d_base + d_cutter) / safe_k(k))
}

/// Smooth subtraction: removes the right operand from the left operand
///
/// Note the operand order is the reverse of [`sdf_subtraction`](super::sdf_subtraction).
///
/// # Arguments
/// * `d_base` - Distance to the shape being carved from
/// * `d_cutter` - Distance to the shape being carved away
/// * `k` - Blend radius
#[inline(always)]
pub fn sdf_smooth_subtraction(d_base: f32, d_cutter: f32, k: f32) -> f32 {
    let h = smooth_subtraction_factor(d_base, d_cutter, k);
    unclamped_lerp(d_base, -d_cutter, h) + k * h * (1.0 - h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_union_far_apart_is_min() {
        assert!((sdf_smooth_union(1.0, 10.0, 0.5) - 1.0).abs() < 1e-6);
        assert!((sdf_smooth_union(10.0, 1.0, 0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_union_seam_is_below_min() {
        let d = sdf_smooth_union(1.0, 1.0, 0.4);
        assert!((d - (1.0 - 0.1)).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_union_zero_k_is_union() {
        assert!((sdf_smooth_union(0.3, 0.7, 0.0) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_intersection_far_apart_is_max() {
        assert!((sdf_smooth_intersection(1.0, 10.0, 0.5) - 10.0).abs() < 1e-6);
        let d = sdf_smooth_intersection(1.0, 1.0, 0.4);
        assert!((d - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_subtraction_carves_cutter() {
        // inside the base, far outside the cutter: base survives
        assert!((sdf_smooth_subtraction(-3.0, 10.0, 0.5) + 3.0).abs() < 1e-6);
        // inside both: the cutter wins and the point is outside
        assert!((sdf_smooth_subtraction(-3.0, -5.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_factors_are_unit_interval() {
        for (a, b) in [(-100.0, 100.0), (0.0, 0.0), (3.0, -7.0)] {
            for h in [
                smooth_union_factor(a, b, 1.0),
                smooth_intersection_factor(a, b, 1.0),
                smooth_subtraction_factor(a, b, 1.0),
            ] {
                assert!((0.0..=1.0).contains(&h));
            }
        }
    }
}
