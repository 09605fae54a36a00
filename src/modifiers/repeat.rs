//! Repetition modifiers for SDFs
//!
//! Both variants fold space with `p - s * round(p / s)`, which maps every
//! point into the cell `[-s/2, s/2]` around the nearest lattice point.

use crate::math::SdfVector;

/// Infinite repetition along all axes
#[inline(always)]
pub fn modifier_repeat<V: SdfVector>(point: V, spacing: V) -> V {
    point - spacing * (point / spacing).round()
}

/// Finite repetition: `2 * span + 1` copies per axis, centered at the origin
#[inline(always)]
pub fn modifier_repeat_finite<V: SdfVector>(point: V, spacing: V, span: V) -> V {
    let cell = (point / spacing).round().clamp(-span, span);
    point - spacing * cell
}
