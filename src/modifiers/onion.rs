//! Onion (shell) modifier

/// Hollow shell of `thickness` around the child's surface
#[inline(always)]
pub fn modifier_onion(d: f32, thickness: f32) -> f32 {
    d.abs() - thickness
}
