//! Union operation for SDFs

/// Union of two SDFs (minimum distance)
///
/// Ties resolve to `d1`; see [`union_selects_lhs`].
#[inline(always)]
pub fn sdf_union(d1: f32, d2: f32) -> f32 {
    if union_selects_lhs(d1, d2) {
        d1
    } else {
        d2
    }
}

/// Whether a union takes its value (and local frame) from the left operand
#[inline(always)]
pub fn union_selects_lhs(d1: f32, d2: f32) -> bool {
    d1 <= d2
}
