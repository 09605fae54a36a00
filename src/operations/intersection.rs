//! Intersection operation for SDFs

/// Intersection of two SDFs (maximum distance)
#[inline(always)]
pub fn sdf_intersection(d1: f32, d2: f32) -> f32 {
    if intersection_selects_lhs(d1, d2) {
        d1
    } else {
        d2
    }
}

/// Whether an intersection takes its value from the left operand (ties do)
#[inline(always)]
pub fn intersection_selects_lhs(d1: f32, d2: f32) -> bool {
    d1 >= d2
}
