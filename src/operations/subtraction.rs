//! Subtraction operation for SDFs

/// Subtraction of the left operand from the right operand
///
/// # Arguments
/// * `d_lhs` - Distance to the shape being carved away
/// * `d_rhs` - Distance to the shape being carved from
///
/// # Returns
/// `max(-d_lhs, d_rhs)`, ties resolving to `-d_lhs`
#[inline(always)]
pub fn sdf_subtraction(d_lhs: f32, d_rhs: f32) -> f32 {
    if subtraction_selects_lhs(d_lhs, d_rhs) {
        -d_lhs
    } else {
        d_rhs
    }
}

/// Whether a subtraction takes its value from the (negated) left operand
#[inline(always)]
pub fn subtraction_selects_lhs(d_lhs: f32, d_rhs: f32) -> bool {
    -d_lhs >= d_rhs
}
