//! Vector and matrix helpers shared by the SDF algebra and the marchers

mod rotation;
mod vector;

pub use rotation::{
    clamp01, polar_to_euclidean, rot_xw, rot_xy, rot_xz, rot_yw, rot_yz, rot_zw, rotate_angle,
    ternary_cross, unclamped_lerp,
};
pub use vector::SdfVector;
