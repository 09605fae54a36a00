//! CSG (Constructive Solid Geometry) operations
//!
//! Boolean and smooth-boolean combinations of two distances. The hard
//! booleans expose a `*_selects_lhs` predicate so that local sample
//! positions follow the same side as the distance.

mod intersection;
mod smooth;
mod subtraction;
mod union;

pub use intersection::{intersection_selects_lhs, sdf_intersection};
pub use smooth::{
    sdf_smooth_intersection, sdf_smooth_subtraction, sdf_smooth_union,
    smooth_intersection_factor, smooth_subtraction_factor, smooth_union_factor,
};
pub use subtraction::{sdf_subtraction, subtraction_selects_lhs};
pub use union::{sdf_union, union_selects_lhs};
