//! Primitive SDF shapes
//!
//! Leaf nodes of the SDF tree. All primitives are centered at the origin;
//! use [`SdfNode::translate`](crate::SdfNode::translate) or
//! [`SdfNode::transform`](crate::SdfNode::transform) to place them.

mod box_nd;
mod sphere;

pub use box_nd::sdf_box;
pub use sphere::sdf_sphere;
