//! Spatial transforms for SDFs
//!
//! Transforms map the query point into the child's frame; the child's
//! distance is returned unchanged.

mod matrix;
mod translate;

pub use matrix::transform_matrix;
pub use translate::transform_translate;
