//! Translation transform for SDFs

use crate::math::SdfVector;

/// Map a query point into the frame of a child translated by `offset`
///
/// To evaluate an SDF that has been moved by `offset`, the query point is
/// moved by `-offset`.
#[inline(always)]
pub fn transform_translate<V: SdfVector>(point: V, offset: V) -> V {
    point - offset
}
