//! Parallel SDF evaluation
//!
//! Batch evaluation using rayon for CPU parallelism.

use super::DistanceField;
use rayon::prelude::*;

/// Evaluate a field at multiple points (single-threaded)
///
/// # Arguments
/// * `field` - Any distance field
/// * `points` - Slice of points to evaluate
///
/// # Returns
/// Vector of distances
#[inline]
pub fn eval_batch<F>(field: &F, points: &[F::Vector]) -> Vec<f32>
where
    F: DistanceField + ?Sized,
{
    points.iter().map(|&p| field.evaluate_distance(p)).collect()
}

/// Evaluate a field at multiple points (parallel)
///
/// Uses rayon for parallel iteration over points. Output order matches
/// input order.
#[inline]
pub fn eval_batch_parallel<F>(field: &F, points: &[F::Vector]) -> Vec<f32>
where
    F: DistanceField + Sync + ?Sized,
{
    points.par_iter().map(|&p| field.evaluate_distance(p)).collect()
}
