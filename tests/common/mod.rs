//! Common test helpers for hypermarch integration tests

#![allow(dead_code)]

use hypermarch::prelude::*;

// ============================================================================
// Standard test shapes
// ============================================================================

/// Sphere of radius 30 at the origin
pub fn test_sphere() -> SdfNode3 {
    SdfNode::sphere(30.0)
}

/// Sphere with a cube carved out of its middle
pub fn test_csg() -> SdfNode3 {
    SdfNode::sphere(30.0).subtract(SdfNode::cube(18.0))
}

/// Two hyperspheres of radius 10 that overlap in the zw plane
///
/// Seen from `(0, 0, -100, 0)` with main direction +Z and secondary +W, the
/// second sphere is further away but reaches further along w.
pub fn test_overlapping_hyperspheres() -> SdfNode4 {
    SdfNode::hypersphere(10.0)
        .translate(Vec4::new(0.0, 0.0, 0.0, 20.0))
        .union(SdfNode::hypersphere(10.0).translate(Vec4::new(0.0, 0.0, 30.0, -20.0)))
}

/// BiRay from `(0, 0, -100, 0)` marching +Z and +W, with its identity matrix
pub fn test_zw_biray() -> (BiRay<Vec4>, Mat4) {
    (
        BiRay::new(Vec4::new(0.0, 0.0, -100.0, 0.0), Vec4::Z, Vec4::W),
        Mat4::IDENTITY,
    )
}

// ============================================================================
// Standard test points
// ============================================================================

/// Canonical 3D test points scaled to the radius-30 fixtures
pub fn test_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,                        // center
        Vec3::new(30.0, 0.0, 0.0),         // X-axis surface
        Vec3::new(0.0, -30.0, 0.0),        // -Y-axis surface
        Vec3::new(17.32, 17.32, 17.32),    // diagonal (~surface)
        Vec3::new(60.0, 0.0, 0.0),         // outside X
        Vec3::new(10.0, 10.0, 10.0),       // inside
        Vec3::new(-25.0, 5.0, 12.0),       // near surface
    ]
}

/// Grid of 4D points in [-extent, extent]^4
pub fn test_grid_points_4d(resolution: usize, extent: f32) -> Vec<Vec4> {
    let step = 2.0 * extent / resolution as f32;
    let coord = |i: usize| -extent + (i as f32 + 0.5) * step;
    let mut points = Vec::with_capacity(resolution.pow(4));
    for i in 0..resolution {
        for j in 0..resolution {
            for k in 0..resolution {
                for l in 0..resolution {
                    points.push(Vec4::new(coord(i), coord(j), coord(k), coord(l)));
                }
            }
        }
    }
    points
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert two vectors are close within tolerance
pub fn assert_vec_close<V: SdfVector>(a: V, b: V, tol: f32, msg: &str) {
    let diff = (a - b).length();
    assert!(diff < tol, "{}: {:?} vs {:?} (diff={}, tol={})", msg, a, b, diff, tol);
}
