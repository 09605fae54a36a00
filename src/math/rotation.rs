//! Plane rotations and 4D vector products
//!
//! A rotation in 4D happens within a plane spanned by two axes and leaves
//! the complementary plane fixed. Each `rot_*` builder names the plane in
//! which it rotates; positive angles turn the first axis toward the second.

use glam::{Mat4, Vec2, Vec3, Vec4};

#[inline(always)]
fn plane_rotation(a: usize, b: usize, angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    let mut cols = Mat4::IDENTITY.to_cols_array_2d();
    cols[a][a] = c;
    cols[a][b] = s;
    cols[b][a] = -s;
    cols[b][b] = c;
    Mat4::from_cols_array_2d(&cols)
}

/// Rotation in the XY plane (fixes Z and W)
#[inline]
pub fn rot_xy(angle: f32) -> Mat4 {
    plane_rotation(0, 1, angle)
}

/// Rotation in the XZ plane (fixes Y and W)
#[inline]
pub fn rot_xz(angle: f32) -> Mat4 {
    plane_rotation(0, 2, angle)
}

/// Rotation in the XW plane (fixes Y and Z)
#[inline]
pub fn rot_xw(angle: f32) -> Mat4 {
    plane_rotation(0, 3, angle)
}

/// Rotation in the YZ plane (fixes X and W)
#[inline]
pub fn rot_yz(angle: f32) -> Mat4 {
    plane_rotation(1, 2, angle)
}

/// Rotation in the YW plane (fixes X and Z)
#[inline]
pub fn rot_yw(angle: f32) -> Mat4 {
    plane_rotation(1, 3, angle)
}

/// Rotation in the ZW plane (fixes X and Y)
#[inline]
pub fn rot_zw(angle: f32) -> Mat4 {
    plane_rotation(2, 3, angle)
}

/// Rotate a 2D vector counter-clockwise by `angle` radians
#[inline(always)]
pub fn rotate_angle(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Vector orthogonal to three 4D vectors
///
/// Cofactor expansion of the 4x4 determinant with rows `a`, `b`, `c` and
/// the basis vectors, so `ternary_cross(X, Y, Z) == W` and the result is
/// orthogonal to `a`, `b` and `c`.
#[inline]
pub fn ternary_cross(a: Vec4, b: Vec4, c: Vec4) -> Vec4 {
    let minor = |pick: fn(Vec4) -> Vec3| pick(a).dot(pick(b).cross(pick(c)));
    Vec4::new(
        -minor(|v| Vec3::new(v.y, v.z, v.w)),
        minor(|v| Vec3::new(v.x, v.z, v.w)),
        -minor(|v| Vec3::new(v.x, v.y, v.w)),
        minor(|v| Vec3::new(v.x, v.y, v.z)),
    )
}

/// Hyperspherical coordinates to cartesian
///
/// `polar` is `(radius, angle_zw, angle_yz, angle_xy)`; an `angle_zw` of zero
/// places the point on the +W pole.
#[inline]
pub fn polar_to_euclidean(polar: Vec4) -> Vec4 {
    let r = polar.x;
    let (s1, c1) = polar.y.sin_cos();
    let (s2, c2) = polar.z.sin_cos();
    let (s3, c3) = polar.w.sin_cos();
    Vec4::new(r * s1 * s2 * s3, r * s1 * s2 * c3, r * s1 * c2, r * c1)
}

/// Clamp to `[0, 1]`
#[inline(always)]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// `t * b + (1 - t) * a` without clamping `t`
#[inline(always)]
pub fn unclamped_lerp(a: f32, b: f32, t: f32) -> f32 {
    t * b + (1.0 - t) * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_rot_xy_quarter_turn() {
        let v = rot_xy(FRAC_PI_2) * Vec4::X;
        assert!(approx(v, Vec4::Y), "{:?}", v);
    }

    #[test]
    fn test_rot_zw_fixes_xy() {
        let m = rot_zw(1.234);
        assert!(approx(m * Vec4::X, Vec4::X));
        assert!(approx(m * Vec4::Y, Vec4::Y));
        assert!(approx(m * Vec4::Z, Vec4::new(0.0, 0.0, 1.234f32.cos(), 1.234f32.sin())));
    }

    #[test]
    fn test_plane_rotations_preserve_length() {
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for m in [rot_xy(0.3), rot_xz(0.7), rot_xw(1.1), rot_yz(-0.4), rot_yw(2.0), rot_zw(PI)] {
            assert!(((m * p).length() - p.length()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rotate_angle() {
        let v = rotate_angle(Vec2::X, FRAC_PI_2);
        assert!((v - Vec2::Y).length() < 1e-6);
        let v = rotate_angle(Vec2::new(3.0, 4.0), -0.5);
        assert!((v.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_ternary_cross_of_basis() {
        let w = ternary_cross(Vec4::X, Vec4::Y, Vec4::Z);
        assert!(approx(w, Vec4::W), "{:?}", w);
        assert!(approx(ternary_cross(Vec4::Y, Vec4::Z, Vec4::W), -Vec4::X));
        assert!(approx(ternary_cross(Vec4::Y, Vec4::X, Vec4::Z), -Vec4::W));
    }

    #[test]
    fn test_ternary_cross_is_orthogonal() {
        let a = Vec4::new(1.0, 2.0, 0.5, -1.0);
        let b = Vec4::new(-0.3, 1.0, 2.0, 0.0);
        let c = Vec4::new(0.0, -1.0, 1.0, 3.0);
        let n = ternary_cross(a, b, c);
        assert!(n.dot(a).abs() < 1e-4);
        assert!(n.dot(b).abs() < 1e-4);
        assert!(n.dot(c).abs() < 1e-4);
        assert!(n.length() > 1.0);
    }

    #[test]
    fn test_polar_to_euclidean_poles() {
        assert!(approx(polar_to_euclidean(Vec4::new(2.0, 0.0, 0.0, 0.0)), Vec4::new(0.0, 0.0, 0.0, 2.0)));
        let p = polar_to_euclidean(Vec4::new(400.0, -FRAC_PI_2, 0.0, 0.0));
        assert!((p - Vec4::new(0.0, 0.0, -400.0, 0.0)).length() < 1e-3, "{:?}", p);
    }

    #[test]
    fn test_lerp_helpers() {
        assert_eq!(clamp01(-1.0), 0.0);
        assert_eq!(clamp01(2.0), 1.0);
        assert_eq!(unclamped_lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(unclamped_lerp(2.0, 4.0, 2.0), 6.0);
    }
}
