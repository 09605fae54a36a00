//! General 4x4 matrix transform for SDFs
//!
//! The matrix is applied to the query point as-is: it maps world space
//! into the child's space. Pass the inverse of an object-to-world matrix.
//! Only rigid matrices keep the child's distances exact.

use crate::math::SdfVector;
use glam::Mat4;

/// Map a query point into the child frame of a matrix transform
#[inline(always)]
pub fn transform_matrix<V: SdfVector>(point: V, matrix: &Mat4) -> V {
    point.transform(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rot_zw;
    use glam::{Vec3, Vec4};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(transform_matrix(p, &Mat4::IDENTITY), p);
    }

    #[test]
    fn test_rotation_in_zw_plane() {
        let p = transform_matrix(Vec4::Z, &rot_zw(FRAC_PI_2));
        assert!((p - Vec4::W).length() < 1e-6);
    }

    #[test]
    fn test_3d_translation_column() {
        let m = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(transform_matrix(Vec3::ZERO, &m), Vec3::new(0.0, 0.0, -5.0));
    }
}
