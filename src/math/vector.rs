//! Dimension-generic vector abstraction
//!
//! Every SDF node, evaluator and marcher in this crate is generic over
//! [`SdfVector`], which is implemented for [`Vec3`] and [`Vec4`]. Mixing
//! dimensionalities is therefore a type error, not a runtime check.

use glam::{Mat4, Vec2, Vec3, Vec4};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Fixed-size `f32` vector usable as an SDF sample position
pub trait SdfVector:
    Copy
    + Debug
    + PartialEq
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Mul<f32, Output = Self>
    + Div<f32, Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    /// All components zero
    const ZERO: Self;

    /// Number of components
    const DIM: usize;

    /// Finite-difference radius used by [`sample_normal`](crate::eval::sample_normal)
    const NORMAL_SAMPLE_RADIUS: f32;

    /// Finite-difference radius used by [`to_surface_vector`](crate::eval::to_surface_vector)
    const SURFACE_SAMPLE_RADIUS: f32;

    /// Simplex sample directions for gradient estimation
    ///
    /// 3D uses the four tetrahedron corners, 4D the five vertices of a
    /// regular 4-simplex.
    const SAMPLE_DIRECTIONS: &'static [Self];

    /// All components set to `v`
    fn splat(v: f32) -> Self;

    /// Dot product
    fn dot(self, rhs: Self) -> f32;

    /// Component-wise absolute value
    fn abs(self) -> Self;

    /// Component-wise maximum
    fn max(self, rhs: Self) -> Self;

    /// Component-wise minimum
    fn min(self, rhs: Self) -> Self;

    /// Largest component
    fn max_element(self) -> f32;

    /// Component-wise round half away from zero
    fn round(self) -> Self;

    /// True when every component is finite
    fn is_finite(self) -> bool;

    /// Apply a 4x4 matrix
    ///
    /// 4D vectors are multiplied directly. 3D vectors are lifted to
    /// homogeneous `(x, y, z, 1)` and truncated back after the multiply.
    fn transform(self, matrix: &Mat4) -> Self;

    /// The last two components (z/w in 4D, y/z in 3D)
    fn trailing_plane(self) -> Vec2;

    /// A vector whose last two components are `plane` and the rest zero
    fn from_trailing_plane(plane: Vec2) -> Self;

    /// Euclidean length
    #[inline(always)]
    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared Euclidean length
    #[inline(always)]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Component-wise clamp
    #[inline(always)]
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Unit vector in the same direction, or zero for degenerate input
    ///
    /// Never yields NaN: zero, denormal and non-finite lengths map to [`Self::ZERO`].
    #[inline(always)]
    fn normalize_or_zero(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 1e-20 && len_sq.is_finite() {
            self / len_sq.sqrt()
        } else {
            Self::ZERO
        }
    }
}

const TETRAHEDRON: [Vec3; 4] = [
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
];

const PENTATOPE: [Vec4; 5] = [
    Vec4::new(0.25, 0.322_749, 0.456_435, -0.790_569),
    Vec4::new(0.25, 0.322_749, 0.456_435, 0.790_569),
    Vec4::new(0.25, 0.322_749, -0.912_871, 0.0),
    Vec4::new(0.25, -0.968_246, 0.0, 0.0),
    Vec4::new(-1.0, 0.0, 0.0, 0.0),
];

impl SdfVector for Vec3 {
    const ZERO: Self = Vec3::ZERO;
    const DIM: usize = 3;
    const NORMAL_SAMPLE_RADIUS: f32 = 0.001;
    const SURFACE_SAMPLE_RADIUS: f32 = 0.001;
    const SAMPLE_DIRECTIONS: &'static [Self] = &TETRAHEDRON;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        Vec3::splat(v)
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> f32 {
        Vec3::dot(self, rhs)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Vec3::abs(self)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Vec3::max(self, rhs)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Vec3::min(self, rhs)
    }

    #[inline(always)]
    fn max_element(self) -> f32 {
        Vec3::max_element(self)
    }

    #[inline(always)]
    fn round(self) -> Self {
        Vec3::round(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        Vec3::is_finite(self)
    }

    #[inline(always)]
    fn transform(self, matrix: &Mat4) -> Self {
        (*matrix * self.extend(1.0)).truncate()
    }

    #[inline(always)]
    fn trailing_plane(self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    #[inline(always)]
    fn from_trailing_plane(plane: Vec2) -> Self {
        Vec3::new(0.0, plane.x, plane.y)
    }
}

impl SdfVector for Vec4 {
    const ZERO: Self = Vec4::ZERO;
    const DIM: usize = 4;
    const NORMAL_SAMPLE_RADIUS: f32 = 0.015;
    const SURFACE_SAMPLE_RADIUS: f32 = 0.005;
    const SAMPLE_DIRECTIONS: &'static [Self] = &PENTATOPE;

    #[inline(always)]
    fn splat(v: f32) -> Self {
        Vec4::splat(v)
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> f32 {
        Vec4::dot(self, rhs)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Vec4::abs(self)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Vec4::max(self, rhs)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Vec4::min(self, rhs)
    }

    #[inline(always)]
    fn max_element(self) -> f32 {
        Vec4::max_element(self)
    }

    #[inline(always)]
    fn round(self) -> Self {
        Vec4::round(self)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        Vec4::is_finite(self)
    }

    #[inline(always)]
    fn transform(self, matrix: &Mat4) -> Self {
        *matrix * self
    }

    #[inline(always)]
    fn trailing_plane(self) -> Vec2 {
        Vec2::new(self.z, self.w)
    }

    #[inline(always)]
    fn from_trailing_plane(plane: Vec2) -> Self {
        Vec4::new(0.0, 0.0, plane.x, plane.y)
    }
}
