//! 4D camera producing BiRays
//!
//! The camera has four orthonormal axes: `right` and `up` span the image,
//! `forward` is the main viewing direction and `over` the secondary one.
//! Each pixel gets a [`BiRay`] whose main direction aims through the
//! primary view pane and whose secondary direction aims through the
//! secondary view pane, together with the bi-ray-to-world matrix the BiRay
//! marcher needs.
//!
//! ```text
//!   primary view pane      secondary view pane
//!       *------*              *------*
//!       |  o   | up           | .-o  | up
//!       | /    |             .-'     |
//!       */-----*          .-' *------*
//!       /  right       .-'      right
//!      / main       .-' secondary
//!     /          .-'
//!    origin -'
//! ```

use glam::{Mat4, Vec2, Vec4};
use serde::{Deserialize, Serialize};

use crate::math::{polar_to_euclidean, rot_xw, rot_zw, ternary_cross};
use crate::types::{BiRay, Ray};

/// How one of the two ray directions is derived per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectionMethod {
    /// All rays share the camera axis; the origin moves across the pane
    Parallel,
    /// Rays fan out from a shared origin through the view pane
    #[default]
    Perspective,
}

/// Camera for BiRay rendering of 4D scenes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera4 {
    /// Camera position
    pub position: Vec4,
    /// Vertical field of view in radians
    pub fov_vertical: f32,
    /// Horizontal angle spanned by the views of a multi-view display, in radians
    pub view_cone: f32,
    /// Width over height of the image
    pub aspect_ratio: f32,
    /// Main viewing axis
    pub forward: Vec4,
    /// Image horizontal axis
    pub right: Vec4,
    /// Image vertical axis
    pub up: Vec4,
    /// Secondary viewing axis
    pub over: Vec4,
    /// Distance from the camera to both view panes
    pub view_pane_distance: f32,
    /// Scale of the primary view pane
    pub primary_pane_scale: f32,
    /// Scale of the secondary view pane
    pub secondary_pane_scale: f32,
    /// Projection along the main direction
    pub primary_projection: ProjectionMethod,
    /// Projection along the secondary direction
    pub secondary_projection: ProjectionMethod,
    view_pane_half_size: Vec2,
}

/// Parameters for [`Camera4::new`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Camera position
    pub position: Vec4,
    /// Vertical field of view in radians
    pub fov_vertical: f32,
    /// View cone in radians
    pub view_cone: f32,
    /// Width over height
    pub aspect_ratio: f32,
    /// Main viewing axis (normalized on construction)
    pub forward: Vec4,
    /// Image horizontal axis (normalized on construction)
    pub right: Vec4,
    /// Image vertical axis (normalized on construction)
    pub up: Vec4,
    /// Secondary viewing axis (normalized on construction)
    pub over: Vec4,
    /// Distance to the view panes
    pub view_pane_distance: f32,
    /// Projection along the main direction
    pub primary_projection: ProjectionMethod,
    /// Projection along the secondary direction
    pub secondary_projection: ProjectionMethod,
}

impl Default for CameraSettings {
    /// Looking down +Z from 400 units away, with +W as the secondary axis
    fn default() -> Self {
        const DISTANCE: f32 = 400.0;
        CameraSettings {
            position: Vec4::new(0.0, 0.0, -DISTANCE, 0.0),
            fov_vertical: 14f32.to_radians(),
            view_cone: 35f32.to_radians(),
            aspect_ratio: 2560.0 / 1600.0,
            forward: Vec4::Z,
            right: Vec4::X,
            up: Vec4::Y,
            over: Vec4::W,
            view_pane_distance: DISTANCE,
            primary_projection: ProjectionMethod::Perspective,
            secondary_projection: ProjectionMethod::Perspective,
        }
    }
}

impl Default for Camera4 {
    fn default() -> Self {
        Camera4::new(CameraSettings::default())
    }
}

impl Camera4 {
    /// Create a camera; the four axes are normalized
    pub fn new(settings: CameraSettings) -> Self {
        let half_height = (settings.fov_vertical * 0.5).tan() * settings.view_pane_distance;
        Camera4 {
            position: settings.position,
            fov_vertical: settings.fov_vertical,
            view_cone: settings.view_cone,
            aspect_ratio: settings.aspect_ratio,
            forward: settings.forward.normalize_or_zero(),
            right: settings.right.normalize_or_zero(),
            up: settings.up.normalize_or_zero(),
            over: settings.over.normalize_or_zero(),
            view_pane_distance: settings.view_pane_distance,
            primary_pane_scale: 1.0,
            secondary_pane_scale: 1.0,
            primary_projection: settings.primary_projection,
            secondary_projection: settings.secondary_projection,
            view_pane_half_size: Vec2::new(half_height * settings.aspect_ratio, half_height),
        }
    }

    /// Half width and half height of a view pane
    pub fn view_pane_half_size(&self) -> Vec2 {
        self.view_pane_half_size
    }

    /// Ray origin for one view of a multi-view display
    ///
    /// `view_fraction` in `[0, 1]` slides the origin along `right`, covering
    /// `view_cone` as seen from the view panes. `0.5` is the camera position.
    pub fn origin_position(&self, view_fraction: f32) -> Vec4 {
        let offset_angle = (view_fraction - 0.5) * self.view_cone;
        let offset = self.view_pane_distance * offset_angle.tan();
        self.position + self.right * offset
    }

    /// Offset on a view pane for image coordinates `x`, `y` in `[0, 1]`
    pub fn view_pane_target_offset(&self, x: f32, y: f32) -> Vec4 {
        let half = self.view_pane_half_size;
        self.right * (half.x * (2.0 * x - 1.0)) + self.up * (half.y * (2.0 * y - 1.0))
    }

    /// Point on the primary view pane for image coordinates `x`, `y`
    pub fn primary_view_pane_target(&self, x: f32, y: f32) -> Vec4 {
        let center = self.position + self.forward * self.view_pane_distance;
        center + self.view_pane_target_offset(x, y) * self.primary_pane_scale
    }

    /// Point on the secondary view pane for image coordinates `x`, `y`
    pub fn secondary_view_pane_target(&self, x: f32, y: f32) -> Vec4 {
        let center = self.position + self.over * self.view_pane_distance;
        center + self.view_pane_target_offset(x, y) * self.secondary_pane_scale
    }

    /// BiRay for one pixel, with its bi-ray-to-world matrix
    ///
    /// The matrix columns are `right`, `up`, the main direction and the
    /// secondary direction.
    pub fn bi_ray(&self, view_fraction: f32, x: f32, y: f32) -> (BiRay<Vec4>, Mat4) {
        let mut origin = self.origin_position(view_fraction);
        let mut main = self.forward;
        let mut secondary = self.over;

        match self.primary_projection {
            ProjectionMethod::Perspective => {
                main = (self.primary_view_pane_target(x, y) - origin).normalize_or_zero();
            }
            ProjectionMethod::Parallel => origin += self.view_pane_target_offset(x, y),
        }

        match self.secondary_projection {
            ProjectionMethod::Perspective => {
                secondary = (self.secondary_view_pane_target(x, y) - origin).normalize_or_zero();
            }
            ProjectionMethod::Parallel => origin += self.view_pane_target_offset(x, y),
        }

        let to_world = Mat4::from_cols(self.right, self.up, main, secondary);
        (BiRay::new(origin, main, secondary), to_world)
    }

    /// Single ray for one pixel, using the primary projection only
    pub fn ray(&self, x: f32, y: f32) -> Ray<Vec4> {
        match self.primary_projection {
            ProjectionMethod::Perspective => {
                Ray::new(self.position, self.primary_view_pane_target(x, y) - self.position)
            }
            ProjectionMethod::Parallel => {
                Ray::new(self.position + self.view_pane_target_offset(x, y), self.forward)
            }
        }
    }

    /// Place the camera on a hypersphere around the origin, looking at it
    ///
    /// The sphere radius is `view_pane_distance`. `latitude_zw` picks the
    /// 3-sphere slice (`-pi/2` is the default front view on the -Z axis),
    /// `latitude_yz` and `longitude_xy` pick the point within it. `forward`
    /// points at the origin, `right` and `up` are rotated to match and then
    /// made orthogonal to `forward` (and to each other), and `over` is the
    /// ternary cross of the three. The basis stays orthonormal.
    pub fn update_orbit(&mut self, latitude_zw: f32, latitude_yz: f32, longitude_xy: f32) {
        self.position = polar_to_euclidean(Vec4::new(
            self.view_pane_distance,
            latitude_zw,
            latitude_yz,
            longitude_xy,
        ));

        let forward = (-self.position).normalize_or_zero();
        let right = rot_xw(latitude_yz) * rot_zw(longitude_xy) * Vec4::X;
        let right = (right - forward * right.dot(forward)).normalize_or_zero();
        let up = rot_xw(latitude_yz) * Vec4::Y;
        let up = (up - forward * up.dot(forward) - right * up.dot(right)).normalize_or_zero();
        let over = ternary_cross(right, up, forward).normalize_or_zero();

        if [forward, right, up, over].contains(&Vec4::ZERO) {
            log::warn!(
                "camera basis degenerate at orbit ({}, {}, {}); keeping previous orientation",
                latitude_zw,
                latitude_yz,
                longitude_xy
            );
            return;
        }

        self.forward = forward;
        self.right = right;
        self.up = up;
        self.over = over;
    }

    /// Move the camera by `offset`
    pub fn move_local(&mut self, offset: Vec4) {
        self.position += offset;
    }

    /// Move the camera back to the origin
    pub fn reset(&mut self) {
        self.position = Vec4::ZERO;
    }
}
