//! Raymarch configuration

use serde::{Deserialize, Serialize};

/// Raymarch configuration
///
/// Shared by the single-ray, shadow and BiRay marchers. Distances are in
/// scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaymarchConfig {
    /// Maximum number of marching steps (BiRay edge walk included)
    pub max_steps: u32,
    /// Maximum distance along the (main) ray before giving up
    pub max_distance: f32,
    /// Distance threshold for a surface hit
    pub ray_hit_epsilon: f32,
    /// Smallest step the BiRay marcher takes in bi-ray space
    pub min_step_size: f32,
    /// Offset along the light direction before a shadow ray starts
    pub shadow_start_offset: f32,
    /// Distance threshold for occluder contact in the shadow marcher
    pub shadow_ray_hit_epsilon: f32,
    /// Maximum number of shadow marching steps
    pub max_steps_shadow: u32,
    /// Penumbra sharpness; higher values give harder shadow edges
    pub shadow_penumbra_factor: f32,
    /// Half-angle of the BiRay cone search, in degrees
    pub cone_angle_degrees: f32,
    /// Bias subtracted from z before sampling a BiRay hit normal
    pub normal_bias_z: f32,
    /// Bias subtracted from w before sampling a BiRay hit normal
    pub normal_bias_w: f32,
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        RaymarchConfig {
            max_steps: 1000,
            max_distance: 4096.0,
            ray_hit_epsilon: 0.2,
            min_step_size: 0.15,
            shadow_start_offset: 0.05,
            shadow_ray_hit_epsilon: 0.2,
            max_steps_shadow: 800,
            shadow_penumbra_factor: 2.0,
            cone_angle_degrees: 8.5,
            normal_bias_z: 0.0,
            normal_bias_w: 0.5,
        }
    }
}

impl RaymarchConfig {
    /// High quality configuration
    ///
    /// Tighter hit thresholds and a finer edge walk, at several times the cost.
    pub fn high_quality() -> Self {
        RaymarchConfig {
            max_steps: 4000,
            ray_hit_epsilon: 0.05,
            min_step_size: 0.05,
            shadow_ray_hit_epsilon: 0.05,
            max_steps_shadow: 2000,
            ..Default::default()
        }
    }

    /// Fast configuration for preview
    pub fn fast() -> Self {
        RaymarchConfig {
            max_steps: 300,
            max_distance: 2048.0,
            ray_hit_epsilon: 0.4,
            min_step_size: 0.4,
            shadow_ray_hit_epsilon: 0.4,
            max_steps_shadow: 200,
            ..Default::default()
        }
    }

    /// Cone half-angle in radians
    #[inline]
    pub fn cone_angle(&self) -> f32 {
        self.cone_angle_degrees.to_radians()
    }

    /// True when no march can produce a meaningful result
    ///
    /// Degenerate means any of: zero `max_steps`, a non-positive (or NaN)
    /// `max_distance`, `ray_hit_epsilon` or `min_step_size`, or a cone
    /// half-angle outside `[0, 90)` degrees. A hit epsilon of zero or less
    /// can never register a hit, so it counts too. Marchers answer a
    /// degenerate configuration with an immediate miss.
    pub fn is_degenerate(&self) -> bool {
        self.max_steps == 0
            || !(self.max_distance > 0.0)
            || !(self.ray_hit_epsilon > 0.0)
            || !(self.min_step_size > 0.0)
            || !(0.0..90.0).contains(&self.cone_angle_degrees)
    }
}
