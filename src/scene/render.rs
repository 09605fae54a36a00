//! Full-view BiRay rendering

use glam::Vec4;
use rayon::prelude::*;

use crate::camera::Camera4;
use crate::eval::DistanceField;
use crate::raycast::{raymarch_biray, with_shadow, PointLight, RaymarchConfig, RaymarchResult};

/// Render one view of a 4D field
///
/// Marches one BiRay per pixel through the camera, rows in parallel, and
/// fills in the shadow value of every hit. The result is row-major with
/// row 0 at the top of the image. Pixel centers are sampled, so pixel
/// `(col, row)` uses image coordinates `((col + 0.5) / width, 1 - (row + 0.5) / height)`.
///
/// # Arguments
/// * `field` - 4D distance field
/// * `camera` - Camera producing the BiRays
/// * `width`, `height` - Image size in pixels
/// * `view_fraction` - Which view of a multi-view display, in `[0, 1]`
/// * `config` - Marching configuration
/// * `light` - Light for the shadow pass
pub fn render_biray_view<F>(
    field: &F,
    camera: &Camera4,
    width: usize,
    height: usize,
    view_fraction: f32,
    config: &RaymarchConfig,
    light: &PointLight<Vec4>,
) -> Vec<RaymarchResult<Vec4>>
where
    F: DistanceField<Vector = Vec4> + Sync + ?Sized,
{
    if width == 0 || height == 0 {
        return Vec::new();
    }
    if config.is_degenerate() {
        log::warn!("rendering with a degenerate raymarch configuration, every pixel will miss");
    }

    let mut buffer = vec![RaymarchResult::default(); width * height];
    let inv_width = 1.0 / width as f32;
    let inv_height = 1.0 / height as f32;

    buffer
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = 1.0 - (row as f32 + 0.5) * inv_height;
            for (col, pixel) in pixels.iter_mut().enumerate() {
                let x = (col as f32 + 0.5) * inv_width;
                let (ray, to_world) = camera.bi_ray(view_fraction, x, y);
                let result = raymarch_biray(field, &ray, &to_world, config);
                *pixel = with_shadow(field, &result, light, config);
            }
        });

    log::debug!(
        "rendered {}x{} view at {:.3}: {} hits",
        width,
        height,
        view_fraction,
        buffer.iter().filter(|r| r.hit).count()
    );
    buffer
}
