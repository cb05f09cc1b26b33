//! Frame renderer.
//!
//! One primary ray per pixel, no sampling, no bounces. Pixels are
//! independent: each task reads the immutable scene snapshot and
//! writes exactly one framebuffer slot, so the frame is a plain
//! rayon parallel-for over the flat pixel index.

use std::path::Path;
use std::time::Instant;

use lumen_core::Scene;
use lumen_math::{Ray, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::intersect::closest_hit;
use crate::shading::{shade_hit, LightingMode};

/// Per-render configuration.
///
/// Passed explicitly into `render`; there is no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub lighting_mode: LightingMode,
    pub shadows_enabled: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            lighting_mode: LightingMode::Combined,
            shadows_enabled: true,
        }
    }
}

/// Row-major pixel buffer of linear colors.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vec3 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Convert to RGBA bytes with clamp-to-one tone mapping.
    ///
    /// Each channel is clamped to [0, 1] and quantized to 8 bits;
    /// over-bright input is not an error.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.push((color.x.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((color.y.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push((color.z.clamp(0.0, 1.0) * 255.0) as u8);
            bytes.push(255);
        }
        bytes
    }

    /// Save the buffer as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Map a pixel to a camera-space ray direction.
///
/// Pixel center offset, NDC in [-1, 1] with y flipped, horizontal axis
/// scaled by aspect ratio, both axes by the half-FOV tangent, z fixed
/// at 1, normalized.
fn raster_to_camera(x: f32, y: f32, width: u32, height: u32, aspect: f32, fov: f32) -> Vec3 {
    let x = x + 0.5;
    let y = y + 0.5;

    let cx = (2.0 * x / width as f32 - 1.0) * aspect * fov;
    let cy = (1.0 - 2.0 * y / height as f32) * fov;

    Vec3::new(cx, cy, 1.0).normalize()
}

/// Render one pixel of the frame.
fn render_pixel(scene: &Scene, pixel_index: u32, aspect: f32, fov: f32, config: &RenderConfig) -> Vec3 {
    let px = pixel_index % config.width;
    let py = pixel_index / config.width;

    let camera_dir = raster_to_camera(
        px as f32,
        py as f32,
        config.width,
        config.height,
        aspect,
        fov,
    );
    // Rotation only; the ray starts at the camera origin
    let direction = scene.camera.camera_to_world.transform_vector3(camera_dir);
    let ray = Ray::new_simple(scene.camera.origin, direction);

    let rec = closest_hit(scene, &ray);
    if !rec.did_hit {
        return Vec3::ZERO;
    }

    shade_hit(
        scene,
        &rec,
        -direction,
        config.lighting_mode,
        config.shadows_enabled,
    )
}

/// Render a full frame.
///
/// The scene must not be mutated while this runs; pose updates belong
/// between frames.
pub fn render(scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let aspect = config.width as f32 / config.height as f32;
    let fov = scene.camera.fov_scale();

    let start = Instant::now();
    let mut frame = Framebuffer::new(config.width, config.height);

    frame
        .pixels
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, pixel)| {
            *pixel = render_pixel(scene, i as u32, aspect, fov, config);
        });

    log::info!(
        "rendered {}x{} ({:?}, shadows {}) in {:.1?}",
        config.width,
        config.height,
        config.lighting_mode,
        config.shadows_enabled,
        start.elapsed()
    );

    frame
}
