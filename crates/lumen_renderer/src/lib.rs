//! Lumen renderer - CPU ray casting.
//!
//! One primary ray per pixel against an explicit scene of analytic and
//! mesh geometry, local illumination only. Brute-force closest-hit and
//! any-hit queries over the whole geometry store; pixels render in
//! parallel with rayon.

mod hit;
mod intersect;
mod renderer;
mod shading;

pub use hit::HitRecord;
pub use intersect::{any_hit, closest_hit, hit_mesh, hit_plane, hit_sphere, hit_triangle};
pub use renderer::{render, Framebuffer, RenderConfig};
pub use shading::{shade_hit, LightingMode};

/// Re-export common math types
pub use lumen_math::{Aabb, Ray, Vec3};
