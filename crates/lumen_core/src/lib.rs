//! Lumen Core - scene data model for the CPU ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`
//! - **Shading inputs**: `Material`, `Light`
//! - **View**: `Camera` with its camera-to-world transform
//! - **Container**: `Scene` owning all of the above
//! - **OBJ support**: triangle mesh loading via `load_obj`
//!
//! Geometry and lights are appended at scene-build time and stay
//! immutable while a render pass is in flight; mesh poses may only be
//! changed between frames.

pub mod camera;
pub mod geometry;
pub mod light;
pub mod material;
pub mod obj;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use geometry::{CullMode, Plane, Sphere, Transform, Triangle, TriangleMesh};
pub use light::{Light, LightKind};
pub use material::Material;
pub use obj::{load_obj, ObjError};
pub use scene::Scene;
