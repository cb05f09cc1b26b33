//! Hit record for ray-scene intersection.

use lumen_math::Vec3;

/// Record of a ray-geometry intersection.
///
/// Mutated only by the intersection routines. A "no closer hit yet"
/// record carries the ray's `t_max` as sentinel in `t`.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub did_hit: bool,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Ray parameter of the hit
    pub t: f32,
    /// Index into the scene's material list
    pub material_index: usize,
}

impl HitRecord {
    /// A miss record with `t` set to the given sentinel.
    pub fn none_at(t_max: f32) -> Self {
        Self {
            did_hit: false,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: t_max,
            material_index: 0,
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        Self::none_at(f32::MAX)
    }
}
