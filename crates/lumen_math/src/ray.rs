use crate::Vec3;

/// Default near bound for primary rays.
pub const RAY_T_MIN: f32 = 1e-4;

/// Near bound for shadow rays, keeps a surface from occluding itself.
pub const SHADOW_T_MIN: f32 = 1e-3;

/// A ray in 3D space with origin, direction, and a valid `t` range.
///
/// Rays represent a line starting at `origin` and traveling in
/// `direction`; intersections are only accepted for parameters inside
/// `[t_min, t_max]`. The intersection formulas assume `direction` is
/// unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    /// Create a ray with explicit `t` bounds.
    pub fn new(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            t_min,
            t_max,
        }
    }

    /// Create a ray with the default bounds `[RAY_T_MIN, f32::MAX]`.
    pub fn new_simple(origin: Vec3, direction: Vec3) -> Self {
        Self::new(origin, direction, RAY_T_MIN, f32::MAX)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Returns true if t is within `[t_min, t_max]` (inclusive).
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        self.t_min <= t && t <= self.t_max
    }
}
