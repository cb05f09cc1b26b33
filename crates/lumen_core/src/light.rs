//! Point and directional lights.

use lumen_math::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Directional,
}

/// A light source.
///
/// Point lights live at `origin` and fall off with inverse-square
/// distance; directional lights shine along `direction` from infinity
/// with no falloff.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub kind: LightKind,
    pub origin: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            kind: LightKind::Point,
            origin,
            direction: Vec3::ZERO,
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Vec3) -> Self {
        Self {
            kind: LightKind::Directional,
            origin: Vec3::ZERO,
            direction: direction.normalize(),
            color,
            intensity,
        }
    }

    /// Unnormalized direction from `target` toward the light.
    ///
    /// For directional lights the result is a unit vector; the caller
    /// treats the light as infinitely far away.
    pub fn direction_from(&self, target: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Point => self.origin - target,
            LightKind::Directional => -self.direction,
        }
    }

    /// Radiance arriving at `target`.
    ///
    /// Point lights apply inverse-square falloff with no clamp near
    /// zero distance; callers must not place a light on a surface
    /// point. Directional lights contribute a fixed color * intensity.
    pub fn radiance(&self, target: Vec3) -> Vec3 {
        match self.kind {
            LightKind::Point => {
                let distance_sq = (self.origin - target).length_squared();
                self.color * (self.intensity / distance_sq)
            }
            LightKind::Directional => self.color * self.intensity,
        }
    }
}
