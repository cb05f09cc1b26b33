//! Per-pixel lighting composition.

use lumen_core::light::LightKind;
use lumen_core::Scene;
use lumen_math::{Ray, Vec3, SHADOW_T_MIN};
use serde::{Deserialize, Serialize};

use crate::hit::HitRecord;
use crate::intersect::any_hit;

/// Which factor(s) of the shading equation are composed per pixel.
///
/// The first three are debug visualizations; `Combined` is the full
/// `radiance * brdf * cos(theta)` sum over lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// White scaled by the clamped cosine term only
    ObservedArea,
    /// Light radiance only
    Radiance,
    /// Material BRDF response only
    Brdf,
    /// Physically composed result
    #[default]
    Combined,
}

/// Accumulate the contributions of every scene light at a hit point.
///
/// `to_view` is the unit direction from the hit point back toward the
/// camera. With shadows enabled, a light whose shadow ray is occluded
/// contributes nothing (binary visibility, not attenuation).
pub fn shade_hit(
    scene: &Scene,
    rec: &HitRecord,
    to_view: Vec3,
    mode: LightingMode,
    shadows_enabled: bool,
) -> Vec3 {
    let material = &scene.materials[rec.material_index];
    let mut color = Vec3::ZERO;

    for light in &scene.lights {
        let to_light = light.direction_from(rec.point);
        let distance = to_light.length();
        let to_light = to_light / distance;

        if shadows_enabled {
            let t_max = match light.kind {
                LightKind::Point => distance,
                LightKind::Directional => f32::MAX,
            };
            let shadow_ray = Ray::new(rec.point, to_light, SHADOW_T_MIN, t_max);
            if any_hit(scene, &shadow_ray) {
                continue;
            }
        }

        let cos_theta = rec.normal.dot(to_light).max(0.0);

        match mode {
            LightingMode::ObservedArea => {
                color += Vec3::ONE * cos_theta;
            }
            LightingMode::Radiance => {
                color += light.radiance(rec.point);
            }
            LightingMode::Brdf => {
                color += material.shade(rec.normal, to_light, to_view);
            }
            LightingMode::Combined => {
                color += light.radiance(rec.point)
                    * material.shade(rec.normal, to_light, to_view)
                    * cos_theta;
            }
        }
    }

    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::{Camera, Material};

    fn scene_with(material: Material, intensity: f32, light_color: Vec3) -> Scene {
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, 45.0));
        let mat = scene.add_material(material);
        scene.add_sphere(Vec3::new(0.0, 0.0, 3.0), 1.0, mat);
        scene.add_point_light(Vec3::new(0.0, 4.0, 0.0), intensity, light_color);
        scene
    }

    fn front_hit(material_index: usize) -> HitRecord {
        HitRecord {
            did_hit: true,
            point: Vec3::new(0.0, 0.0, 2.0),
            normal: -Vec3::Z,
            t: 2.0,
            material_index,
        }
    }

    const LAMBERT_WHITE: Material = Material::Lambert {
        albedo: Vec3::ONE,
        reflectance: 1.0,
    };
    const LAMBERT_GREEN: Material = Material::Lambert {
        albedo: Vec3::new(0.1, 0.9, 0.1),
        reflectance: 0.5,
    };

    #[test]
    fn test_observed_area_ignores_material_and_light_color() {
        let a = scene_with(LAMBERT_WHITE, 10.0, Vec3::ONE);
        let b = scene_with(LAMBERT_GREEN, 10.0, Vec3::new(1.0, 0.0, 0.5));

        let rec = front_hit(1);
        let ca = shade_hit(&a, &rec, -Vec3::Z, LightingMode::ObservedArea, false);
        let cb = shade_hit(&b, &rec, -Vec3::Z, LightingMode::ObservedArea, false);
        assert!((ca - cb).length() < 1e-6);
    }

    #[test]
    fn test_radiance_mode_ignores_material() {
        let a = scene_with(LAMBERT_WHITE, 10.0, Vec3::ONE);
        let b = scene_with(LAMBERT_GREEN, 10.0, Vec3::ONE);

        let rec = front_hit(1);
        let ca = shade_hit(&a, &rec, -Vec3::Z, LightingMode::Radiance, false);
        let cb = shade_hit(&b, &rec, -Vec3::Z, LightingMode::Radiance, false);
        assert!((ca - cb).length() < 1e-6);
    }

    #[test]
    fn test_brdf_mode_ignores_light_intensity() {
        let a = scene_with(LAMBERT_GREEN, 10.0, Vec3::ONE);
        let b = scene_with(LAMBERT_GREEN, 500.0, Vec3::ONE);

        let rec = front_hit(1);
        let ca = shade_hit(&a, &rec, -Vec3::Z, LightingMode::Brdf, false);
        let cb = shade_hit(&b, &rec, -Vec3::Z, LightingMode::Brdf, false);
        assert!((ca - cb).length() < 1e-6);
    }

    #[test]
    fn test_combined_sums_over_lights() {
        let mut scene = scene_with(LAMBERT_WHITE, 20.0, Vec3::ONE);
        let one_light = shade_hit(
            &scene,
            &front_hit(1),
            -Vec3::Z,
            LightingMode::Combined,
            false,
        );

        scene.add_point_light(Vec3::new(0.0, -4.0, 0.0), 20.0, Vec3::ONE);
        let two_lights = shade_hit(
            &scene,
            &front_hit(1),
            -Vec3::Z,
            LightingMode::Combined,
            false,
        );

        assert!(two_lights.length() > one_light.length());
    }

    #[test]
    fn test_shadowed_light_contributes_nothing() {
        let mut scene = scene_with(LAMBERT_WHITE, 20.0, Vec3::ONE);
        let rec = front_hit(1);

        let lit = shade_hit(&scene, &rec, -Vec3::Z, LightingMode::Combined, true);

        // Drop an occluder between the hit point and the light
        scene.add_sphere(Vec3::new(0.0, 2.0, 1.0), 0.9, 0);
        let shadowed = shade_hit(&scene, &rec, -Vec3::Z, LightingMode::Combined, true);
        let shadows_off = shade_hit(&scene, &rec, -Vec3::Z, LightingMode::Combined, false);

        assert!(lit.length() > 0.0);
        assert_eq!(shadowed, Vec3::ZERO);
        assert!(shadows_off.length() > 0.0);
    }

    #[test]
    fn test_below_horizon_cosine_clamps_to_zero() {
        let scene = scene_with(LAMBERT_WHITE, 20.0, Vec3::ONE);

        // Normal facing away from the light
        let rec = HitRecord {
            did_hit: true,
            point: Vec3::new(0.0, 0.0, 2.0),
            normal: -Vec3::Y,
            t: 2.0,
            material_index: 1,
        };
        let color = shade_hit(&scene, &rec, -Vec3::Z, LightingMode::Combined, false);
        assert_eq!(color, Vec3::ZERO);
    }
}
