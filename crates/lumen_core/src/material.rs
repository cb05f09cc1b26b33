//! Surface materials.
//!
//! A closed set of material kinds with exhaustive dispatch in
//! [`Material::shade`]; the per-pixel loop pays no dynamic-call cost
//! and tests can enumerate every variant.

use lumen_math::Vec3;
use std::f32::consts::PI;

/// A surface material variant.
///
/// `shade` maps (surface normal, direction to light, direction to
/// view) to the reflected color contribution. The cosine law term is
/// applied by the renderer, never here.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Constant color, ignores lighting entirely.
    SolidColor { color: Vec3 },

    /// Lambert diffuse.
    Lambert { albedo: Vec3, reflectance: f32 },

    /// Lambert diffuse plus a Phong specular lobe.
    LambertPhong {
        albedo: Vec3,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    },

    /// Cook-Torrance microfacet specular with a Lambert diffuse term
    /// scaled by the non-metallic fraction.
    CookTorrance {
        albedo: Vec3,
        metalness: f32,
        roughness: f32,
    },
}

impl Material {
    /// Evaluate the BRDF for a light and view direction.
    ///
    /// `to_light` and `to_view` are unit vectors pointing away from
    /// the surface point.
    pub fn shade(&self, normal: Vec3, to_light: Vec3, to_view: Vec3) -> Vec3 {
        match *self {
            Material::SolidColor { color } => color,

            Material::Lambert { albedo, reflectance } => lambert(albedo, reflectance),

            Material::LambertPhong {
                albedo,
                diffuse_reflectance,
                specular_reflectance,
                phong_exponent,
            } => {
                lambert(albedo, diffuse_reflectance)
                    + phong(specular_reflectance, phong_exponent, to_light, to_view, normal)
            }

            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => cook_torrance(albedo, metalness, roughness, normal, to_light, to_view),
        }
    }
}

/// Lambert diffuse: albedo * reflectance / pi.
fn lambert(albedo: Vec3, reflectance: f32) -> Vec3 {
    albedo * reflectance / PI
}

/// Phong specular lobe from the mirror-reflected light direction.
fn phong(ks: f32, exponent: f32, to_light: Vec3, to_view: Vec3, normal: Vec3) -> Vec3 {
    let reflected = reflect(-to_light, normal);
    let cos_alpha = reflected.dot(to_view).max(0.0);
    Vec3::splat(ks * cos_alpha.powf(exponent))
}

/// GGX / Trowbridge-Reitz normal distribution, alpha = roughness^2.
fn distribution_ggx(normal: Vec3, halfway: Vec3, roughness: f32) -> f32 {
    let alpha_sq = (roughness * roughness).powi(2);
    let n_dot_h = normal.dot(halfway).max(0.0);
    let denom = n_dot_h * n_dot_h * (alpha_sq - 1.0) + 1.0;
    alpha_sq / (PI * denom * denom).max(1e-7)
}

/// Schlick-GGX masking for one direction.
fn geometry_schlick_ggx(n_dot_v: f32, roughness: f32) -> f32 {
    // Direct-lighting remap of roughness
    let k = (roughness + 1.0).powi(2) / 8.0;
    n_dot_v / (n_dot_v * (1.0 - k) + k).max(1e-7)
}

/// Smith masking-shadowing: product of the view and light terms.
fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    geometry_schlick_ggx(n_dot_v, roughness) * geometry_schlick_ggx(n_dot_l, roughness)
}

/// Schlick Fresnel with f0 blended from dielectric 0.04 to albedo.
fn fresnel_schlick(h_dot_v: f32, f0: Vec3) -> Vec3 {
    f0 + (Vec3::ONE - f0) * (1.0 - h_dot_v).clamp(0.0, 1.0).powi(5)
}

fn cook_torrance(
    albedo: Vec3,
    metalness: f32,
    roughness: f32,
    normal: Vec3,
    to_light: Vec3,
    to_view: Vec3,
) -> Vec3 {
    let n_dot_l = normal.dot(to_light).max(0.0);
    let n_dot_v = normal.dot(to_view).max(0.0);
    if n_dot_l <= 0.0 || n_dot_v <= 0.0 {
        return Vec3::ZERO;
    }

    let halfway = (to_light + to_view).normalize();
    let f0 = Vec3::splat(0.04).lerp(albedo, metalness);

    let d = distribution_ggx(normal, halfway, roughness);
    let g = geometry_smith(n_dot_v, n_dot_l, roughness);
    let f = fresnel_schlick(halfway.dot(to_view).max(0.0), f0);

    let specular = d * g * f / (4.0 * n_dot_v * n_dot_l).max(1e-7);

    // Only the non-metallic, non-reflected fraction diffuses
    let kd = (Vec3::ONE - f) * (1.0 - metalness);
    let diffuse = kd * albedo / PI;

    diffuse + specular
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}
