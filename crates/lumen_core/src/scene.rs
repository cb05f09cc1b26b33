//! Scene container.

use lumen_math::Vec3;

use crate::camera::Camera;
use crate::geometry::{CullMode, Plane, Sphere, TriangleMesh};
use crate::light::Light;
use crate::material::Material;

/// A complete scene: flat geometry stores, lights, materials, one camera.
///
/// Materials are owned here and referenced everywhere else by index.
/// Builder methods append and return the new element's index; geometry
/// and lights must not be mutated while a render pass is in flight.
#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub planes: Vec<Plane>,
    pub meshes: Vec<TriangleMesh>,
    pub lights: Vec<Light>,
    pub materials: Vec<Material>,
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene.
    ///
    /// Slot 0 holds a default solid red material so that unassigned
    /// geometry renders visibly wrong rather than crashing.
    pub fn new(camera: Camera) -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::SolidColor {
                color: Vec3::new(1.0, 0.0, 0.0),
            }],
            camera,
        }
    }

    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material_index: usize) -> usize {
        self.spheres.push(Sphere {
            origin,
            radius,
            material_index,
        });
        self.spheres.len() - 1
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: usize) -> usize {
        self.planes.push(Plane {
            origin,
            normal,
            material_index,
        });
        self.planes.len() - 1
    }

    /// Append an empty mesh and return its index; the caller fills in
    /// geometry through `meshes[index]`.
    pub fn add_mesh(&mut self, cull_mode: CullMode, material_index: usize) -> usize {
        self.meshes.push(TriangleMesh::new(cull_mode, material_index));
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Vec3) -> usize {
        self.lights.push(Light::point(origin, intensity, color));
        self.lights.len() - 1
    }

    pub fn add_directional_light(
        &mut self,
        direction: Vec3,
        intensity: f32,
        color: Vec3,
    ) -> usize {
        self.lights.push(Light::directional(direction, intensity, color));
        self.lights.len() - 1
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangle_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Triangle;

    #[test]
    fn test_builder_returns_indices() {
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, 45.0));

        // Slot 0 is the default material
        let red = scene.add_material(Material::Lambert {
            albedo: Vec3::X,
            reflectance: 1.0,
        });
        assert_eq!(red, 1);

        assert_eq!(scene.add_sphere(Vec3::ZERO, 1.0, red), 0);
        assert_eq!(scene.add_sphere(Vec3::X, 1.0, red), 1);
        assert_eq!(scene.add_plane(Vec3::ZERO, Vec3::Y, red), 0);
        assert_eq!(scene.add_point_light(Vec3::Y, 10.0, Vec3::ONE), 0);
    }

    #[test]
    fn test_triangle_count() {
        let mut scene = Scene::new(Camera::new(Vec3::ZERO, 45.0));
        let mesh = scene.add_mesh(CullMode::None, 0);
        scene.meshes[mesh].append_triangle(&Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y));
        scene.meshes[mesh].append_triangle(&Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::Z));
        assert_eq!(scene.triangle_count(), 2);
    }
}
