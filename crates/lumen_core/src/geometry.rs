//! Geometry store types.
//!
//! Spheres and planes are plain analytic records; triangle meshes keep
//! object-space data plus world-space caches derived from their pose.
//! Materials are referenced by index into the scene's material list,
//! never by pointer.

use lumen_math::{Aabb, Mat4, Quat, Vec3};

/// Policy for ignoring triangle intersections based on the facing of
/// the triangle relative to the ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    #[default]
    None,
    BackFace,
    FrontFace,
}

/// An analytic sphere.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material_index: usize,
}

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: usize,
}

/// A single triangle, the atomic unit of mesh hit-testing.
///
/// Not stored in the scene; meshes materialize these on the fly from
/// their cached world-space buffers.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: usize,
}

impl Triangle {
    /// Create a triangle, deriving the face normal from the winding.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self::with_normal(v0, v1, v2, normal)
    }

    /// Create a triangle with a pre-computed face normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode: CullMode::None,
            material_index: 0,
        }
    }

    pub fn centroid(&self) -> Vec3 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }
}

/// Transform components that compose into a pose matrix.
///
/// Order: Scale -> Rotate -> Translate (SRT)
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Convert to a 4x4 transformation matrix.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A triangle mesh with per-triangle face normals.
///
/// Object-space `positions`/`normals` are authoritative; the
/// world-space buffers and bounds are caches derived from the pose.
/// Every pose mutator refreshes the caches before returning, so a
/// stale cache is unrepresentable.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Object-space vertex positions
    pub positions: Vec<Vec3>,

    /// Object-space face normals, one per triangle
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    /// Cull mode shared by every triangle of the mesh
    pub cull_mode: CullMode,

    /// Material shared by every triangle of the mesh
    pub material_index: usize,

    transform: Transform,
    world_positions: Vec<Vec3>,
    world_normals: Vec<Vec3>,
    world_bounds: Aabb,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new(cull_mode: CullMode, material_index: usize) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material_index,
            transform: Transform::default(),
            world_positions: Vec::new(),
            world_normals: Vec::new(),
            world_bounds: Aabb::EMPTY,
        }
    }

    /// Create a mesh from loaded geometry.
    ///
    /// Face normals are computed from the index buffer when the loader
    /// does not supply them.
    pub fn with_geometry(
        mut self,
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        normals: Option<Vec<Vec3>>,
    ) -> Self {
        debug_assert!(indices.len() % 3 == 0);
        self.positions = positions;
        self.indices = indices;
        match normals {
            Some(normals) => self.normals = normals,
            None => self.calculate_normals(),
        }
        self.refresh_world_cache();
        self
    }

    /// Append a standalone triangle's vertices and face normal.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let base = self.positions.len() as u32;
        self.positions
            .extend_from_slice(&[triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
        self.normals.push(triangle.normal);
        self.refresh_world_cache();
    }

    /// Recompute per-triangle face normals from positions and indices.
    pub fn calculate_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.indices.len() / 3);

        for face in self.indices.chunks_exact(3) {
            let v0 = self.positions[face[0] as usize];
            let v1 = self.positions[face[1] as usize];
            let v2 = self.positions[face[2] as usize];

            let mut normal = (v1 - v0).cross(v2 - v0);
            let len = normal.length();
            if len > 0.0 {
                normal /= len;
            } else {
                normal = Vec3::Y; // degenerate face
            }
            self.normals.push(normal);
        }
    }

    /// Set the translation component of the pose.
    pub fn translate(&mut self, translation: Vec3) {
        self.transform.translation = translation;
        self.refresh_world_cache();
    }

    /// Set the rotation component of the pose to a yaw around +Y.
    pub fn rotate_y(&mut self, yaw: f32) {
        self.transform.rotation = Quat::from_rotation_y(yaw);
        self.refresh_world_cache();
    }

    /// Set the scale component of the pose.
    pub fn scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
        self.refresh_world_cache();
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Cached world-space vertex positions.
    pub fn world_positions(&self) -> &[Vec3] {
        &self.world_positions
    }

    /// Cached world-space face normals.
    pub fn world_normals(&self) -> &[Vec3] {
        &self.world_normals
    }

    /// World-space bounding box of the posed mesh.
    pub fn world_bounds(&self) -> &Aabb {
        &self.world_bounds
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn refresh_world_cache(&mut self) {
        let matrix = self.transform.to_matrix();

        self.world_positions.clear();
        self.world_positions
            .extend(self.positions.iter().map(|&p| matrix.transform_point3(p)));

        // Face normals pick up rotation only; scale is undone by the
        // renormalization.
        let rotation = self.transform.rotation;
        self.world_normals.clear();
        self.world_normals
            .extend(self.normals.iter().map(|&n| (rotation * n).normalize()));

        self.world_bounds = Aabb::from_point_set(&self.world_positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_triangle_normal_from_winding() {
        let tri = unit_triangle();
        // CCW in the XY plane viewed from +Z
        assert!((tri.normal - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_append_triangle_builds_buffers() {
        let mut mesh = TriangleMesh::new(CullMode::None, 0);
        mesh.append_triangle(&unit_triangle());

        assert_eq!(mesh.positions.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.world_positions().len(), 3);
        assert_eq!(mesh.world_normals().len(), 1);
    }

    #[test]
    fn test_calculate_normals() {
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let mesh =
            TriangleMesh::new(CullMode::None, 0).with_geometry(positions, vec![0, 1, 2], None);

        assert_eq!(mesh.normals.len(), 1);
        assert!((mesh.normals[0] - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_pose_mutation_refreshes_world_cache() {
        let mut mesh = TriangleMesh::new(CullMode::None, 0);
        mesh.append_triangle(&unit_triangle());

        mesh.translate(Vec3::new(5.0, 0.0, 0.0));
        assert!((mesh.world_positions()[0] - Vec3::new(5.0, 0.0, 0.0)).length() < 0.001);
        assert!((mesh.world_bounds().min.x - 5.0).abs() < 0.001);

        // Half a turn around Y flips the face normal
        mesh.rotate_y(std::f32::consts::PI);
        assert!((mesh.world_normals()[0] + Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_scale_keeps_unit_normals() {
        let mut mesh = TriangleMesh::new(CullMode::None, 0);
        mesh.append_triangle(&unit_triangle());

        mesh.scale(Vec3::splat(0.05));
        assert!((mesh.world_normals()[0].length() - 1.0).abs() < 0.001);
        assert!((mesh.world_positions()[1] - Vec3::new(0.05, 0.0, 0.0)).length() < 0.001);
    }
}
