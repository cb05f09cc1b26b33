//! Ray-geometry intersection engine.
//!
//! Closest-hit and any-hit queries over the scene's flat geometry
//! stores: deliberate O(N) brute force per ray, no spatial
//! acceleration. The hit functions write through a `&mut HitRecord`
//! and return whether they hit, so a scene-level query can keep a
//! running closest record.

use lumen_core::geometry::{CullMode, Plane, Sphere, Triangle, TriangleMesh};
use lumen_core::Scene;
use lumen_math::{Ray, Vec3};

use crate::hit::HitRecord;

/// Grazing-incidence rejection threshold for triangle tests.
const TRIANGLE_EPSILON: f32 = 0.01;

/// Analytic sphere test.
///
/// Solves `a t^2 + b t + c = 0`; prefers the smaller root, falls back
/// to the larger one if the smaller lies outside the ray's range.
pub fn hit_sphere(sphere: &Sphere, ray: &Ray, rec: &mut HitRecord) -> bool {
    let to_ray = ray.origin - sphere.origin;

    let a = ray.direction.dot(ray.direction);
    let b = (2.0 * ray.direction).dot(to_ray);
    let c = to_ray.dot(to_ray) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        rec.did_hit = false;
        return false;
    }

    let sqrt_d = discriminant.sqrt();
    let mut t = (-b - sqrt_d) / (2.0 * a);
    if !ray.contains(t) {
        t = (-b + sqrt_d) / (2.0 * a);
        if !ray.contains(t) {
            rec.did_hit = false;
            return false;
        }
    }

    rec.did_hit = true;
    rec.t = t;
    rec.point = ray.at(t);
    rec.normal = (rec.point - sphere.origin).normalize();
    rec.material_index = sphere.material_index;
    true
}

/// Infinite plane test.
///
/// A ray parallel to the plane produces an out-of-range or non-finite
/// `t` which the range check filters; no explicit degeneracy branch.
pub fn hit_plane(plane: &Plane, ray: &Ray, rec: &mut HitRecord) -> bool {
    let to_plane = plane.origin - ray.origin;
    let t = to_plane.dot(plane.normal) / ray.direction.dot(plane.normal);

    if !ray.contains(t) {
        rec.did_hit = false;
        return false;
    }

    rec.did_hit = true;
    rec.t = t;
    rec.point = ray.at(t);
    rec.normal = plane.normal;
    rec.material_index = plane.material_index;
    true
}

/// Cull filter for triangles.
///
/// For any-hit (shadow) queries the sense of the rejection is inverted:
/// a back face that a primary ray would cull must still block a shadow
/// ray arriving from behind, and vice versa.
fn culled(cull_mode: CullMode, dot_nv: f32, any_hit: bool) -> bool {
    match cull_mode {
        CullMode::None => false,
        CullMode::BackFace => {
            if any_hit {
                dot_nv < 0.0
            } else {
                dot_nv > 0.0
            }
        }
        CullMode::FrontFace => {
            if any_hit {
                dot_nv > 0.0
            } else {
                dot_nv < 0.0
            }
        }
    }
}

fn point_inside_edge(point: Vec3, v0: Vec3, v1: Vec3, normal: Vec3) -> bool {
    let edge = v1 - v0;
    let to_point = point - v0;
    normal.dot(edge.cross(to_point)) >= 0.0
}

/// Triangle test: centroid-plane intersection plus three edge-function
/// sign tests (no barycentrics).
///
/// In any-hit mode the record is left untouched.
pub fn hit_triangle(triangle: &Triangle, ray: &Ray, rec: &mut HitRecord, any_hit: bool) -> bool {
    let dot_nv = triangle.normal.dot(ray.direction);
    if dot_nv.abs() < TRIANGLE_EPSILON {
        return false;
    }

    if culled(triangle.cull_mode, dot_nv, any_hit) {
        return false;
    }

    let to_center = triangle.centroid() - ray.origin;
    let t = to_center.dot(triangle.normal) / dot_nv;
    if !ray.contains(t) {
        return false;
    }

    let point = ray.at(t);
    if !point_inside_edge(point, triangle.v0, triangle.v1, triangle.normal)
        || !point_inside_edge(point, triangle.v1, triangle.v2, triangle.normal)
        || !point_inside_edge(point, triangle.v2, triangle.v0, triangle.normal)
    {
        return false;
    }

    if !any_hit {
        rec.did_hit = true;
        rec.t = t;
        rec.point = point;
        rec.normal = triangle.normal;
        rec.material_index = triangle.material_index;
    }

    true
}

/// Mesh test over the cached world-space buffers.
///
/// The per-triangle test knows nothing about ordering, so the running
/// minimum `t` is kept here. Any-hit mode short-circuits on the first
/// accepted triangle.
pub fn hit_mesh(mesh: &TriangleMesh, ray: &Ray, rec: &mut HitRecord, any_hit: bool) -> bool {
    if !mesh.world_bounds().intersects_ray(ray) {
        return false;
    }

    let positions = mesh.world_positions();
    let normals = mesh.world_normals();

    let mut closest_t = ray.t_max;
    let mut found = false;
    let mut current = HitRecord::default();

    for (tri_index, face) in mesh.indices.chunks_exact(3).enumerate() {
        let triangle = Triangle {
            v0: positions[face[0] as usize],
            v1: positions[face[1] as usize],
            v2: positions[face[2] as usize],
            normal: normals[tri_index],
            cull_mode: mesh.cull_mode,
            material_index: mesh.material_index,
        };

        if hit_triangle(&triangle, ray, &mut current, any_hit) {
            if any_hit {
                return true;
            }
            if current.t < closest_t {
                closest_t = current.t;
                *rec = current;
                found = true;
            }
        }
    }

    found
}

/// Closest intersection along a ray among all scene geometry.
///
/// Categories are evaluated spheres, planes, meshes; later hits only
/// replace the running record on strictly smaller `t`.
pub fn closest_hit(scene: &Scene, ray: &Ray) -> HitRecord {
    let mut closest = HitRecord::none_at(ray.t_max);
    let mut current = HitRecord::default();

    for sphere in &scene.spheres {
        if hit_sphere(sphere, ray, &mut current) && current.t < closest.t {
            closest = current;
        }
    }

    for plane in &scene.planes {
        if hit_plane(plane, ray, &mut current) && current.t < closest.t {
            closest = current;
        }
    }

    for mesh in &scene.meshes {
        if hit_mesh(mesh, ray, &mut current, false) && current.t < closest.t {
            closest = current;
        }
    }

    closest
}

/// Occlusion query: true on the first accepted hit in any category.
///
/// Used exclusively for shadow rays.
pub fn any_hit(scene: &Scene, ray: &Ray) -> bool {
    let mut scratch = HitRecord::default();

    for sphere in &scene.spheres {
        if hit_sphere(sphere, ray, &mut scratch) {
            return true;
        }
    }

    for plane in &scene.planes {
        if hit_plane(plane, ray, &mut scratch) {
            return true;
        }
    }

    for mesh in &scene.meshes {
        if hit_mesh(mesh, ray, &mut scratch, true) {
            return true;
        }
    }

    false
}
