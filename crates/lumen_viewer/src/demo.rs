//! Built-in demo scenes.

use std::path::Path;

use anyhow::Context;
use lumen_core::{load_obj, Camera, CullMode, Material, Scene, Triangle, TriangleMesh};
use lumen_math::Vec3;

const LAMBERT_GRAY_BLUE: Material = Material::Lambert {
    albedo: Vec3::new(0.49, 0.57, 0.57),
    reflectance: 1.0,
};
const LAMBERT_WHITE: Material = Material::Lambert {
    albedo: Vec3::ONE,
    reflectance: 1.0,
};

/// Five-sided room: back wall, floor, ceiling, right and left walls.
fn add_room(scene: &mut Scene, material: usize) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), material);
    scene.add_plane(Vec3::ZERO, Vec3::Y, material);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, material);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, material);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material);
}

fn add_demo_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Vec3::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Vec3::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Vec3::new(0.34, 0.47, 0.68));
}

/// Reference scene: a grid of Cook-Torrance spheres sweeping metalness
/// and roughness, plus three triangles showing each cull mode.
pub fn reference_scene() -> Scene {
    let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0));

    let silver = Vec3::new(0.972, 0.960, 0.915);
    let gray = Vec3::new(0.75, 0.75, 0.75);
    let ct = |albedo, metalness, roughness| Material::CookTorrance {
        albedo,
        metalness,
        roughness,
    };
    let rough_metal = scene.add_material(ct(silver, 1.0, 1.0));
    let medium_metal = scene.add_material(ct(silver, 1.0, 0.6));
    let smooth_metal = scene.add_material(ct(silver, 1.0, 0.1));
    let rough_plastic = scene.add_material(ct(gray, 0.0, 1.0));
    let medium_plastic = scene.add_material(ct(gray, 0.0, 0.6));
    let smooth_plastic = scene.add_material(ct(gray, 0.0, 0.1));

    let gray_blue = scene.add_material(LAMBERT_GRAY_BLUE);
    let white = scene.add_material(LAMBERT_WHITE);

    add_room(&mut scene, gray_blue);

    scene.add_sphere(Vec3::new(-1.75, 1.0, 0.0), 0.75, rough_metal);
    scene.add_sphere(Vec3::new(0.0, 1.0, 0.0), 0.75, medium_metal);
    scene.add_sphere(Vec3::new(1.75, 1.0, 0.0), 0.75, smooth_metal);
    scene.add_sphere(Vec3::new(-1.75, 3.0, 0.0), 0.75, rough_plastic);
    scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 0.75, medium_plastic);
    scene.add_sphere(Vec3::new(1.75, 3.0, 0.0), 0.75, smooth_plastic);

    // Clockwise winding
    let base_triangle = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    );
    let cull_modes = [CullMode::BackFace, CullMode::FrontFace, CullMode::None];
    for (i, cull_mode) in cull_modes.into_iter().enumerate() {
        let mesh = scene.add_mesh(cull_mode, white);
        scene.meshes[mesh].append_triangle(&base_triangle);
        scene.meshes[mesh].translate(Vec3::new(-1.75 + 1.75 * i as f32, 4.5, 0.0));
    }

    add_demo_lights(&mut scene);
    scene
}

/// OBJ scene: the model loaded into a back-face-culled mesh inside the
/// same room and lighting rig as the reference scene.
pub fn obj_scene(path: &Path) -> anyhow::Result<Scene> {
    let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0));

    let gray_blue = scene.add_material(LAMBERT_GRAY_BLUE);
    let white = scene.add_material(LAMBERT_WHITE);

    add_room(&mut scene, gray_blue);

    let (positions, indices) =
        load_obj(path).with_context(|| format!("loading {}", path.display()))?;
    let mesh = TriangleMesh::new(CullMode::BackFace, white).with_geometry(positions, indices, None);
    log::info!(
        "loaded {} with {} triangles",
        path.display(),
        mesh.triangle_count()
    );
    scene.meshes.push(mesh);

    add_demo_lights(&mut scene);
    Ok(scene)
}
