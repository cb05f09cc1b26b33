//! OBJ mesh loading.
//!
//! Thin wrapper around `tobj`: positions and triangle indices only,
//! merged across the file's models. Face normals are derived by the
//! mesh afterwards, so files without normals load fine.

use std::path::Path;

use lumen_math::Vec3;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("failed to load OBJ: {0}")]
    Load(#[from] tobj::LoadError),

    #[error("OBJ file contains no triangles")]
    NoGeometry,
}

pub type ObjResult<T> = Result<T, ObjError>;

/// Load an OBJ file into flat position and index buffers.
pub fn load_obj(path: impl AsRef<Path>) -> ObjResult<(Vec<Vec3>, Vec<u32>)> {
    let path = path.as_ref();
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let mut positions = Vec::new();
    let mut indices = Vec::new();

    for model in &models {
        let mesh = &model.mesh;
        let base = positions.len() as u32;

        positions.extend(
            mesh.positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        );
        indices.extend(mesh.indices.iter().map(|&i| base + i));
    }

    if indices.is_empty() {
        return Err(ObjError::NoGeometry);
    }

    log::debug!(
        "loaded {}: {} vertices, {} triangles",
        path.display(),
        positions.len(),
        indices.len() / 3
    );

    Ok((positions, indices))
}
