//! # Mesh File I/O
//!
//! OBJ meshes for the cylinders and point extraction for the propeller
//! geometry, which may come as OBJ or STL.

mod obj;
mod stl;

pub use obj::{parse_obj, write_obj};
pub use stl::parse_stl_points;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads an OBJ mesh file.
pub fn read_mesh(path: &Path) -> MeshResult<Mesh> {
    let text = fs::read_to_string(path).map_err(|e| MeshError::from(e).in_file(path))?;
    let mesh = parse_obj(&text).map_err(|e| e.in_file(path))?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        polygons = mesh.polygon_count(),
        "read mesh"
    );
    Ok(mesh)
}

/// Writes a mesh as an OBJ file, creating parent directories.
pub fn write_mesh(mesh: &Mesh, path: &Path) -> MeshResult<()> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let text = write_obj(mesh, &name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| MeshError::from(e).in_file(parent))?;
    }
    fs::write(path, text).map_err(|e| MeshError::from(e).in_file(path))?;
    debug!(path = %path.display(), "wrote mesh");
    Ok(())
}

/// Reads the vertex positions of an OBJ or STL file.
///
/// The format is chosen by extension (case-insensitive); anything else
/// fails with [`MeshError::InvalidInput`].
pub fn read_points(path: &Path) -> MeshResult<Vec<DVec3>> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    let points = match extension.as_deref() {
        Some("obj") => read_mesh(path)?.vertices().to_vec(),
        Some("stl") => {
            let bytes = fs::read(path).map_err(|e| MeshError::from(e).in_file(path))?;
            parse_stl_points(&bytes).map_err(|e| e.in_file(path))?
        }
        _ => {
            return Err(MeshError::invalid_input(format!(
                "unsupported geometry format '{}', expected .obj or .stl",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), points = points.len(), "read points");
    Ok(points)
}
