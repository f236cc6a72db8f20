//! # Reference Cylinder
//!
//! Unit cylinder along the Y axis, used as the shape every refinement
//! cylinder is scaled from.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder of diameter 1 and length 1 centered at the origin,
/// with its axis along Y.
///
/// The lateral surface is split into two triangles per segment and both
/// caps are planar triangle fans, so every cap polygon lies exactly on
/// `y = ±0.5`.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::primitives::reference_cylinder;
/// use glam::DVec3;
///
/// let mesh = reference_cylinder(32).unwrap();
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(min.y, -0.5);
/// assert_eq!(max.y, 0.5);
/// ```
pub fn reference_cylinder(segments: u32) -> MeshResult<Mesh> {
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {segments}"
        )));
    }

    let radius = 0.5;
    let (y_bottom, y_top) = (-0.5, 0.5);
    let segment_count = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * segment_count, 4 * segment_count - 4);

    let mut ring = |y: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.sin(), y, radius * theta.cos()))
            })
            .collect()
    };
    let bottom = ring(y_bottom);
    let top = ring(y_top);

    for j in 0..segment_count {
        let next = (j + 1) % segment_count;
        let (b0, b1, t0, t1) = (bottom[j], bottom[next], top[j], top[next]);
        mesh.add_triangle(b0, t1, b1);
        mesh.add_triangle(b0, t0, t1);
    }

    // caps, wound so that normals point away from the body
    for j in 1..segment_count - 1 {
        mesh.add_triangle(bottom[0], bottom[j], bottom[j + 1]);
    }
    for j in 1..segment_count - 1 {
        mesh.add_triangle(top[0], top[j + 1], top[j]);
    }

    Ok(mesh)
}
