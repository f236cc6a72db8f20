//! # Wavefront OBJ
//!
//! Reads and writes the subset of OBJ used for solver surface meshes:
//! `v` records, `f` records and `g`/`o` region starts. Every other record
//! (normals, texture coordinates, materials, smoothing groups) is ignored on
//! read and never written.

use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, Region};
use glam::DVec3;
use std::fmt::Write as _;

/// Parses OBJ text into a mesh.
///
/// Face indices may use the `v`, `v/vt`, `v//vn` or `v/vt/vn` forms and
/// may be negative (relative to the last vertex read so far).
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::io::parse_obj;
///
/// let mesh = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\ng tip\nf 1 2 -1\n").unwrap();
/// assert_eq!(mesh.polygons()[0], vec![0, 1, 2]);
/// assert_eq!(mesh.regions()[0].name, "tip");
/// ```
pub fn parse_obj(text: &str) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    let mut regions = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        let mut fields = line.split_whitespace();
        let Some(keyword) = fields.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let coords = fields
                    .take(3)
                    .map(|field| {
                        field.parse::<f64>().map_err(|_| {
                            MeshError::parse(line_number, format!("invalid coordinate '{field}'"))
                        })
                    })
                    .collect::<MeshResult<Vec<_>>>()?;
                let &[x, y, z] = coords.as_slice() else {
                    return Err(MeshError::parse(
                        line_number,
                        "vertex needs three coordinates",
                    ));
                };
                mesh.add_vertex(DVec3::new(x, y, z));
            }
            "f" => {
                let vertex_count = mesh.vertex_count();
                let polygon = fields
                    .map(|field| resolve_index(field, vertex_count, line_number))
                    .collect::<MeshResult<Vec<_>>>()?;
                if polygon.len() < 3 {
                    return Err(MeshError::parse(
                        line_number,
                        format!("face has {} vertices, need at least 3", polygon.len()),
                    ));
                }
                mesh.add_polygon(polygon);
            }
            "g" | "o" => {
                let name = fields.collect::<Vec<_>>().join(" ");
                let start = mesh.polygon_count();
                // a group without faces is superseded by the next one
                if regions.last().is_some_and(|(_, last_start)| *last_start == start) {
                    regions.pop();
                }
                regions.push((name, start));
            }
            _ => {}
        }
    }

    if let Some((_, first_start)) = regions.first() {
        if *first_start != 0 {
            regions.insert(0, (String::new(), 0));
        }
    }
    mesh.set_regions(
        regions
            .into_iter()
            .map(|(name, start)| Region::new(name, start))
            .collect(),
    )?;
    mesh.validate()?;
    Ok(mesh)
}

fn resolve_index(field: &str, vertex_count: usize, line: usize) -> MeshResult<u32> {
    let token = field.split('/').next().unwrap_or_default();
    let value: i64 = token
        .parse()
        .map_err(|_| MeshError::parse(line, format!("invalid face index '{field}'")))?;

    let resolved = match value {
        0 => None,
        v if v > 0 => Some(v - 1),
        v => Some(vertex_count as i64 + v),
    };

    match resolved {
        Some(i) if i >= 0 && (i as usize) < vertex_count => Ok(i as u32),
        _ => Err(MeshError::parse(
            line,
            format!("face index {value} out of range, {vertex_count} vertices defined"),
        )),
    }
}

/// Formats a mesh as OBJ text.
///
/// Regions become `g` records; a mesh without regions is written as a
/// single ungrouped polygon list. Indices are written 1-based.
pub fn write_obj(mesh: &Mesh, header: &str) -> String {
    let mut out = String::new();
    for line in header.lines() {
        let _ = writeln!(out, "# {line}");
    }

    for v in mesh.vertices() {
        let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
    }

    let write_faces = |out: &mut String, polygons: &[Vec<u32>]| {
        for polygon in polygons {
            out.push('f');
            for index in polygon {
                let _ = write!(out, " {}", index + 1);
            }
            out.push('\n');
        }
    };

    let ranges = mesh.region_ranges();
    if ranges.is_empty() {
        write_faces(&mut out, mesh.polygons());
    } else {
        for (name, range) in ranges {
            let _ = writeln!(out, "g {name}");
            write_faces(&mut out, &mesh.polygons()[range]);
        }
    }
    out
}
