//! # STL Points
//!
//! Extracts the vertex positions of an STL file, binary or ASCII.
//!
//! Binary layout:
//! - 80-byte header
//! - u32 triangle count (little-endian)
//! - per triangle: 3×f32 normal, 3×(3×f32 vertex), u16 attribute = 50 bytes

use crate::error::{MeshError, MeshResult};
use glam::DVec3;

const HEADER_LEN: usize = 80;
const TRIANGLE_LEN: usize = 50;

/// Reads every vertex of an STL file.
///
/// The content is treated as binary when its length matches the triangle
/// count in the header exactly, and as ASCII otherwise.
pub fn parse_stl_points(bytes: &[u8]) -> MeshResult<Vec<DVec3>> {
    if let Some(count) = binary_triangle_count(bytes) {
        return Ok(parse_binary(&bytes[HEADER_LEN + 4..], count));
    }

    let text = std::str::from_utf8(bytes)
        .map_err(|_| MeshError::invalid_input("STL content is neither binary nor ASCII"))?;
    parse_ascii(text)
}

fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    let count_bytes: [u8; 4] = bytes.get(HEADER_LEN..HEADER_LEN + 4)?.try_into().ok()?;
    let count = u32::from_le_bytes(count_bytes) as usize;
    (bytes.len() == HEADER_LEN + 4 + count * TRIANGLE_LEN).then_some(count)
}

fn parse_binary(body: &[u8], count: usize) -> Vec<DVec3> {
    let read_f32 = |chunk: &[u8], offset: usize| {
        f32::from_le_bytes([
            chunk[offset],
            chunk[offset + 1],
            chunk[offset + 2],
            chunk[offset + 3],
        ]) as f64
    };

    let mut points = Vec::with_capacity(count * 3);
    for triangle in body.chunks_exact(TRIANGLE_LEN) {
        // skip the normal
        for corner in 0..3 {
            let base = 12 + corner * 12;
            points.push(DVec3::new(
                read_f32(triangle, base),
                read_f32(triangle, base + 4),
                read_f32(triangle, base + 8),
            ));
        }
    }
    points
}

fn parse_ascii(text: &str) -> MeshResult<Vec<DVec3>> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace();
        if fields.next() != Some("vertex") {
            continue;
        }
        let coords = fields
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    MeshError::parse(index + 1, format!("invalid coordinate '{field}'"))
                })
            })
            .collect::<MeshResult<Vec<_>>>()?;
        let &[x, y, z] = coords.as_slice() else {
            return Err(MeshError::parse(index + 1, "vertex needs three coordinates"));
        };
        points.push(DVec3::new(x, y, z));
    }
    Ok(points)
}
