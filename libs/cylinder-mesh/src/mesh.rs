//! # Mesh Data Structure
//!
//! Polygon mesh with vertices, polygons and named regions.

use crate::error::{MeshError, MeshResult};
use glam::DVec3;
use std::ops::Range;

/// A named, contiguous run of polygons.
///
/// The run starts at `start` and ends where the next region starts (or at
/// the end of the polygon list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Region name, used as a boundary patch name by the solver.
    pub name: String,
    /// Index of the first polygon of the region.
    pub start: usize,
}

impl Region {
    /// Creates a region starting at `start`.
    pub fn new(name: impl Into<String>, start: usize) -> Self {
        Self {
            name: name.into(),
            start,
        }
    }
}

/// A polygon mesh with vertices, polygon indices and regions.
///
/// Indices are 0-based in memory; file formats convert at the boundary.
///
/// # Example
///
/// ```rust
/// use cylinder_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.dimension(), DVec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Polygon vertex indices
    polygons: Vec<Vec<u32>>,
    /// Region table, ordered by start
    regions: Vec<Region>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, polygon_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            polygons: Vec::with_capacity(polygon_count),
            regions: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a polygon by vertex indices.
    pub fn add_polygon(&mut self, indices: Vec<u32>) {
        self.polygons.push(indices);
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.polygons.push(vec![v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the polygons.
    #[inline]
    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    /// Returns the region table.
    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Replaces the polygon list, dropping the region table.
    pub fn set_polygons(&mut self, polygons: Vec<Vec<u32>>) {
        self.polygons = polygons;
        self.regions.clear();
    }

    /// Replaces the region table.
    ///
    /// Regions must start at polygon 0 and have non-decreasing starts within
    /// the polygon list, so that they partition it exactly.
    pub fn set_regions(&mut self, regions: Vec<Region>) -> MeshResult<()> {
        check_regions(&regions, self.polygons.len())?;
        self.regions = regions;
        Ok(())
    }

    /// Polygon index ranges of every region, in order.
    pub fn region_ranges(&self) -> Vec<(&str, Range<usize>)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, region)| {
                let end = self
                    .regions
                    .get(i + 1)
                    .map_or(self.polygons.len(), |next| next.start);
                (region.name.as_str(), region.start..end)
            })
            .collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Size of the bounding box along every axis.
    pub fn dimension(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        max - min
    }

    /// `(min, max)` of the vertices along one axis (0 = x, 1 = y, 2 = z).
    pub fn boundary(&self, axis: usize) -> (f64, f64) {
        let (min, max) = self.bounding_box();
        (min[axis], max[axis])
    }

    /// Scales all vertices about the origin, per axis.
    pub fn scale(&mut self, factors: DVec3) {
        for v in &mut self.vertices {
            *v *= factors;
        }
    }

    /// Translates the mesh by a vector.
    ///
    /// # Arguments
    ///
    /// * `offset` - Translation vector
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Every polygon has at least three vertices
    /// - All polygon indices are valid and not repeated within a polygon
    /// - The region table partitions the polygon list
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len() as u32;

        for (index, polygon) in self.polygons.iter().enumerate() {
            if polygon.len() < 3 {
                return Err(MeshError::invalid_topology(format!(
                    "polygon {index} has {} vertices",
                    polygon.len()
                )));
            }
            if let Some(bad) = polygon.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "polygon {index} references vertex {bad}, mesh has {vertex_count}"
                )));
            }
            for (k, i) in polygon.iter().enumerate() {
                if polygon[k + 1..].contains(i) {
                    return Err(MeshError::invalid_topology(format!(
                        "polygon {index} repeats vertex {i}"
                    )));
                }
            }
        }

        check_regions(&self.regions, self.polygons.len())
    }
}

fn check_regions(regions: &[Region], polygon_count: usize) -> MeshResult<()> {
    if let Some(first) = regions.first() {
        if first.start != 0 {
            return Err(MeshError::invalid_topology(format!(
                "first region '{}' starts at polygon {}, expected 0",
                first.name, first.start
            )));
        }
    }
    for pair in regions.windows(2) {
        if pair[1].start < pair[0].start {
            return Err(MeshError::invalid_topology(format!(
                "region '{}' starts before region '{}'",
                pair[1].name, pair[0].name
            )));
        }
    }
    if let Some(last) = regions.last() {
        if last.start > polygon_count {
            return Err(MeshError::invalid_topology(format!(
                "region '{}' starts at polygon {}, mesh has {polygon_count}",
                last.name, last.start
            )));
        }
    }
    Ok(())
}
