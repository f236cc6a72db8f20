//! # Cylinder Mesh Builder
//!
//! Turns a validated [`CylinderPlan`] into one tagged surface mesh per
//! cylinder.
//!
//! Every cylinder is a fresh transformed copy of a shared reference mesh,
//! so the cylinders are built in parallel and the reference is never
//! touched. All meshes are built before the first file is written.

use crate::error::{MeshError, MeshResult};
use crate::io::write_mesh;
use crate::mesh::{Mesh, Region};
use config::constants::{
    GEOMETRY_TOLERANCE, INLET_SUFFIX, LENGTH_AXIS, MESH_EXTENSION, OUTLET_SUFFIX, WALL_SUFFIX,
};
use cylinder_geometry::CylinderPlan;
use glam::DVec3;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Position of a cylinder in the nesting, which fixes its anchor
/// convention and its region layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderRole {
    /// Starts at its anchor along the length axis; one region.
    Inner,
    /// Ends at its anchor along the length axis; outlet, inlet and wall
    /// regions.
    Outer,
}

/// A built cylinder, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderMesh {
    /// Cylinder name, also the file stem.
    pub name: String,
    /// Tagged surface mesh.
    pub mesh: Mesh,
    /// Inner or outer.
    pub role: CylinderRole,
}

impl CylinderMesh {
    /// File name of the mesh artifact.
    pub fn file_name(&self) -> String {
        format!("{}.{MESH_EXTENSION}", self.name)
    }
}

/// Scales and moves a copy of `reference` to the given extent and anchor.
///
/// The copy is centred on the anchor in x and z. Along the length axis it
/// starts at the anchor for [`CylinderRole::Inner`] and ends at it for
/// [`CylinderRole::Outer`].
pub fn place_cylinder(
    reference: &Mesh,
    extent: DVec3,
    anchor: DVec3,
    role: CylinderRole,
) -> MeshResult<Mesh> {
    let reference_extent = reference.dimension();
    if !reference_extent.cmpgt(DVec3::ZERO).all() {
        return Err(MeshError::degenerate(format!(
            "reference mesh has extent {reference_extent}, need a positive size on every axis"
        )));
    }

    let mut mesh = reference.clone();
    mesh.scale(extent / reference_extent);

    let (min, max) = mesh.bounding_box();
    let middle = (min + max) / 2.0;
    let length_edge = match role {
        CylinderRole::Inner => min.y,
        CylinderRole::Outer => max.y,
    };
    mesh.translate(DVec3::new(
        anchor.x - middle.x,
        anchor.y - length_edge,
        anchor.z - middle.z,
    ));
    Ok(mesh)
}

/// Assigns the named regions of a placed cylinder.
///
/// An inner cylinder gets a single region called `name`. For the outer
/// cylinder, polygons lying on the maximum length plane form
/// `<name>Outlet`, those on the minimum plane form `<name>Inlet` and the
/// remaining ones form `<name>Wall`. The polygon list is reordered into
/// these three blocks, in that order.
pub fn tag_regions(mesh: &mut Mesh, name: &str, role: CylinderRole) -> MeshResult<()> {
    if role == CylinderRole::Inner {
        return mesh.set_regions(vec![Region::new(name, 0)]);
    }

    let (low, high) = mesh.boundary(LENGTH_AXIS);
    let on_plane = |polygon: &[u32], plane: f64| {
        polygon
            .iter()
            .all(|&i| (mesh.vertices()[i as usize][LENGTH_AXIS] - plane).abs() <= GEOMETRY_TOLERANCE)
    };

    let mut outlet = Vec::new();
    let mut inlet = Vec::new();
    let mut wall = Vec::new();
    for polygon in mesh.polygons() {
        if on_plane(polygon, high) {
            outlet.push(polygon.clone());
        } else if on_plane(polygon, low) {
            inlet.push(polygon.clone());
        } else {
            wall.push(polygon.clone());
        }
    }

    for (block, suffix) in [(&outlet, OUTLET_SUFFIX), (&inlet, INLET_SUFFIX)] {
        if block.is_empty() {
            return Err(MeshError::degenerate(format!(
                "outer cylinder '{name}' has no polygons for region '{name}{suffix}'"
            )));
        }
    }

    let regions = vec![
        Region::new(format!("{name}{OUTLET_SUFFIX}"), 0),
        Region::new(format!("{name}{INLET_SUFFIX}"), outlet.len()),
        Region::new(format!("{name}{WALL_SUFFIX}"), outlet.len() + inlet.len()),
    ];
    let mut polygons = outlet;
    polygons.append(&mut inlet);
    polygons.append(&mut wall);

    mesh.set_polygons(polygons);
    mesh.set_regions(regions)
}

/// Builds every cylinder of `plan`, innermost first.
///
/// `names` must hold one name per cylinder.
pub fn build_cylinders(
    reference: &Mesh,
    plan: &CylinderPlan,
    names: &[String],
) -> MeshResult<Vec<CylinderMesh>> {
    if names.len() != plan.len() {
        return Err(MeshError::invalid_input(format!(
            "unexpected number of cylinders: {} names for {} cylinders",
            names.len(),
            plan.len()
        )));
    }

    (0..plan.len())
        .into_par_iter()
        .map(|index| {
            let role = if plan.is_outer(index) {
                CylinderRole::Outer
            } else {
                CylinderRole::Inner
            };
            let name = &names[index];
            let mut mesh =
                place_cylinder(reference, plan.extents()[index], plan.anchors()[index], role)?;
            tag_regions(&mut mesh, name, role)?;
            debug!(index, name = %name, polygons = mesh.polygon_count(), "built cylinder");
            Ok(CylinderMesh {
                name: name.clone(),
                mesh,
                role,
            })
        })
        .collect()
}

/// Realized `(min, max)` of the outer cylinder along the length axis.
pub fn outer_length_range(cylinders: &[CylinderMesh]) -> MeshResult<(f64, f64)> {
    cylinders
        .iter()
        .find(|cylinder| cylinder.role == CylinderRole::Outer)
        .map(|cylinder| cylinder.mesh.boundary(LENGTH_AXIS))
        .ok_or_else(|| MeshError::invalid_input("no outer cylinder was built"))
}

/// Writes every cylinder as `<dir>/<name>.obj`, returning the paths in
/// order.
pub fn write_cylinders(cylinders: &[CylinderMesh], dir: &Path) -> MeshResult<Vec<PathBuf>> {
    cylinders
        .iter()
        .map(|cylinder| {
            let path = dir.join(cylinder.file_name());
            write_mesh(&cylinder.mesh, &path)?;
            Ok(path)
        })
        .collect()
}

/// Builds and writes all cylinder meshes, returning the realized length
/// range of the outer cylinder.
#[instrument(skip_all, fields(cylinders = plan.len(), dir = %dir.display()))]
pub fn generate_cylinder_meshes(
    reference: &Mesh,
    plan: &CylinderPlan,
    names: &[String],
    dir: &Path,
) -> MeshResult<(f64, f64)> {
    let cylinders = build_cylinders(reference, plan, names)?;
    let (low, high) = outer_length_range(&cylinders)?;
    write_cylinders(&cylinders, dir)?;
    info!(low, high, "cylinder meshes written");
    Ok((low, high))
}
