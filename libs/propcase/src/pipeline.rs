//! # Case Pipeline
//!
//! Runs every stage of case generation in order:
//!
//! 1. settings validation
//! 2. propeller bounds
//! 3. cylinder extents, anchors and validation
//! 4. propeller copy and cylinder meshes
//! 5. case dictionary and template rendering
//!
//! Each stage finishes its work in memory before writing files, so a
//! failing stage writes nothing. Files written by earlier stages are kept.

use crate::error::{CaseError, CaseResult};
use crate::parameters::{case_dictionary, CaseInputs};
use crate::settings::CaseSettings;
use case_template::{render_tree, DiskFiles};
use config::constants::{PROPELLER_STEM, TRI_SURFACE_DIR};
use cylinder_geometry::{derive_dimensions, BoundingBox, CylinderPlan};
use cylinder_mesh::io::{read_mesh, read_points};
use cylinder_mesh::primitives::reference_cylinder;
use cylinder_mesh::{build_cylinders, outer_length_range, write_cylinders, Mesh};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// Cylinder names, innermost first.
    pub names: Vec<String>,
    /// Propeller bounds.
    pub propeller: BoundingBox,
    /// Validated cylinder layout.
    pub plan: CylinderPlan,
    /// Realized `(min, max)` of the outer cylinder along y.
    pub outer_range: (f64, f64),
    /// Propeller copy inside the case.
    pub propeller_file: PathBuf,
    /// Cylinder meshes, innermost first.
    pub mesh_files: Vec<PathBuf>,
    /// Rendered configuration files.
    pub config_files: Vec<PathBuf>,
}

/// Resolves a settings path against the case directory.
fn case_relative(case_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        case_dir.join(path)
    }
}

/// Bounding box of the propeller geometry file.
pub fn propeller_bounds(path: &Path) -> CaseResult<BoundingBox> {
    let points = read_points(path)?;
    Ok(BoundingBox::from_points(&points)?)
}

/// Sizes, places and validates the cylinders around `propeller`.
///
/// Without an `outside_propeller_point` the location in mesh is derived
/// from the plan, so the radial gap it needs is checked here too.
pub fn plan_cylinders(settings: &CaseSettings, propeller: &BoundingBox) -> CaseResult<CylinderPlan> {
    let extents = derive_dimensions(
        settings.scales.as_ref(),
        settings.dimensions.as_ref(),
        Some(propeller.diameter()),
    )?;
    let plan = CylinderPlan::new(&extents, &settings.take_available_y, propeller)?;
    if settings.outside_propeller_point.is_none() {
        plan.outside_point()?;
    }
    Ok(plan)
}

fn reference_mesh(settings: &CaseSettings, case_dir: &Path) -> CaseResult<Mesh> {
    Ok(match &settings.reference_mesh {
        Some(path) => read_mesh(&case_relative(case_dir, path))?,
        None => reference_cylinder(settings.reference_segments)?,
    })
}

/// Copies the propeller into the case's surface directory as
/// `propeller.<ext>`.
fn copy_propeller(propeller: &Path, tri_surface: &Path) -> CaseResult<PathBuf> {
    let extension = propeller
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let target = tri_surface.join(format!("{PROPELLER_STEM}.{extension}"));

    fs::create_dir_all(tri_surface).map_err(|e| CaseError::io(tri_surface, e))?;
    let already_there = match (fs::canonicalize(propeller), fs::canonicalize(&target)) {
        (Ok(source), Ok(existing)) => source == existing,
        _ => false,
    };
    if !already_there {
        fs::copy(propeller, &target).map_err(|e| CaseError::io(propeller, e))?;
    }
    Ok(target)
}

/// Generates the case in `case_dir` for the propeller geometry at
/// `propeller`.
#[instrument(skip_all, fields(case = %case_dir.display(), propeller = %propeller.display()))]
pub fn generate_case(
    case_dir: &Path,
    propeller: &Path,
    settings: &CaseSettings,
) -> CaseResult<CaseReport> {
    settings.validate()?;
    let names = settings.names();

    let bounds = propeller_bounds(propeller)?;
    info!(
        diameter = bounds.diameter(),
        min = %bounds.min,
        max = %bounds.max,
        "propeller bounds"
    );

    let plan = plan_cylinders(settings, &bounds)?;
    let reference = reference_mesh(settings, case_dir)?;
    let cylinders = build_cylinders(&reference, &plan, &names)?;
    let outer_range = outer_length_range(&cylinders)?;

    let tri_surface = case_dir.join(TRI_SURFACE_DIR);
    let propeller_file = copy_propeller(propeller, &tri_surface)?;
    let mesh_files = write_cylinders(&cylinders, &tri_surface)?;
    info!(
        cylinders = mesh_files.len(),
        low = outer_range.0,
        high = outer_range.1,
        "wrote cylinder meshes"
    );

    let dict = case_dictionary(CaseInputs {
        settings,
        names: &names,
        plan: &plan,
        outer_range,
    })?;
    let template_dir = settings
        .template_dir
        .as_deref()
        .map_or_else(|| case_dir.to_path_buf(), |dir| case_relative(case_dir, dir));
    let config_files = render_tree(
        &dict,
        &mut DiskFiles,
        &template_dir,
        case_dir,
        &settings.templates,
        &settings.block_rules()?,
    )?;

    Ok(CaseReport {
        names,
        propeller: bounds,
        plan,
        outer_range,
        propeller_file,
        mesh_files,
        config_files,
    })
}
