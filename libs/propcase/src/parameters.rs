//! # Case Parameters
//!
//! Builds the dictionary every solver template is rendered against.
//!
//! ## Entries
//!
//! | name | kind |
//! |---|---|
//! | `decompose_nx`, `decompose_ny`, `decompose_nz` | literal |
//! | `minx` .. `maxz` | literal, background mesh bounds |
//! | `cylinder_names`, `outer_cylinder_name` | literal |
//! | `refinement_values`, `refinement_regions_mode`, `refinement_regions_distance` | literal |
//! | `outer_min_surf_ref` .. `propeller_max_surf_ref` | literal |
//! | `cylinders_intersecting_propeller` | literal |
//! | `outside_propeller_point` when set, else `derived_location_in_mesh` | literal |
//! | `cylinder_names_noouter` | computed |
//! | `location_in_mesh` | computed |
//! | `searchable_surface_list`, `refinement_regions_list` | repeated templates |
//!
//! Entries of the settings' `[parameters]` table are inserted last and
//! replace entries of the same name.

use crate::error::CaseResult;
use crate::settings::CaseSettings;
use case_template::{LazyDict, Repeat, TemplateError, Value};
use config::constants::BOUNDING_BOX_MARGIN;
use cylinder_geometry::CylinderPlan;
use glam::DVec3;
use tracing::debug;

/// Geometry section of a snappyHexMesh dictionary, one block per inner
/// cylinder.
pub const SEARCHABLE_SURFACE_TEMPLATE: &str = r#"    @cylinder_names_noouter
    {
        type        triSurfaceMesh;
        file        "@cylinder_names_noouter.obj";
        regions
        {
            @cylinder_names_noouter
            {
                 name       @cylinder_names_noouter;
            }
        }
    }"#;

/// Refinement regions of a snappyHexMesh dictionary, one block per inner
/// cylinder.
pub const REFINEMENT_REGION_TEMPLATE: &str = "        @cylinder_names_noouter
        {
            mode        @refinement_regions_mode;
            levels      ((@refinement_regions_distance @refinement_values));
        }";

/// Everything the case dictionary is computed from.
#[derive(Debug, Clone, Copy)]
pub struct CaseInputs<'a> {
    pub settings: &'a CaseSettings,
    pub names: &'a [String],
    pub plan: &'a CylinderPlan,
    /// Realized `(min, max)` of the outer cylinder mesh along y.
    pub outer_range: (f64, f64),
}

/// Background mesh bounds: the outer cylinder's square footprint plus a
/// radial margin, and its realized length range.
pub fn background_bounds(plan: &CylinderPlan, outer_range: (f64, f64)) -> (DVec3, DVec3) {
    let outer = plan.outer_index();
    let center = plan.anchors()[outer];
    let half = plan.extents()[outer] / 2.0 + BOUNDING_BOX_MARGIN;
    (
        DVec3::new(center.x - half.x, outer_range.0, center.z - half.z),
        DVec3::new(center.x + half.x, outer_range.1, center.z + half.z),
    )
}

/// Builds a fresh case dictionary.
pub fn case_dictionary(inputs: CaseInputs<'_>) -> CaseResult<LazyDict> {
    let CaseInputs {
        settings,
        names,
        plan,
        outer_range,
    } = inputs;
    let mut dict = LazyDict::new();

    let [nx, ny, nz] = settings.decomposition;
    dict.extend([("decompose_nx", nx), ("decompose_ny", ny), ("decompose_nz", nz)]);

    let (min, max) = background_bounds(plan, outer_range);
    dict.extend([
        ("minx", min.x),
        ("miny", min.y),
        ("minz", min.z),
        ("maxx", max.x),
        ("maxy", max.y),
        ("maxz", max.z),
    ]);

    dict.insert("cylinder_names", names.to_vec());
    if let Some(outer) = names.last() {
        dict.insert("outer_cylinder_name", outer.as_str());
    }
    dict.insert("refinement_values", settings.refinement_values.clone());
    dict.insert("refinement_regions_mode", settings.refinement_regions_mode.as_str());
    dict.insert(
        "refinement_regions_distance",
        settings.refinement_regions_distance.as_str(),
    );
    let [outer_min, outer_max] = settings.outer_surface_refinement;
    let [propeller_min, propeller_max] = settings.propeller_surface_refinement;
    dict.extend([
        ("outer_min_surf_ref", outer_min),
        ("outer_max_surf_ref", outer_max),
        ("propeller_min_surf_ref", propeller_min),
        ("propeller_max_surf_ref", propeller_max),
    ]);
    dict.insert(
        "cylinders_intersecting_propeller",
        settings.intersecting_cylinders(),
    );

    match settings.outside_propeller_point {
        Some(point) => dict.insert("outside_propeller_point", DVec3::from_array(point)),
        None => dict.insert("derived_location_in_mesh", plan.outside_point()?),
    }

    register_computed(&mut dict)?;
    dict.extend(settings.extra_parameters()?);

    debug!(entries = dict.len(), "built case dictionary");
    Ok(dict)
}

/// Computed entries and repeated templates shared by every case.
pub fn register_computed(dict: &mut LazyDict) -> CaseResult<()> {
    dict.insert_computed("cylinder_names_noouter", ["cylinder_names"], |s| {
        let names = s.list("cylinder_names")?;
        let (_, inner) = names.split_last().ok_or_else(|| {
            TemplateError::invalid_input("'cylinder_names' must name the outer cylinder")
        })?;
        Ok(Value::List(inner.to_vec()))
    })?;

    dict.insert_computed(
        "location_in_mesh",
        ["outside_propeller_point", "derived_location_in_mesh"],
        |s| {
            if s.contains("outside_propeller_point") {
                s.get("outside_propeller_point").cloned()
            } else {
                s.get("derived_location_in_mesh").cloned()
            }
        },
    )?;

    dict.insert_template(
        "searchable_surface_list",
        SEARCHABLE_SURFACE_TEMPLATE,
        Repeat::Broadcast,
    )?;
    dict.insert_template(
        "refinement_regions_list",
        REFINEMENT_REGION_TEMPLATE,
        Repeat::Broadcast,
    )?;
    Ok(())
}
