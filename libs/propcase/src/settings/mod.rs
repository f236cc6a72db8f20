//! # Case Settings
//!
//! Per-case configuration, read from a TOML file. Every field has a
//! default, so an empty file describes the standard four-cylinder case.
//!
//! ## Example
//!
//! ```toml
//! scales = [[1.1, "auto", 1.1], [2, "auto", 2], [5, 9, 5]]
//! take_available_y = [0.0001, 0.8]
//! refinement_values = [4, 3]
//! decomposition = [2, 4, 2]
//!
//! [[blocks]]
//! marker = "refinementRegions"
//! delimiter = "{"
//! replacement = "@refinement_regions_list"
//!
//! [parameters]
//! end_time = 0.5
//! ```

use crate::error::{CaseError, CaseResult};
use case_template::{BlockRule, Delimiter, Value};
use config::constants::{
    DEFAULT_DECOMPOSITION, DEFAULT_OUTER_SURFACE_REFINEMENT, DEFAULT_PROPELLER_SURFACE_REFINEMENT,
    DEFAULT_REFINEMENT_DISTANCE, DEFAULT_REFINEMENT_MODE, DEFAULT_TEMPLATE_FILES,
    INNER_CYLINDER_PREFIX, OUTER_CYLINDER_NAME, REFERENCE_CYLINDER_SEGMENTS,
};
use cylinder_geometry::{Extent, ExtentArray};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A structural block replaced in every rendered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSettings {
    /// Text preceding the block.
    pub marker: String,
    /// Opening delimiter: `(`, `[` or `{`.
    pub delimiter: char,
    /// New block body; may contain tokens.
    pub replacement: String,
}

/// Settings of one generated case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseSettings {
    /// Cylinder names, innermost first. Defaults to `cylinder0..` followed
    /// by `outerCylinder`.
    pub cylinder_names: Option<Vec<String>>,
    /// Per-cylinder scale factors, relative to the propeller diameter.
    pub scales: Option<ExtentArray>,
    /// Per-cylinder absolute extents; excludes `scales`.
    pub dimensions: Option<ExtentArray>,
    /// Fraction of the remaining length taken by each inner cylinder.
    pub take_available_y: Vec<f64>,
    /// Refinement level of each inner cylinder region.
    pub refinement_values: Vec<i64>,
    /// Parallel decomposition along x, y and z.
    pub decomposition: [u32; 3],
    /// `(min max)` surface refinement of the outer cylinder.
    pub outer_surface_refinement: [u32; 2],
    /// `(min max)` surface refinement of the propeller.
    pub propeller_surface_refinement: [u32; 2],
    pub refinement_regions_mode: String,
    pub refinement_regions_distance: String,
    /// Overrides the computed location-in-mesh point.
    pub outside_propeller_point: Option<[f64; 3]>,
    /// Cylinders reported as cut by the propeller. Defaults to the
    /// innermost one.
    pub cylinders_intersecting_propeller: Option<Vec<String>>,
    /// OBJ mesh every cylinder is scaled from. A generated unit cylinder
    /// when absent.
    pub reference_mesh: Option<PathBuf>,
    /// Segments of the generated unit cylinder.
    pub reference_segments: u32,
    /// Directory holding the templates. Defaults to the case directory.
    pub template_dir: Option<PathBuf>,
    /// Template files, relative to the template directory.
    pub templates: Vec<PathBuf>,
    pub blocks: Vec<BlockSettings>,
    /// Extra literal template values.
    pub parameters: toml::Table,
}

impl Default for CaseSettings {
    fn default() -> Self {
        let auto = Extent::DeriveFromOuter;
        let inner = |scale: f64| vec![Extent::Fixed(scale), auto, Extent::Fixed(scale)];
        Self {
            cylinder_names: None,
            scales: Some(ExtentArray::Table(vec![
                inner(1.1),
                inner(2.0),
                inner(3.0),
                vec![Extent::Fixed(5.0), Extent::Fixed(9.0), Extent::Fixed(5.0)],
            ])),
            dimensions: None,
            take_available_y: vec![0.0001, 0.8, 0.9],
            refinement_values: vec![4, 3, 2, 1],
            decomposition: DEFAULT_DECOMPOSITION,
            outer_surface_refinement: DEFAULT_OUTER_SURFACE_REFINEMENT,
            propeller_surface_refinement: DEFAULT_PROPELLER_SURFACE_REFINEMENT,
            refinement_regions_mode: DEFAULT_REFINEMENT_MODE.to_string(),
            refinement_regions_distance: DEFAULT_REFINEMENT_DISTANCE.to_string(),
            outside_propeller_point: None,
            cylinders_intersecting_propeller: None,
            reference_mesh: None,
            reference_segments: REFERENCE_CYLINDER_SEGMENTS,
            template_dir: None,
            templates: DEFAULT_TEMPLATE_FILES.iter().map(PathBuf::from).collect(),
            blocks: Vec::new(),
            parameters: toml::Table::new(),
        }
    }
}

impl CaseSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads a settings file.
    pub fn from_path(path: &Path) -> CaseResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CaseError::io(path, e))?;
        let settings = Self::from_toml_str(&text).map_err(|source| CaseError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded case settings");
        Ok(settings)
    }

    /// Number of cylinders, outer included, as given by the extent rows.
    pub fn cylinder_count(&self) -> usize {
        self.scales
            .as_ref()
            .or(self.dimensions.as_ref())
            .map_or(0, ExtentArray::len)
    }

    /// Configured names, or the default naming for the cylinder count.
    pub fn names(&self) -> Vec<String> {
        match &self.cylinder_names {
            Some(names) => names.clone(),
            None => {
                let inner = self.cylinder_count().saturating_sub(1);
                (0..inner)
                    .map(|i| format!("{INNER_CYLINDER_PREFIX}{i}"))
                    .chain(std::iter::once(OUTER_CYLINDER_NAME.to_string()))
                    .collect()
            }
        }
    }

    /// Cylinders cut by the propeller, defaulting to the innermost one.
    pub fn intersecting_cylinders(&self) -> Vec<String> {
        self.cylinders_intersecting_propeller
            .clone()
            .unwrap_or_else(|| self.names().into_iter().take(1).collect())
    }

    /// Checks count consistency before any work is done.
    ///
    /// The exclusive choice between `scales` and `dimensions` and the array
    /// shapes are checked when extents are derived.
    pub fn validate(&self) -> CaseResult<()> {
        let count = self.cylinder_count();
        if count == 0 {
            return Err(CaseError::settings(
                "no cylinders: set one of 'scales' or 'dimensions'",
            ));
        }

        let names = self.names();
        if names.len() != count {
            return Err(CaseError::settings(format!(
                "unexpected number of cylinders: {} names for {count} cylinders",
                names.len()
            )));
        }
        if let Some(duplicate) = names
            .iter()
            .enumerate()
            .find_map(|(i, name)| names[..i].contains(name).then_some(name))
        {
            return Err(CaseError::settings(format!(
                "duplicate cylinder name '{duplicate}'"
            )));
        }
        if self.take_available_y.len() + 1 != count {
            return Err(CaseError::settings(format!(
                "unexpected number of cylinders: {} take fractions for {count} cylinders",
                self.take_available_y.len()
            )));
        }
        if self.refinement_values.len() + 1 < count {
            return Err(CaseError::settings(format!(
                "{} refinement values for {} inner cylinders",
                self.refinement_values.len(),
                count - 1
            )));
        }
        if self.decomposition.contains(&0) {
            return Err(CaseError::settings(format!(
                "decomposition factors must be positive: {:?}",
                self.decomposition
            )));
        }
        if self.reference_mesh.is_none() && self.reference_segments < 3 {
            return Err(CaseError::settings(format!(
                "reference cylinder needs at least 3 segments, got {}",
                self.reference_segments
            )));
        }
        self.block_rules()?;
        self.extra_parameters()?;
        Ok(())
    }

    /// Structural block rules for template rendering.
    pub fn block_rules(&self) -> CaseResult<Vec<BlockRule>> {
        self.blocks
            .iter()
            .map(|block| {
                let delimiter = Delimiter::from_open(block.delimiter).ok_or_else(|| {
                    CaseError::settings(format!(
                        "block '{}' has unsupported delimiter '{}', expected one of ( [ {{",
                        block.marker, block.delimiter
                    ))
                })?;
                Ok(BlockRule::new(&block.marker, delimiter, &block.replacement))
            })
            .collect()
    }

    /// The `[parameters]` table as template values.
    pub fn extra_parameters(&self) -> CaseResult<Vec<(String, Value)>> {
        self.parameters
            .iter()
            .map(|(key, value)| Ok((key.clone(), toml_value(key, value)?)))
            .collect()
    }
}

fn toml_value(key: &str, value: &toml::Value) -> CaseResult<Value> {
    Ok(match value {
        toml::Value::Integer(n) => Value::Integer(*n),
        toml::Value::Float(n) => Value::Number(*n),
        toml::Value::String(s) => Value::Text(s.clone()),
        toml::Value::Boolean(b) => Value::Text(b.to_string()),
        toml::Value::Array(items) => Value::List(
            items
                .iter()
                .map(|item| toml_value(key, item))
                .collect::<CaseResult<_>>()?,
        ),
        toml::Value::Datetime(_) | toml::Value::Table(_) => {
            return Err(CaseError::settings(format!(
                "parameter '{key}' must be a number, string, boolean or array"
            )))
        }
    })
}

#[cfg(test)]
mod tests;
