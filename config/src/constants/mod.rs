//! Centralized configuration values shared across the case generator.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance for coordinate comparisons along the cylinder axes.
///
/// Derived extents are computed as `far - anchor` and later re-added to the
/// anchor, so the nesting checks must not fail on the last ulp.
///
/// # Examples
/// ```
/// use config::constants::GEOMETRY_TOLERANCE;
/// assert!(GEOMETRY_TOLERANCE < 1.0e-6);
/// ```
pub const GEOMETRY_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Index of the length axis of every cylinder (the propeller shaft axis).
///
/// # Examples
/// ```
/// use config::constants::LENGTH_AXIS;
/// assert_eq!(LENGTH_AXIS, 1);
/// ```
pub const LENGTH_AXIS: usize = 1;

/// Radial margin added around the outer cylinder when sizing the background
/// block mesh.
///
/// # Examples
/// ```
/// use config::constants::BOUNDING_BOX_MARGIN;
/// let outer_radius = 2.5;
/// assert!(outer_radius + BOUNDING_BOX_MARGIN > outer_radius);
/// ```
pub const BOUNDING_BOX_MARGIN: f64 = 0.1;

/// Number of segments around the circumference of the generated reference
/// cylinder, used when no reference mesh file is supplied.
///
/// # Examples
/// ```
/// use config::constants::REFERENCE_CYLINDER_SEGMENTS;
/// assert!(REFERENCE_CYLINDER_SEGMENTS >= 3);
/// ```
pub const REFERENCE_CYLINDER_SEGMENTS: u32 = 64;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Name given to the outermost cylinder when names are not configured.
///
/// # Examples
/// ```
/// use config::constants::OUTER_CYLINDER_NAME;
/// assert_eq!(format!("{OUTER_CYLINDER_NAME}.obj"), "outerCylinder.obj");
/// ```
pub const OUTER_CYLINDER_NAME: &str = "outerCylinder";

/// Prefix of the inner cylinder names when names are not configured; the
/// cylinder index is appended.
///
/// # Examples
/// ```
/// use config::constants::INNER_CYLINDER_PREFIX;
/// assert_eq!(format!("{INNER_CYLINDER_PREFIX}{}", 0), "cylinder0");
/// ```
pub const INNER_CYLINDER_PREFIX: &str = "cylinder";

/// Region suffix for the outer cylinder cap at the maximum length coordinate.
pub const OUTLET_SUFFIX: &str = "Outlet";

/// Region suffix for the outer cylinder cap at the minimum length coordinate.
pub const INLET_SUFFIX: &str = "Inlet";

/// Region suffix for the lateral surface of the outer cylinder.
pub const WALL_SUFFIX: &str = "Wall";

/// Extension of the surface meshes written for every cylinder.
///
/// # Examples
/// ```
/// use config::constants::MESH_EXTENSION;
/// assert_eq!(MESH_EXTENSION, "obj");
/// ```
pub const MESH_EXTENSION: &str = "obj";

/// Directory, relative to the case root, receiving the surface meshes.
pub const TRI_SURFACE_DIR: &str = "constant/triSurface";

/// File stem of the propeller surface copied into the case.
pub const PROPELLER_STEM: &str = "propeller";

// =============================================================================
// TEMPLATE CONSTANTS
// =============================================================================

/// Reserved character introducing a token in template files.
///
/// Doubling it (`@@`) produces a literal character.
///
/// # Examples
/// ```
/// use config::constants::TOKEN_PREFIX;
/// assert_eq!(TOKEN_PREFIX, '@');
/// ```
pub const TOKEN_PREFIX: char = '@';

/// Filename suffix marking a template; stripped from the rendered output.
///
/// # Examples
/// ```
/// use config::constants::TEMPLATE_SUFFIX;
/// let name = "blockMeshDict.tmpl";
/// assert_eq!(name.strip_suffix(TEMPLATE_SUFFIX), Some("blockMeshDict"));
/// ```
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Template files rendered for every case, relative to the template root.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_TEMPLATE_FILES, TEMPLATE_SUFFIX};
/// assert!(DEFAULT_TEMPLATE_FILES.iter().all(|f| f.ends_with(TEMPLATE_SUFFIX)));
/// ```
pub const DEFAULT_TEMPLATE_FILES: [&str; 6] = [
    "constant/dynamicMeshDict.tmpl",
    "system/blockMeshDict.tmpl",
    "system/createBafflesDict.tmpl",
    "system/decomposeParDict.tmpl",
    "system/snappyHexMeshDict.tmpl",
    "system/surfaceFeaturesDict.tmpl",
];

// =============================================================================
// SOLVER DEFAULTS
// =============================================================================

/// Default parallel decomposition (subdomains along x, y, z).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DECOMPOSITION;
/// let subdomains: u32 = DEFAULT_DECOMPOSITION.iter().product();
/// assert_eq!(subdomains, 4);
/// ```
pub const DEFAULT_DECOMPOSITION: [u32; 3] = [1, 4, 1];

/// Default refinement mode of the cylinder refinement regions.
pub const DEFAULT_REFINEMENT_MODE: &str = "inside";

/// Default refinement distance of the cylinder refinement regions.
pub const DEFAULT_REFINEMENT_DISTANCE: &str = "1E15";

/// Default `(min max)` surface refinement of the outer cylinder.
pub const DEFAULT_OUTER_SURFACE_REFINEMENT: [u32; 2] = [3, 4];

/// Default `(min max)` surface refinement of the propeller.
pub const DEFAULT_PROPELLER_SURFACE_REFINEMENT: [u32; 2] = [9, 10];
