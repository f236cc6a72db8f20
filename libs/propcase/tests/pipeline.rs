//! End-to-end case generation on a temporary directory.

use approx::assert_relative_eq;
use cylinder_geometry::GeometryError;
use cylinder_mesh::io::read_mesh;
use propcase::{generate_case, CaseError, CaseSettings};
use std::fs;
use std::path::{Path, PathBuf};

const PROPELLER_OBJ: &str = "\
# propeller bounding points
v -0.15 0 -0.15
v 0.35 0 -0.15
v 0.35 0.3 0.35
v -0.15 0.3 0.35
v 0.1 0.15 0.1
f 1 2 3
f 1 3 4
";

const SETTINGS: &str = r#"
scales = [[1.1, "auto", 1.1], [2, "auto", 2], [5, 4, 5]]
take_available_y = [0.1, 0.5]
refinement_values = [5, 4]
reference_segments = 16
template_dir = "templates"
templates = [
    "system/blockMeshDict.tmpl",
    "system/decomposeParDict.tmpl",
    "system/snappyHexMeshDict.tmpl",
]

[[blocks]]
marker = "refinementRegions"
delimiter = "{"
replacement = "@refinement_regions_list"

[parameters]
write_interval = 20
"#;

const BLOCK_MESH: &str = "min (@minx @miny @minz);\nmax (@maxx @maxy @maxz);\n";

const DECOMPOSE: &str = "n (@decompose_nx @decompose_ny @decompose_nz); // every @write_interval\n";

const SNAPPY: &str = "\
geometry
{
@searchable_surface_list
}
refinementRegions
{
    placeholder
}
locationInMesh @location_in_mesh;
";

struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("propcase-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.0.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.0.join(relative)).unwrap()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn prepared_case(name: &str) -> (Scratch, PathBuf) {
    let scratch = Scratch::new(name);
    scratch.write("templates/system/blockMeshDict.tmpl", BLOCK_MESH);
    scratch.write("templates/system/decomposeParDict.tmpl", DECOMPOSE);
    scratch.write("templates/system/snappyHexMeshDict.tmpl", SNAPPY);
    let propeller = scratch.write("input/blade.OBJ", PROPELLER_OBJ);
    (scratch, propeller)
}

fn numbers_after(text: &str, prefix: &str) -> Vec<f64> {
    let start = text.find(prefix).unwrap() + prefix.len();
    let end = start + text[start..].find(')').unwrap();
    text[start..end]
        .split_whitespace()
        .map(|n| n.parse().unwrap())
        .collect()
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-9);
    }
}

#[test]
fn test_generates_meshes_and_dictionaries() {
    let (scratch, propeller) = prepared_case("full");
    let settings = CaseSettings::from_toml_str(SETTINGS).unwrap();

    let report = generate_case(&scratch.0, &propeller, &settings).unwrap();

    assert_eq!(report.names, vec!["cylinder0", "cylinder1", "outerCylinder"]);
    assert_relative_eq!(report.outer_range.0, -1.7, epsilon = 1e-9);
    assert_relative_eq!(report.outer_range.1, 0.3, epsilon = 1e-9);
    assert_relative_eq!(report.plan.extents()[0].y, 0.47, epsilon = 1e-9);
    assert_relative_eq!(report.plan.extents()[1].y, 1.235, epsilon = 1e-9);

    let tri_surface = scratch.0.join("constant/triSurface");
    assert_eq!(report.propeller_file, tri_surface.join("propeller.obj"));
    assert_eq!(fs::read_to_string(&report.propeller_file).unwrap(), PROPELLER_OBJ);
    for name in ["cylinder0", "cylinder1", "outerCylinder"] {
        assert!(tri_surface.join(format!("{name}.obj")).exists(), "{name} missing");
    }

    let outer = read_mesh(&tri_surface.join("outerCylinder.obj")).unwrap();
    let regions: Vec<_> = outer.regions().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        regions,
        vec!["outerCylinderOutlet", "outerCylinderInlet", "outerCylinderWall"]
    );
    let inner = read_mesh(&tri_surface.join("cylinder0.obj")).unwrap();
    let (min, max) = inner.bounding_box();
    assert_relative_eq!(min.y, -0.17, epsilon = 1e-9);
    assert_relative_eq!(max.y, 0.3, epsilon = 1e-9);

    assert_eq!(report.config_files.len(), 3);
    assert_eq!(
        scratch.read("system/decomposeParDict"),
        "n (1 4 1); // every 20\n"
    );

    let block_mesh = scratch.read("system/blockMeshDict");
    assert_close(&numbers_after(&block_mesh, "min ("), &[-1.25, -1.7, -1.25]);
    assert_close(&numbers_after(&block_mesh, "max ("), &[1.45, 0.3, 1.45]);

    let snappy = scratch.read("system/snappyHexMeshDict");
    assert!(snappy.contains("file        \"cylinder0.obj\";"));
    assert!(snappy.contains("file        \"cylinder1.obj\";"));
    assert!(!snappy.contains("outerCylinder.obj"));
    assert!(snappy.contains("levels      ((1E15 5));"));
    assert!(snappy.contains("levels      ((1E15 4));"));
    assert!(!snappy.contains("placeholder"));
    assert_close(&numbers_after(&snappy, "locationInMesh ("), &[0.975, -0.7, 0.1]);
}

#[test]
fn test_invalid_layout_writes_nothing() {
    let (scratch, propeller) = prepared_case("nonmonotonic");
    let settings = CaseSettings::from_toml_str(
        &SETTINGS.replace("[2, \"auto\", 2]", "[0.5, \"auto\", 0.5]"),
    )
    .unwrap();

    let err = generate_case(&scratch.0, &propeller, &settings).unwrap_err();
    assert!(matches!(
        err,
        CaseError::Geometry(GeometryError::NonMonotonic { index: 1, .. })
    ));
    assert!(!scratch.0.join("constant").exists());
    assert!(!scratch.0.join("system").exists());
}

#[test]
fn test_touching_walls_need_location_override() {
    let (scratch, propeller) = prepared_case("touching");
    let touching = SETTINGS.replace("[5, 4, 5]", "[2, 4, 2]");

    let settings = CaseSettings::from_toml_str(&touching).unwrap();
    let err = generate_case(&scratch.0, &propeller, &settings).unwrap_err();
    assert!(matches!(
        err,
        CaseError::Geometry(GeometryError::NoRadialGap { .. })
    ));
    assert!(!scratch.0.join("constant").exists());

    let settings = CaseSettings::from_toml_str(&format!(
        "outside_propeller_point = [0.9, -1.0, 0.0]\n{touching}"
    ))
    .unwrap();
    generate_case(&scratch.0, &propeller, &settings).unwrap();
    assert!(scratch
        .read("system/snappyHexMeshDict")
        .contains("locationInMesh (0.9 -1 0);"));
}

#[test]
fn test_template_failure_keeps_meshes_but_writes_no_dictionary() {
    let (scratch, propeller) = prepared_case("missing-key");
    scratch.write(
        "templates/system/decomposeParDict.tmpl",
        "method @decompose_method;\n",
    );
    let settings = CaseSettings::from_toml_str(SETTINGS).unwrap();

    let err = generate_case(&scratch.0, &propeller, &settings).unwrap_err();
    assert!(err.to_string().contains("decompose_method"));
    assert!(scratch.0.join("constant/triSurface/outerCylinder.obj").exists());
    assert!(!Path::new(&scratch.0.join("system/blockMeshDict")).exists());
}

#[test]
fn test_unsupported_propeller_format() {
    let (scratch, _) = prepared_case("format");
    let step = scratch.write("input/blade.step", "ISO-10303-21;");
    let settings = CaseSettings::from_toml_str(SETTINGS).unwrap();

    let err = generate_case(&scratch.0, &step, &settings).unwrap_err();
    assert!(err.is_invalid_input());
}
