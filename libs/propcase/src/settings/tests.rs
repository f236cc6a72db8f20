//! Settings parsing and validation.

use super::*;

#[test]
fn test_empty_file_gives_standard_case() {
    let settings = CaseSettings::from_toml_str("").unwrap();
    assert_eq!(settings, CaseSettings::default());
    assert_eq!(settings.cylinder_count(), 4);
    assert_eq!(
        settings.names(),
        vec!["cylinder0", "cylinder1", "cylinder2", "outerCylinder"]
    );
    assert_eq!(settings.intersecting_cylinders(), vec!["cylinder0"]);
    assert_eq!(settings.templates.len(), 6);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_parse_full_file() {
    let settings = CaseSettings::from_toml_str(
        r#"
        cylinder_names = ["inner", "outer"]
        dimensions = [[0.5, "auto", 0.5], [2, 3, 2]]
        take_available_y = [0.5]
        refinement_values = [6]
        decomposition = [2, 2, 2]
        outside_propeller_point = [0, 0, 1]
        templates = ["system/blockMeshDict.tmpl"]

        [[blocks]]
        marker = "refinementRegions"
        delimiter = "{"
        replacement = "@refinement_regions_list"

        [parameters]
        end_time = 0.5
        write_format = "binary"
        probes = [1, 2]
        "#,
    )
    .unwrap();

    assert_eq!(settings.cylinder_count(), 2);
    assert_eq!(settings.names(), vec!["inner", "outer"]);
    assert_eq!(settings.outside_propeller_point, Some([0.0, 0.0, 1.0]));
    assert!(settings.validate().is_ok());

    let rules = settings.block_rules().unwrap();
    assert_eq!(rules[0].delimiter, Delimiter::Brace);

    let extras = settings.extra_parameters().unwrap();
    assert!(extras.contains(&("end_time".to_string(), Value::Number(0.5))));
    assert!(extras.contains(&("probes".to_string(), Value::from(vec![1i64, 2]))));
}

#[test]
fn test_unknown_field_rejected() {
    assert!(CaseSettings::from_toml_str("cylinder_count = 3").is_err());
}

#[test]
fn test_take_count_must_match() {
    let settings = CaseSettings {
        take_available_y: vec![0.1, 0.2],
        ..CaseSettings::default()
    };
    let err = settings.validate().unwrap_err();
    assert!(err.to_string().contains("unexpected number of cylinders"));
}

#[test]
fn test_name_count_must_match() {
    let settings = CaseSettings {
        cylinder_names: Some(vec!["a".into(), "b".into()]),
        ..CaseSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_duplicate_names_rejected() {
    let settings = CaseSettings {
        cylinder_names: Some(vec!["a".into(), "b".into(), "a".into(), "d".into()]),
        ..CaseSettings::default()
    };
    assert!(settings.validate().unwrap_err().to_string().contains("duplicate"));
}

#[test]
fn test_too_few_refinement_values() {
    let settings = CaseSettings {
        refinement_values: vec![4, 3],
        ..CaseSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_zero_decomposition_rejected() {
    let settings = CaseSettings {
        decomposition: [1, 0, 1],
        ..CaseSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_bad_block_delimiter_rejected() {
    let settings = CaseSettings {
        blocks: vec![BlockSettings {
            marker: "geometry".into(),
            delimiter: '<',
            replacement: String::new(),
        }],
        ..CaseSettings::default()
    };
    assert!(settings.validate().is_err());
}

#[test]
fn test_table_parameter_rejected() {
    let settings = CaseSettings::from_toml_str("[parameters.nested]\nkey = 1\n").unwrap();
    assert!(settings.extra_parameters().is_err());
}

#[test]
fn test_no_extents_rejected() {
    let settings = CaseSettings {
        scales: None,
        ..CaseSettings::default()
    };
    assert!(settings.validate().is_err());
}
