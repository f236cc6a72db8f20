use super::*;
use crate::extent::Extent;
use approx::assert_relative_eq;

fn table(rows: &[[f64; 3]]) -> ExtentArray {
    ExtentArray::fixed(rows)
}

fn values(extents: &[CylinderExtents]) -> Vec<[f64; 3]> {
    extents
        .iter()
        .map(|row| row.map(|e| e.fixed().expect("fixed extent")))
        .collect()
}

#[test]
fn test_scales_multiply_by_diameter() {
    let scales = table(&[[1.0, 2.0, 1.0], [2.0, 2.5, 2.0], [4.0, 3.0, 4.0]]);
    let result = derive_dimensions(Some(&scales), None, Some(0.5)).unwrap();

    let expected = [[0.5, 1.0, 0.5], [1.0, 1.25, 1.0], [2.0, 1.5, 2.0]];
    for (row, exp) in values(&result).iter().zip(expected) {
        for axis in 0..3 {
            assert_relative_eq!(row[axis], exp[axis], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_scales_elementwise_for_any_diameter() {
    let rows = [[1.1, 7.0, 1.1], [2.0, 8.0, 2.0], [3.0, 9.0, 3.0], [5.0, 9.5, 5.0]];
    for d in [0.25, 1.0, 3.7] {
        let result = derive_dimensions(Some(&table(&rows)), None, Some(d)).unwrap();
        for (row, input) in values(&result).iter().zip(rows) {
            for axis in 0..3 {
                assert_eq!(row[axis], input[axis] * d);
            }
        }
    }
}

#[test]
fn test_dimensions_pass_through() {
    let rows = [[1.0, 2.0, 1.0], [2.0, 2.5, 2.0], [4.0, 3.0, 4.0]];
    let result = derive_dimensions(None, Some(&table(&rows)), None).unwrap();
    assert_eq!(values(&result), rows.to_vec());
}

#[test]
fn test_derived_marker_survives_scaling() {
    let scales = ExtentArray::Table(vec![
        vec![Extent::Fixed(1.1), Extent::DeriveFromOuter, Extent::Fixed(1.1)],
        vec![Extent::Fixed(5.0), Extent::Fixed(9.0), Extent::Fixed(5.0)],
    ]);
    let result = derive_dimensions(Some(&scales), None, Some(2.0)).unwrap();
    assert_eq!(result[0][1], Extent::DeriveFromOuter);
    assert_eq!(result[1][1], Extent::Fixed(18.0));
}

#[test]
fn test_both_sources_rejected() {
    let rows = table(&[[1.0, 2.0, 1.0]]);
    let err = derive_dimensions(Some(&rows), Some(&rows), Some(1.0)).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_no_source_rejected() {
    let err = derive_dimensions(None, None, Some(2.0)).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_flat_array_rejected() {
    let flat = ExtentArray::Flat(vec![Extent::Fixed(1.0), Extent::Fixed(2.0), Extent::Fixed(1.0)]);
    assert!(derive_dimensions(None, Some(&flat), None).unwrap_err().is_invalid_input());
    assert!(derive_dimensions(Some(&flat), None, Some(2.0)).unwrap_err().is_invalid_input());
}

#[test]
fn test_wrong_column_count_rejected() {
    let narrow = ExtentArray::Table(vec![
        vec![Extent::Fixed(1.0), Extent::Fixed(2.0)],
        vec![Extent::Fixed(2.0), Extent::Fixed(2.0)],
    ]);
    let err = derive_dimensions(None, Some(&narrow), None).unwrap_err();
    assert!(err.to_string().contains("second axis"));
    assert!(derive_dimensions(Some(&narrow), None, Some(2.0)).is_err());
}

#[test]
fn test_scales_without_diameter_rejected() {
    let flat = ExtentArray::Flat(vec![Extent::Fixed(1.0), Extent::Fixed(2.0), Extent::Fixed(1.0)]);
    assert!(derive_dimensions(Some(&flat), None, None).unwrap_err().is_invalid_input());

    let rows = table(&[[1.0, 2.0, 1.0]]);
    assert!(derive_dimensions(Some(&rows), None, None).is_err());
    assert!(derive_dimensions(Some(&rows), None, Some(0.0)).is_err());
    assert!(derive_dimensions(Some(&rows), None, Some(f64::NAN)).is_err());
}
