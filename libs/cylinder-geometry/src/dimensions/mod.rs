//! # Dimension Derivation
//!
//! Converts per-cylinder scale factors or explicit dimensions into absolute
//! extents.
//!
//! ## Example
//!
//! ```rust
//! use cylinder_geometry::{derive_dimensions, Extent, ExtentArray};
//!
//! let scales = ExtentArray::fixed(&[[1.0, 2.0, 1.0], [4.0, 3.0, 4.0]]);
//! let extents = derive_dimensions(Some(&scales), None, Some(0.5)).unwrap();
//! assert_eq!(extents[1][0], Extent::Fixed(2.0));
//! ```

use crate::error::{GeometryError, GeometryResult};
use crate::extent::{CylinderExtents, ExtentArray};
use tracing::debug;

/// Derives the extents of every cylinder.
///
/// Exactly one of `scales` and `dimensions` must be supplied, as a 2D array
/// with three columns (x, y, z). Scale factors are multiplied by
/// `diameter`, which is then mandatory and must be positive.
///
/// ## Errors
///
/// [`GeometryError::InvalidInput`] when both or neither source is given,
/// the diameter is missing, or the array is not `N x 3`.
pub fn derive_dimensions(
    scales: Option<&ExtentArray>,
    dimensions: Option<&ExtentArray>,
    diameter: Option<f64>,
) -> GeometryResult<Vec<CylinderExtents>> {
    let (source, factor) = match (scales, dimensions) {
        (Some(_), Some(_)) | (None, None) => {
            return Err(GeometryError::invalid_input(
                "exactly one of scales and dimensions must be supplied",
            ));
        }
        (Some(scales), None) => {
            let diameter = diameter
                .filter(|d| d.is_finite() && *d > 0.0)
                .ok_or_else(|| {
                    GeometryError::invalid_input(format!(
                        "scale factors need a positive propeller diameter, got {diameter:?}"
                    ))
                })?;
            (scales, diameter)
        }
        (None, Some(dimensions)) => (dimensions, 1.0),
    };

    let rows = match source {
        ExtentArray::Table(rows) => rows,
        ExtentArray::Flat(values) => {
            return Err(GeometryError::invalid_input(format!(
                "expected a 2D array, got a 1D array of {} values",
                values.len()
            )));
        }
    };

    let extents = rows
        .iter()
        .enumerate()
        .map(|(index, row)| match row.as_slice() {
            [x, y, z] => Ok([x.scaled(factor), y.scaled(factor), z.scaled(factor)]),
            _ => Err(GeometryError::invalid_input(format!(
                "wrong number of components along the second axis: row {index} has {}, expected 3",
                row.len()
            ))),
        })
        .collect::<GeometryResult<Vec<_>>>()?;

    debug!(cylinders = extents.len(), factor, "derived cylinder extents");
    Ok(extents)
}

#[cfg(test)]
mod tests;
