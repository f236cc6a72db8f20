//! # Dimension Validation
//!
//! Resolves derived extents and enforces the nesting invariants:
//!
//! - extents never shrink from one cylinder to the next, on any axis
//! - the outer cylinder spans every inner cylinder along the length axis

use crate::error::{GeometryError, GeometryResult};
use crate::extent::{CylinderExtents, Extent};
use config::constants::{GEOMETRY_TOLERANCE, LENGTH_AXIS};
use glam::DVec3;
use tracing::debug;

/// Length-axis extent of the outer (last) cylinder.
///
/// It must be fixed: anchors are placed relative to it before any derived
/// extent can be resolved.
pub fn outer_length(extents: &[CylinderExtents]) -> GeometryResult<f64> {
    let outer = extents
        .last()
        .ok_or_else(|| GeometryError::invalid_input("at least one cylinder is required"))?;

    outer[LENGTH_AXIS].fixed().ok_or_else(|| {
        GeometryError::invalid_input(format!(
            "the outer cylinder (index {}) needs a fixed length",
            extents.len() - 1
        ))
    })
}

/// Resolves derived extents and validates the layout.
///
/// A derived length becomes `outer_anchor.y - anchor.y`, so that the
/// cylinder reaches the far end of the outer cylinder. Anchors are only
/// read.
///
/// ## Errors
///
/// - [`GeometryError::InvalidInput`] on count mismatch, or a derived extent
///   outside the length axis or on the outer cylinder
/// - [`GeometryError::NonPositiveExtent`] for zero, negative or NaN extents
/// - [`GeometryError::NonMonotonic`] when a cylinder is smaller than the
///   previous one on some axis
/// - [`GeometryError::NotEnclosed`] when an inner cylinder leaves the
///   outer cylinder's length range
///
/// ## Example
///
/// ```rust
/// use cylinder_geometry::{resolve_dimensions, Extent};
/// use glam::DVec3;
///
/// let extents = [
///     [Extent::Fixed(0.5), Extent::DeriveFromOuter, Extent::Fixed(1.0)],
///     [Extent::Fixed(1.0), Extent::Fixed(10.0), Extent::Fixed(2.0)],
/// ];
/// let anchors = [DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 5.0, 0.0)];
/// let resolved = resolve_dimensions(&extents, &anchors).unwrap();
/// assert_eq!(resolved[0], DVec3::new(0.5, 6.0, 1.0));
/// ```
pub fn resolve_dimensions(
    extents: &[CylinderExtents],
    anchors: &[DVec3],
) -> GeometryResult<Vec<DVec3>> {
    if extents.len() != anchors.len() {
        return Err(GeometryError::invalid_input(format!(
            "unexpected number of cylinders: {} extents but {} anchors",
            extents.len(),
            anchors.len()
        )));
    }
    let outer_index = extents.len().checked_sub(1).ok_or_else(|| {
        GeometryError::invalid_input("at least one cylinder is required")
    })?;
    let outer_far = anchors[outer_index].y;

    let resolved = extents
        .iter()
        .zip(anchors)
        .enumerate()
        .map(|(index, (row, anchor))| {
            let mut out = DVec3::ZERO;
            for (axis, extent) in row.iter().enumerate() {
                out[axis] = match extent {
                    Extent::Fixed(value) => *value,
                    Extent::DeriveFromOuter if axis == LENGTH_AXIS && index != outer_index => {
                        outer_far - anchor.y
                    }
                    Extent::DeriveFromOuter => {
                        return Err(GeometryError::invalid_input(format!(
                            "cylinder {index} cannot derive its extent along axis {axis}"
                        )));
                    }
                };
            }
            Ok(out)
        })
        .collect::<GeometryResult<Vec<_>>>()?;

    check_positive(&resolved)?;
    check_monotonic(&resolved)?;
    check_enclosed(&resolved, anchors)?;

    debug!(cylinders = resolved.len(), "validated cylinder dimensions");
    Ok(resolved)
}

fn check_positive(extents: &[DVec3]) -> GeometryResult<()> {
    for (index, extent) in extents.iter().enumerate() {
        for axis in 0..3 {
            // also catches NaN
            if !(extent[axis] > 0.0) {
                return Err(GeometryError::NonPositiveExtent {
                    index,
                    axis,
                    extent: extent[axis],
                });
            }
        }
    }
    Ok(())
}

fn check_monotonic(extents: &[DVec3]) -> GeometryResult<()> {
    for (index, pair) in extents.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        for axis in 0..3 {
            if current[axis] < previous[axis] - GEOMETRY_TOLERANCE {
                return Err(GeometryError::NonMonotonic {
                    index: index + 1,
                    previous: index,
                    axis,
                    extent: current[axis],
                    previous_extent: previous[axis],
                });
            }
        }
    }
    Ok(())
}

/// Realized `(min, max)` of a cylinder along the length axis.
///
/// Inner cylinders start at their anchor; the outer cylinder ends at it.
pub fn length_range(extent: f64, anchor: f64, is_outer: bool) -> (f64, f64) {
    if is_outer {
        (anchor - extent, anchor)
    } else {
        (anchor, anchor + extent)
    }
}

fn check_enclosed(extents: &[DVec3], anchors: &[DVec3]) -> GeometryResult<()> {
    let outer_index = extents.len() - 1;
    let (outer_min, outer_max) = length_range(
        extents[outer_index][LENGTH_AXIS],
        anchors[outer_index][LENGTH_AXIS],
        true,
    );

    for index in 0..outer_index {
        let (min, max) = length_range(extents[index][LENGTH_AXIS], anchors[index][LENGTH_AXIS], false);
        if min < outer_min - GEOMETRY_TOLERANCE || max > outer_max + GEOMETRY_TOLERANCE {
            return Err(GeometryError::NotEnclosed {
                index,
                min,
                max,
                outer_min,
                outer_max,
            });
        }
    }
    Ok(())
}
