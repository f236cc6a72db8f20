//! # Bounding Box
//!
//! Axis-aligned bounds of the propeller geometry.

use crate::error::{GeometryError, GeometryResult};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with `min <= max` on every axis.
///
/// # Example
///
/// ```rust
/// use cylinder_geometry::BoundingBox;
/// use glam::DVec3;
///
/// let bounds = BoundingBox::from_points(&[
///     DVec3::new(-1.0, 0.0, -1.0),
///     DVec3::new(3.0, 2.0, 3.0),
/// ]).unwrap();
/// assert_eq!(bounds.middle(), DVec3::ONE);
/// assert_eq!(bounds.diameter(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    ///
    /// Fails when a coordinate is not finite or `min > max` on some axis.
    pub fn new(min: DVec3, max: DVec3) -> GeometryResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GeometryError::invalid_input(format!(
                "bounding box corners must be finite: min={min}, max={max}"
            )));
        }
        if min.cmpgt(max).any() {
            return Err(GeometryError::invalid_input(format!(
                "bounding box minimum exceeds maximum: min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Computes the tightest box around a point cloud.
    pub fn from_points(points: &[DVec3]) -> GeometryResult<Self> {
        let Some((first, rest)) = points.split_first() else {
            return Err(GeometryError::invalid_input(
                "cannot compute the bounding box of an empty point set",
            ));
        };

        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

        Self::new(min, max)
    }

    /// Size along every axis (`max - min`).
    #[inline]
    pub fn dimension(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn middle(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// Diameter of the propeller disc, which lies in the XZ plane.
    #[inline]
    pub fn diameter(&self) -> f64 {
        let dims = self.dimension();
        dims.x.max(dims.z)
    }

    /// `(min, max)` along one axis (0 = x, 1 = y, 2 = z).
    #[inline]
    pub fn axis_range(&self, axis: usize) -> (f64, f64) {
        (self.min[axis], self.max[axis])
    }
}
