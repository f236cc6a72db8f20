//! # Cylinder Plan
//!
//! Runs derivation, placement and validation in order and keeps the
//! resulting layout together.

use crate::anchors::compute_anchors;
use crate::bounds::BoundingBox;
use crate::error::{GeometryError, GeometryResult};
use crate::extent::CylinderExtents;
use crate::validate::{length_range, outer_length, resolve_dimensions};
use config::constants::{GEOMETRY_TOLERANCE, LENGTH_AXIS};
use glam::DVec3;
use tracing::{info, instrument};

/// Validated sizes and anchors of all cylinders, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderPlan {
    extents: Vec<DVec3>,
    anchors: Vec<DVec3>,
}

impl CylinderPlan {
    /// Places and validates `extents` around the propeller.
    ///
    /// `takes` must hold one fraction per inner cylinder.
    #[instrument(skip_all, fields(cylinders = extents.len()))]
    pub fn new(
        extents: &[CylinderExtents],
        takes: &[f64],
        propeller: &BoundingBox,
    ) -> GeometryResult<Self> {
        if takes.len() + 1 != extents.len() {
            return Err(GeometryError::invalid_input(format!(
                "unexpected number of cylinders: {} extents need {} take fractions, got {}",
                extents.len(),
                extents.len().saturating_sub(1),
                takes.len()
            )));
        }

        let anchors = compute_anchors(takes, outer_length(extents)?, propeller);
        let extents = resolve_dimensions(extents, &anchors)?;

        let plan = Self { extents, anchors };
        let (low, high) = plan.outer_length_range();
        info!(low, high, "cylinder layout validated");
        Ok(plan)
    }

    /// Builds a plan from already resolved values without validation.
    pub fn from_parts(extents: Vec<DVec3>, anchors: Vec<DVec3>) -> GeometryResult<Self> {
        if extents.len() != anchors.len() || extents.is_empty() {
            return Err(GeometryError::invalid_input(format!(
                "unexpected number of cylinders: {} extents but {} anchors",
                extents.len(),
                anchors.len()
            )));
        }
        Ok(Self { extents, anchors })
    }

    /// Number of cylinders, outer included.
    #[inline]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Always false; a plan holds at least the outer cylinder.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Resolved extents.
    #[inline]
    pub fn extents(&self) -> &[DVec3] {
        &self.extents
    }

    /// Anchors (see [`compute_anchors`] for the y convention).
    #[inline]
    pub fn anchors(&self) -> &[DVec3] {
        &self.anchors
    }

    /// Index of the outer cylinder.
    #[inline]
    pub fn outer_index(&self) -> usize {
        self.extents.len() - 1
    }

    /// True for the last cylinder.
    #[inline]
    pub fn is_outer(&self, index: usize) -> bool {
        index == self.outer_index()
    }

    /// Radius of a cylinder in the XZ plane, taken from its x extent.
    #[inline]
    pub fn radius(&self, index: usize) -> f64 {
        self.extents[index].x / 2.0
    }

    /// Outer cylinder `(min, max)` along the length axis, from the plan.
    pub fn outer_length_range(&self) -> (f64, f64) {
        let outer = self.outer_index();
        length_range(
            self.extents[outer][LENGTH_AXIS],
            self.anchors[outer][LENGTH_AXIS],
            true,
        )
    }

    /// A point inside the outer cylinder but outside every inner cylinder
    /// (and so outside the propeller).
    ///
    /// It lies on the outer cylinder's mid-length plane, offset along x
    /// from the centerline to halfway between the largest inner radius and
    /// the outer radius.
    pub fn outside_point(&self) -> GeometryResult<DVec3> {
        let outer = self.outer_index();
        let outer_radius = self.radius(outer);
        let inner_radius = (0..outer).map(|i| self.radius(i)).fold(0.0, f64::max);

        if outer_radius <= inner_radius + GEOMETRY_TOLERANCE {
            return Err(GeometryError::NoRadialGap {
                inner_radius,
                outer_radius,
            });
        }

        let (low, high) = self.outer_length_range();
        let center = self.anchors[outer];
        Ok(DVec3::new(
            center.x + (inner_radius + outer_radius) / 2.0,
            (low + high) / 2.0,
            center.z,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::Extent;
    use approx::assert_relative_eq;

    fn propeller() -> BoundingBox {
        BoundingBox::new(DVec3::new(-0.15, 0.0, -0.15), DVec3::new(0.35, 0.3, 0.35)).unwrap()
    }

    #[test]
    fn test_plan_resolves_derived_lengths() {
        let auto = Extent::DeriveFromOuter;
        let extents = vec![
            [Extent::Fixed(0.55), auto, Extent::Fixed(0.55)],
            [Extent::Fixed(1.0), auto, Extent::Fixed(1.0)],
            [Extent::Fixed(2.5), Extent::Fixed(1.0), Extent::Fixed(2.5)],
        ];
        let plan = CylinderPlan::new(&extents, &[0.1, 0.5], &propeller()).unwrap();

        assert_eq!(plan.len(), 3);
        assert_relative_eq!(plan.extents()[0].y, 0.37, epsilon = 1e-12);
        assert_relative_eq!(plan.extents()[1].y, 0.685, epsilon = 1e-12);
        let (low, high) = plan.outer_length_range();
        assert_relative_eq!(low, -0.7, epsilon = 1e-12);
        assert_relative_eq!(high, 0.3, epsilon = 1e-12);
        assert_eq!(plan.radius(2), 1.25);
        assert!(plan.is_outer(2));
    }

    #[test]
    fn test_plan_rejects_take_count() {
        let extents = vec![[Extent::Fixed(1.0); 3], [Extent::Fixed(2.0); 3]];
        let err = CylinderPlan::new(&extents, &[0.1, 0.2], &propeller()).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("unexpected number of cylinders"));
    }

    #[test]
    fn test_outside_point_between_walls() {
        let plan = CylinderPlan::from_parts(
            vec![DVec3::new(0.5, 1.0, 0.5), DVec3::new(1.0, 1.5, 1.0), DVec3::new(3.0, 4.0, 3.0)],
            vec![
                DVec3::new(0.1, -0.5, 0.2),
                DVec3::new(0.1, -1.0, 0.2),
                DVec3::new(0.1, 1.0, 0.2),
            ],
        )
        .unwrap();
        let point = plan.outside_point().unwrap();
        assert_relative_eq!(point.x, 0.1 + 1.0, epsilon = 1e-12);
        assert_relative_eq!(point.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(point.z, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_outside_point_needs_gap() {
        let plan = CylinderPlan::from_parts(
            vec![DVec3::new(2.0, 1.0, 2.0), DVec3::new(2.0, 2.0, 2.0)],
            vec![DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0)],
        )
        .unwrap();
        assert!(matches!(
            plan.outside_point(),
            Err(GeometryError::NoRadialGap { .. })
        ));
    }

    #[test]
    fn test_from_parts_checks_lengths() {
        assert!(CylinderPlan::from_parts(vec![DVec3::ONE], vec![]).is_err());
        assert!(CylinderPlan::from_parts(vec![], vec![]).is_err());
        assert!(CylinderPlan::from_parts(vec![DVec3::ONE], vec![DVec3::ZERO]).is_ok());
    }
}
