//! # Anchor Placement
//!
//! Places every cylinder along the length (y) axis.
//!
//! The outer cylinder is pinned to the far end of the propeller shaft. Inner
//! cylinders are then stacked from the propeller tip towards the low end of
//! the outer cylinder, each one taking a fraction of the room that is still
//! left:
//!
//! ```text
//!  outer low        anchor[1]   anchor[0]  tip         far (outer anchor)
//!      |<---------------|-----------|-------x===========|
//!      |<-- available after k=0 --->|
//!      |<------------- available before k=0 ->|
//! ```

use crate::bounds::BoundingBox;
use config::constants::LENGTH_AXIS;
use glam::DVec3;
use tracing::debug;

/// Computes the anchors of `takes.len() + 1` cylinders, innermost first.
///
/// The x and z components are the propeller midpoint. The y component is
/// the lowest y coordinate of an inner cylinder, or the highest y coordinate
/// of the outer (last) cylinder.
///
/// `takes[k]` is the fraction of the currently available space consumed by
/// inner cylinder `k`. Fractions outside `(0, 1)` are not rejected here;
/// they produce a layout that [`crate::validate::resolve_dimensions`]
/// refuses.
///
/// ## Example
///
/// ```rust
/// use cylinder_geometry::{compute_anchors, BoundingBox};
/// use glam::DVec3;
///
/// let propeller = BoundingBox::new(DVec3::new(-1.0, 0.0, -1.0), DVec3::new(1.0, 1.0, 1.0)).unwrap();
/// let anchors = compute_anchors(&[0.5], 3.0, &propeller);
/// // outer spans [-2, 1]; half of the 2 units below the tip go to cylinder 0
/// assert_eq!(anchors, vec![DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 1.0, 0.0)]);
/// ```
pub fn compute_anchors(takes: &[f64], outer_length: f64, propeller: &BoundingBox) -> Vec<DVec3> {
    let middle = propeller.middle();
    let (near, far) = propeller.axis_range(LENGTH_AXIS);
    let outer_low = far - outer_length;

    let mut anchors = Vec::with_capacity(takes.len() + 1);
    let mut base = near;
    let mut available = near - outer_low;

    for &take in takes {
        let y = base - take * available;
        anchors.push(DVec3::new(middle.x, y, middle.z));
        base = y;
        available = y - outer_low;
    }

    anchors.push(DVec3::new(middle.x, far, middle.z));

    debug!(cylinders = anchors.len(), outer_low, far, "placed cylinder anchors");
    anchors
}
