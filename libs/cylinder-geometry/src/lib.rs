//! # Cylinder Geometry
//!
//! Sizing and placement of the nested refinement cylinders around a
//! propeller.
//!
//! ## Architecture
//!
//! ```text
//! BoundingBox ─┐
//! scales/dims ─┼→ derive_dimensions → compute_anchors → resolve_dimensions → CylinderPlan
//! takes ───────┘
//! ```
//!
//! Cylinders are ordered innermost first; the last one is the outer
//! cylinder. The length axis is y.
//!
//! ## Usage
//!
//! ```rust
//! use cylinder_geometry::{derive_dimensions, BoundingBox, CylinderPlan, ExtentArray};
//! use glam::DVec3;
//!
//! let propeller = BoundingBox::new(DVec3::new(-1.0, 0.0, -1.0), DVec3::new(1.0, 1.0, 1.0))?;
//! let scales = ExtentArray::fixed(&[[1.0, 1.0, 1.0], [2.0, 3.0, 2.0]]);
//! let extents = derive_dimensions(Some(&scales), None, Some(propeller.diameter()))?;
//! let plan = CylinderPlan::new(&extents, &[0.5], &propeller)?;
//! assert_eq!(plan.outer_length_range(), (-5.0, 1.0));
//! # Ok::<(), cylinder_geometry::GeometryError>(())
//! ```

pub mod anchors;
pub mod bounds;
pub mod dimensions;
pub mod error;
pub mod extent;
pub mod plan;
pub mod validate;

pub use anchors::compute_anchors;
pub use bounds::BoundingBox;
pub use dimensions::derive_dimensions;
pub use error::{GeometryError, GeometryResult};
pub use extent::{CylinderExtents, Extent, ExtentArray};
pub use plan::CylinderPlan;
pub use validate::{length_range, outer_length, resolve_dimensions};
