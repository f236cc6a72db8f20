//! # Cylinder Mesh
//!
//! Surface meshes for the refinement cylinders around a propeller.
//!
//! ## Contents
//!
//! - [`Mesh`]: vertices, polygons and named regions
//! - [`primitives::reference_cylinder`]: unit cylinder along Y
//! - [`io`]: OBJ reading/writing and OBJ/STL point extraction
//! - [`builder`]: scaling, placement, region tagging and writing
//!
//! ## Example
//!
//! ```rust
//! use cylinder_geometry::CylinderPlan;
//! use cylinder_mesh::{build_cylinders, primitives::reference_cylinder};
//! use glam::DVec3;
//!
//! let plan = CylinderPlan::from_parts(
//!     vec![DVec3::ONE, DVec3::splat(2.0)],
//!     vec![DVec3::new(0.0, -0.5, 0.0), DVec3::new(0.0, 1.0, 0.0)],
//! ).unwrap();
//! let names = vec!["cylinder0".to_string(), "outerCylinder".to_string()];
//! let cylinders = build_cylinders(&reference_cylinder(32).unwrap(), &plan, &names).unwrap();
//! assert_eq!(cylinders[1].mesh.regions().len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod io;
pub mod mesh;
pub mod primitives;

pub use builder::{
    build_cylinders, generate_cylinder_meshes, outer_length_range, place_cylinder, tag_regions,
    write_cylinders, CylinderMesh, CylinderRole,
};
pub use error::{MeshError, MeshResult};
pub use mesh::{Mesh, Region};
