//! # Primitives
//!
//! Generated reference shapes.

mod cylinder;

pub use cylinder::reference_cylinder;
