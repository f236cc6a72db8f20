//! # Config Crate
//!
//! Centralized configuration constants for the propeller case generator.
//! All magic numbers shared between the geometry, mesh and template crates
//! are defined here so that every stage of the pipeline agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GEOMETRY_TOLERANCE, DEFAULT_DECOMPOSITION};
//!
//! // Use GEOMETRY_TOLERANCE for coordinate comparisons
//! let a = 0.3_f64;
//! let b = 0.1 + 0.2;
//! assert!((a - b).abs() < GEOMETRY_TOLERANCE);
//!
//! // Solver decomposition defaults to 1 x 4 x 1 subdomains
//! assert_eq!(DEFAULT_DECOMPOSITION, [1, 4, 1]);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants, no I/O
//! - **Solver Compatible**: Names and suffixes match the template tree layout

pub mod constants;
