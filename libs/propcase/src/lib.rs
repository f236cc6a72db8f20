//! # Propcase
//!
//! Prepares a propeller simulation case: nested refinement cylinders are
//! sized from the propeller bounds, written as tagged surface meshes, and
//! the solver dictionaries are rendered from templates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use propcase::{generate_case, CaseSettings};
//! use std::path::Path;
//!
//! let settings = CaseSettings::from_path(Path::new("case.toml"))?;
//! let report = generate_case(Path::new("case"), Path::new("propeller.obj"), &settings)?;
//! println!("outer cylinder spans {:?}", report.outer_range);
//! # Ok::<(), propcase::CaseError>(())
//! ```

pub mod error;
pub mod parameters;
pub mod pipeline;
pub mod settings;

pub use error::{CaseError, CaseResult};
pub use parameters::{case_dictionary, CaseInputs};
pub use pipeline::{generate_case, plan_cylinders, propeller_bounds, CaseReport};
pub use settings::{BlockSettings, CaseSettings};
