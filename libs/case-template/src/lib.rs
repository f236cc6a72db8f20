//! # Case Template
//!
//! Renders solver configuration files from `.tmpl` templates.
//!
//! ## Pipeline
//!
//! ```text
//! template text → block replacement → token substitution → case file
//!                                          ↑
//!                                   LazyDict snapshot
//! ```
//!
//! ## Example
//!
//! ```rust
//! use case_template::{render_text, BlockRule, Delimiter, LazyDict, Repeat};
//!
//! let mut dict = LazyDict::new();
//! dict.insert("names", vec!["cylinder0", "cylinder1"]);
//! dict.insert_template("features", "@{names}.eMesh", Repeat::Broadcast).unwrap();
//!
//! let rules = [BlockRule::new("files", Delimiter::Paren, "@features")];
//! let text = render_text(&dict, "files ( x );", &rules).unwrap();
//! assert_eq!(text, "files ( cylinder0.eMesh\ncylinder1.eMesh );");
//! ```

pub mod blocks;
mod cursor;
pub mod error;
pub mod files;
pub mod lazy_dict;
pub mod template;
pub mod value;

pub use blocks::{find_balanced, replace_blocks, BlockRule, Delimiter};
pub use error::{TemplateError, TemplateResult};
pub use files::{output_path, render_text, render_tree, CaseFiles, DiskFiles, InMemoryFiles};
pub use lazy_dict::{LazyDict, Repeat, Snapshot};
pub use template::Template;
pub use value::Value;
