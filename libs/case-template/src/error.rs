//! # Template Errors
//!
//! Error types for dictionary lookups, template parsing and rendering.
//!
//! Errors are `Clone`: a computed entry that fails is remembered in the
//! evaluation snapshot and its error is handed to every entry that reads it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the template engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    /// A referenced name has no entry, or is only defined later.
    #[error("Missing key: '{key}'")]
    MissingKey { key: String },

    /// A computed entry depends on an entry evaluated after it.
    #[error("Forward reference: entry '{entry}' depends on '{key}', which is evaluated after it")]
    ForwardReference { entry: String, key: String },

    /// A token prefix not followed by a valid name.
    #[error("Invalid placeholder at line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },

    /// No balanced delimiter pair after a block marker.
    #[error("Unbalanced block: no matching '{delimiter}' pair after marker '{marker}'")]
    Unbalanced { marker: String, delimiter: char },

    /// An entry holds a value of the wrong kind.
    #[error("Type mismatch: '{key}' should be {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    /// Malformed caller input.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Filesystem failure.
    #[error("I/O error on {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// Error raised while rendering a specific file.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<TemplateError>,
    },
}

impl TemplateError {
    /// Creates a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: &Path, error: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    /// Attaches the path of the file being rendered.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TemplateError::Unbalanced {
            marker: "refinementRegions".into(),
            delimiter: '{',
        };
        assert!(err.to_string().contains("refinementRegions"));
        assert!(err.to_string().contains('{'));

        let err = TemplateError::missing_key("minx").in_file("system/blockMeshDict.tmpl");
        assert_eq!(
            err.to_string(),
            "system/blockMeshDict.tmpl: Missing key: 'minx'"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemplateError>();
    }
}
