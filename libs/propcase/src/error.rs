//! # Case Errors
//!
//! Top-level error type, wrapping the errors of every stage.

use case_template::TemplateError;
use cylinder_geometry::GeometryError;
use cylinder_mesh::MeshError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort case generation.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Cylinder sizing or placement failed
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Mesh reading, building or writing failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Template rendering failed
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Inconsistent settings
    #[error("Invalid settings: {message}")]
    Settings { message: String },

    /// Settings file is not valid TOML for [`crate::CaseSettings`]
    #[error("Cannot parse settings {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Filesystem failure outside the mesh and template stages
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CaseError {
    /// Creates a settings error.
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with its path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by caller input rather than by computed
    /// geometry or the filesystem.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Settings { .. } | Self::Parse { .. } => true,
            Self::Geometry(err) => err.is_invalid_input(),
            Self::Mesh(MeshError::InvalidInput { .. }) => true,
            Self::Template(TemplateError::InvalidInput { .. }) => true,
            _ => false,
        }
    }
}

/// Result type alias for case generation.
pub type CaseResult<T> = Result<T, CaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_classification() {
        assert!(CaseError::settings("3 names for 4 cylinders").is_invalid_input());
        assert!(CaseError::from(GeometryError::invalid_input("1D")).is_invalid_input());
        let not_enclosed = GeometryError::NotEnclosed {
            index: 0,
            min: -3.0,
            max: 0.0,
            outer_min: -2.0,
            outer_max: 0.0,
        };
        assert!(!CaseError::from(not_enclosed).is_invalid_input());
    }

    #[test]
    fn test_transparent_display() {
        let err = CaseError::from(TemplateError::missing_key("maxx"));
        assert_eq!(err.to_string(), "Missing key: 'maxx'");
    }
}
