//! # Mesh Errors
//!
//! Error types for mesh construction and mesh file I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building, reading or writing meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed caller input (names, counts, formats)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Malformed mesh file content
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while handling a specific file
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<MeshError>,
    },
}

impl MeshError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Attaches the path of the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_file_display() {
        let err = MeshError::parse(3, "bad vertex").in_file("cyl.obj");
        let text = err.to_string();
        assert!(text.starts_with("cyl.obj"));
        assert!(text.contains("line 3"));
    }
}
