//! # Geometry Errors
//!
//! Error types for cylinder sizing, placement and validation.
//!
//! ## Error Policy
//!
//! - Malformed caller input is reported as [`GeometryError::InvalidInput`]
//! - Computed geometry breaking a nesting invariant gets its own variant
//! - Every variant carries the offending indices and values

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while planning the refinement cylinders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Malformed shapes or combinations of caller-supplied arrays.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A cylinder is smaller than its inner neighbour along some axis.
    #[error(
        "Non-monotonic dimensions: cylinder {index} has extent {extent} along axis {axis}, \
         smaller than {previous_extent} of cylinder {previous}"
    )]
    NonMonotonic {
        /// Index of the offending cylinder.
        index: usize,
        /// Index of its inner neighbour.
        previous: usize,
        /// Axis along which the order breaks.
        axis: usize,
        /// Extent of the offending cylinder.
        extent: f64,
        /// Extent of the inner neighbour.
        previous_extent: f64,
    },

    /// A resolved extent is zero, negative or not a number.
    #[error("Non-positive extent: cylinder {index} has extent {extent} along axis {axis}")]
    NonPositiveExtent { index: usize, axis: usize, extent: f64 },

    /// An inner cylinder sticks out of the outer cylinder along the length axis.
    #[error(
        "Outer cylinder does not enclose inner cylinders: cylinder {index} spans \
         [{min}, {max}], outer cylinder spans [{outer_min}, {outer_max}]"
    )]
    NotEnclosed {
        index: usize,
        min: f64,
        max: f64,
        outer_min: f64,
        outer_max: f64,
    },

    /// No room between the inner cylinders and the outer cylinder wall.
    #[error(
        "No radial gap: outer cylinder radius {outer_radius} does not exceed \
         inner cylinder radius {inner_radius}"
    )]
    NoRadialGap { inner_radius: f64, outer_radius: f64 },
}

impl GeometryError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by malformed input rather than by
    /// computed geometry.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================
