//! Error types for mesh topology, contour tracing and clipping.

use thiserror::Error;

/// Errors that can occur while building topology, tracing contours or
/// clipping segments.
///
/// Empty outcomes (a level with no contour, a segment outside the viewport)
/// are not errors; they come back as empty collections or
/// [`ClipResult::Outside`](crate::clip::ClipResult::Outside).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    /// The mesh connectivity or coordinate arrays are malformed.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    /// A query was issued with arguments that cannot describe a valid request.
    #[error("degenerate query: {0}")]
    DegenerateQuery(String),

    /// Interpolation was requested across an edge with equal end values.
    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),
}

impl ContourError {
    /// Create an InvalidMesh error.
    pub fn invalid_mesh(msg: impl Into<String>) -> Self {
        Self::InvalidMesh(msg.into())
    }

    /// Create a DegenerateQuery error.
    pub fn degenerate_query(msg: impl Into<String>) -> Self {
        Self::DegenerateQuery(msg.into())
    }

    /// Create a NumericDegeneracy error.
    pub fn numeric_degeneracy(msg: impl Into<String>) -> Self {
        Self::NumericDegeneracy(msg.into())
    }
}

/// Result type for mesh-contour operations.
pub type Result<T> = std::result::Result<T, ContourError>;
