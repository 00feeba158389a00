//! Error types for TikZ rendering.

use mesh_contour::ContourError;
use thiserror::Error;

/// Errors that can occur while producing TikZ output.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Mesh, contour or clipping failure.
    #[error(transparent)]
    Contour(#[from] ContourError),

    /// Style or input JSON could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a style file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A style value is out of range or unknown.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    /// Plot data is inconsistent (mismatched lengths, missing values).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl RenderError {
    /// Create an InvalidStyle error.
    pub fn invalid_style(msg: impl Into<String>) -> Self {
        Self::InvalidStyle(msg.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
