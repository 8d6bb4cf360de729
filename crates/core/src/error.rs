//! Error types shared by the gradient model, codec, and session.

use thiserror::Error;

/// Everything that can go wrong inside cmap-maker-core.
///
/// All variants are recoverable at the operation boundary: a failed
/// operation never leaves the session's gradient half-edited.
#[derive(Debug, Error)]
pub enum CmapError {
    /// Rejected edit: duplicate stop position, boundary-stop removal,
    /// out-of-range position or sample count, unknown preset.
    #[error("validation error: {0}")]
    Validation(String),

    /// Stop index out of range for the current gradient.
    #[error("stop index {index} out of range (gradient has {count} stops)")]
    Index { index: usize, count: usize },

    /// The colormap file does not match any accepted shape.
    #[error("format error: {0}")]
    Format(String),

    /// Underlying file I/O failure; the OS message is preserved.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CmapError>;
