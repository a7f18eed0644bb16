//! Error types for theme document handling.
//!
//! The resolution engine itself never fails: malformed declarations are
//! skipped, unknown colors fall back to a mix expression, and unknown
//! element names resolve to the palette fallback. The only fallible
//! surface is reading and writing the portable theme document.

use thiserror::Error;

/// Errors that can occur while importing or exporting a theme document.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme document could not be (de)serialized as JSON.
    #[error("theme document error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading a theme document.
    #[error("I/O error reading theme document")]
    Io(#[from] std::io::Error),
}
