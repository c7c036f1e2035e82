//! Crate-level error types.

use thiserror::Error;

/// Errors produced by the molpov crate.
///
/// Unknown bond classes, zero radii and degenerate bond directions are not
/// errors; they are handled by the emitters without surfacing anything here.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing to, flushing or creating the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML options parsing/serialization failure.
    #[error("options parse error: {0}")]
    OptionsParse(String),
    /// JSON scene snapshot parsing failure.
    #[error("scene parse error: {0}")]
    SceneParse(String),
}
