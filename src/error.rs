//! Error types for mdnav operations.

use thiserror::Error;

/// Errors that can occur during outline extraction or document processing.
///
/// Recoverable page-level conditions (unmatched container markers, missing
/// scroll targets, empty slugs) are diagnostics, not errors: they are logged
/// and the page degrades gracefully. Only operations that genuinely cannot
/// proceed return `Err`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid heading level range: {min}..={max} (levels must be 1-6, min <= max)")]
    InvalidLevelRange { min: u8, max: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
