//! errors.rs - Custom error types for the scrubfile-core library.
//!
//! Every failure a sanitization run can hit is reported as a [`SanitizeError`].
//! Callers that only need the category can branch on [`SanitizeError::kind`].
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `scrubfile-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Input path is not a file: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("Invalid regular expression pattern: {pattern}. Error: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// Coarse error category, mirroring the variants of [`SanitizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    InvalidPattern,
    Io,
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "NotFound",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::InvalidPattern => "InvalidPattern",
            ErrorKind::Io => "IOError",
            ErrorKind::Unexpected => "Unexpected",
        };
        f.write_str(name)
    }
}

impl SanitizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SanitizeError::NotFound(_) => ErrorKind::NotFound,
            SanitizeError::InvalidInput(_) => ErrorKind::InvalidInput,
            SanitizeError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            SanitizeError::Io { .. } => ErrorKind::Io,
            SanitizeError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SanitizeError::Io { path: path.into(), source }
    }
}
