// scrubfile-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for running the substitution pass over an in-memory
//! string, without any file I/O.

use crate::engine::SanitizationEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::SanitizeError;

/// Applies `patterns` in order to `content` and returns the result.
///
/// # Arguments
///
/// * `content` - The string to be sanitized.
/// * `patterns` - Regular expressions, applied one after another.
/// * `redact` - Replace matches with `[REDACTED]` instead of deleting them.
pub fn headless_sanitize_string<S: AsRef<str>>(
    content: &str,
    patterns: &[S],
    redact: bool,
) -> Result<String, SanitizeError> {
    let engine = RegexEngine::new(patterns, redact)?;
    Ok(engine.sanitize(content).content)
}
