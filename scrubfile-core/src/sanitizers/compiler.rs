//! compiler.rs - Turns caller-supplied pattern strings into compiled regexes.
//!
//! Compilation happens once per run, before any file content is read, so an
//! invalid pattern aborts the run without touching the output file.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::SanitizeError;

/// Upper bound on the compiled size of a single pattern.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled pattern together with the string it came from.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The pattern exactly as supplied by the caller.
    pub source: String,
    pub regex: Regex,
}

/// Compiled patterns in application order.
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledPatterns {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledPattern> {
        self.patterns.iter()
    }
}

/// Compiles a single pattern string.
fn compile_pattern(pattern: &str) -> Result<CompiledPattern, SanitizeError> {
    let regex = RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|source| SanitizeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(CompiledPattern { source: pattern.to_string(), regex })
}

/// Compiles every pattern in order, stopping at the first one that fails.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<CompiledPatterns, SanitizeError> {
    debug!("Starting compilation of {} patterns.", patterns.len());

    let compiled = patterns
        .iter()
        .map(|p| compile_pattern(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Finished compiling patterns. Total compiled: {}.", compiled.len());
    Ok(CompiledPatterns { patterns: compiled })
}
