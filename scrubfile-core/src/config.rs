//! Configuration management for `scrubfile-core`.
//!
//! This module defines the request built once per invocation and the optional
//! YAML pattern file that can supply patterns alongside the command line.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Literal marker substituted for every match in redaction mode.
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// A single sanitization request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Applied in order; each one sees the output of the previous.
    pub patterns: Vec<String>,
    /// Replace matches with [`REDACTION_MARKER`] instead of deleting them.
    pub redact: bool,
}

impl SanitizeRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        patterns: Vec<String>,
        redact: bool,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            patterns,
            redact,
        }
    }

    /// The text each match is replaced with.
    pub fn replacement(&self) -> &'static str {
        replacement_for(self.redact)
    }
}

pub(crate) fn replacement_for(redact: bool) -> &'static str {
    if redact { REDACTION_MARKER } else { "" }
}

/// Patterns loaded from a YAML file:
///
/// ```yaml
/// patterns:
///   - '[0-9]{16}'
///   - '[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}'
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternFile {
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl PatternFile {
    /// Loads patterns from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading patterns from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read patterns file {}", path.display()))?;
        let file: PatternFile = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse patterns file {}", path.display()))?;

        info!("Loaded {} patterns from file {}.", file.patterns.len(), path.display());
        Ok(file)
    }
}

/// Joins file-supplied patterns with command-line patterns. File patterns run first.
pub fn merge_patterns(file: Option<PatternFile>, cli_patterns: Vec<String>) -> Vec<String> {
    match file {
        Some(file) => {
            let mut merged = file.patterns;
            merged.extend(cli_patterns);
            merged
        }
        None => cli_patterns,
    }
}
