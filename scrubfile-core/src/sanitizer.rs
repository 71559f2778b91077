// scrubfile-core/src/sanitizer.rs
//! File-level sanitization: validate the input path, compile the patterns,
//! read the file, run the engine and write the result.
//!
//! Every failure is logged once here at ERROR with its context and then
//! returned to the caller unchanged.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::SanitizeRequest;
use crate::engine::SanitizationEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::errors::{ErrorKind, SanitizeError};

/// Counters describing a completed run. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub patterns_applied: usize,
    pub replacements: usize,
    pub bytes_written: usize,
}

/// Sanitizes `input` into `output` using `patterns`, deleting matches or
/// replacing them with `[REDACTED]` when `redact` is set.
pub fn sanitize<I, O, S>(input: I, output: O, patterns: &[S], redact: bool) -> Result<SanitizeOutcome, SanitizeError>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
    S: AsRef<str>,
{
    let request = SanitizeRequest::new(
        input.as_ref(),
        output.as_ref(),
        patterns.iter().map(|p| p.as_ref().to_string()).collect(),
        redact,
    );
    sanitize_file(&request)
}

/// Runs one sanitization request end to end.
///
/// Checks run in a fixed order: the input must exist, it must be a regular
/// file, and every pattern must compile. Only then is the input read, so a
/// failed check never creates or modifies the output file.
pub fn sanitize_file(request: &SanitizeRequest) -> Result<SanitizeOutcome, SanitizeError> {
    run(request).inspect_err(log_failure)
}

fn run(request: &SanitizeRequest) -> Result<SanitizeOutcome, SanitizeError> {
    let input = request.input_path.as_path();
    let output = request.output_path.as_path();

    validate_input_path(input)?;

    let engine = RegexEngine::new(&request.patterns, request.redact)?;
    debug!(
        "Compiled {} patterns (mode: {}).",
        engine.compiled_patterns().len(),
        if request.redact { "redact" } else { "delete" }
    );

    let content = fs::read_to_string(input).map_err(|e| SanitizeError::io(input, e))?;
    debug!("Read {} bytes from {}", content.len(), input.display());

    let result = engine.sanitize(&content);

    write_output(output, &result.content)?;

    info!("Successfully sanitized file: {} -> {}", input.display(), output.display());
    Ok(SanitizeOutcome {
        patterns_applied: engine.compiled_patterns().len(),
        replacements: result.replacements,
        bytes_written: result.content.len(),
    })
}

fn validate_input_path(input: &Path) -> Result<(), SanitizeError> {
    let metadata = match fs::metadata(input) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SanitizeError::NotFound(input.to_path_buf()));
        }
        Err(e) => {
            return Err(SanitizeError::Unexpected(format!(
                "Failed to inspect input path {}: {}",
                input.display(),
                e
            )));
        }
    };

    if !metadata.is_file() {
        return Err(SanitizeError::InvalidInput(input.to_path_buf()));
    }
    Ok(())
}

fn write_output(output: &Path, content: &str) -> Result<(), SanitizeError> {
    let mut file = fs::File::create(output).map_err(|e| SanitizeError::io(output, e))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| SanitizeError::io(output, e))
}

fn log_failure(err: &SanitizeError) {
    match err.kind() {
        ErrorKind::NotFound => error!("File not found error: {}", err),
        ErrorKind::InvalidPattern => error!("Pattern error: {}", err),
        ErrorKind::InvalidInput => error!("Invalid input error: {}", err),
        ErrorKind::Io => error!("OS error: {}", err),
        ErrorKind::Unexpected => error!("An unexpected error occurred: {}", err),
    }
}
