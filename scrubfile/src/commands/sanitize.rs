//! Sanitize command implementation: turns parsed CLI arguments into a
//! request and runs it.

use anyhow::{Context, Result};
use log::debug;

use scrubfile_core::{merge_patterns, sanitize_file, PatternFile, SanitizeRequest};

use crate::cli::Cli;

/// Builds the request from CLI arguments, loading `--patterns-file` if given.
pub fn build_request(cli: &Cli) -> Result<SanitizeRequest> {
    let pattern_file = cli
        .patterns_file
        .as_deref()
        .map(PatternFile::load_from_file)
        .transpose()
        .context("Failed to load patterns file")?;

    let patterns = merge_patterns(pattern_file, cli.patterns.clone());
    Ok(SanitizeRequest::new(
        &cli.input_file,
        &cli.output_file,
        patterns,
        cli.redact,
    ))
}

/// The main operation runner for the scrubfile CLI.
pub fn run_sanitize(cli: &Cli) -> Result<()> {
    let request = build_request(cli)?;
    debug!(
        "Starting sanitize operation with {} patterns.",
        request.patterns.len()
    );

    let outcome = sanitize_file(&request)?;

    debug!(
        "Sanitize operation completed. Patterns applied: {}, replacements: {}, bytes written: {}",
        outcome.patterns_applied, outcome.replacements, outcome.bytes_written
    );
    Ok(())
}
