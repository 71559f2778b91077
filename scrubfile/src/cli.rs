// scrubfile/src/cli.rs
//! This file defines the command-line interface (CLI) for the scrubfile application.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "scrubfile",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitizes a file by removing or redacting sensitive data patterns.",
    long_about = "scrubfile reads a text file, applies each regular expression in order, and writes the result to an output file. Matches are deleted by default, or replaced with '[REDACTED]' when --redact is given. Each pattern runs on the output of the previous one.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(value_name = "INPUT_FILE", help = "Path to the input file.")]
    pub input_file: PathBuf,

    #[arg(value_name = "OUTPUT_FILE", help = "Path to the output file.")]
    pub output_file: PathBuf,

    #[arg(
        long,
        value_name = "REGEX",
        num_args = 1..,
        required_unless_present = "patterns_file",
        help = "Regular expression patterns to sanitize. Example: --patterns '[0-9]{16}' '[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}'"
    )]
    pub patterns: Vec<String>,

    #[arg(long = "patterns-file", value_name = "FILE", help = "Load patterns from a YAML file. They run before any --patterns values.")]
    pub patterns_file: Option<PathBuf>,

    #[arg(long, help = "Replace matched patterns with '[REDACTED]'. If not set, matches will be removed.")]
    pub redact: bool,

    #[arg(
        long = "log_level",
        visible_alias = "log-level",
        value_name = "LEVEL",
        value_enum,
        default_value_t = LogLevel::Info,
        help = "Set the logging level."
    )]
    pub log_level: LogLevel,
}

/// Severity threshold for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    /// There is no level above ERROR in the `log` facade; this behaves like ERROR.
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}
