// scrubfile/src/logger.rs
//! Logger setup for the scrubfile binary.
//!
//! The threshold comes from the command line and is passed in explicitly;
//! `RUST_LOG` is not consulted. Lines look like
//! `2026-01-02 03:04:05,678 - INFO - message` and go to stderr.

use chrono::Local;
use env_logger::{Builder, Target};
use log::Level;
use std::io::Write;

use crate::cli::LogLevel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Display name for a record's level.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Builds a configured, not yet installed, logger.
pub fn build_logger(level: LogLevel) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_level_filter())
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                Local::now().format(TIMESTAMP_FORMAT),
                level_name(record.level()),
                record.args()
            )
        });
    builder
}

/// Installs the global logger. A second call is a no-op.
pub fn init_logger(level: LogLevel) {
    let _ = build_logger(level).try_init();
}
