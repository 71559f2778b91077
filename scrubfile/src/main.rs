// scrubfile/src/main.rs
//! scrubfile entry point.
//!
//! Parses arguments, installs the logger at the requested level, runs the
//! sanitize command and maps the result to the process exit code.

use clap::Parser;
use log::{debug, error};
use std::process::ExitCode;

use scrubfile::cli::Cli;
use scrubfile::logger;
use scrubfile::run_sanitize;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are not failures.
            return if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
        }
    };

    logger::init_logger(cli.log_level);
    debug!("scrubfile started. Version: {}", env!("CARGO_PKG_VERSION"));

    match run_sanitize(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Sanitization process failed: {:#}", e);
            ExitCode::from(1)
        }
    }
}
