// scrubfile/src/lib.rs
//! # scrubfile CLI Application
//!
//! This crate provides the command-line front end for `scrubfile-core`:
//! argument parsing, logger setup and the sanitize command runner.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::sanitize::run_sanitize;
