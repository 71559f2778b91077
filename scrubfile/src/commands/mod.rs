//! Command implementations for the scrubfile CLI.

pub mod sanitize;
