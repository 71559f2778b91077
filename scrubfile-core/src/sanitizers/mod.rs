//! Pattern handling for scrubfile.
//!
//! Compilation lives here so that the engine only ever sees patterns that are
//! already known to be valid.

pub mod compiler;
