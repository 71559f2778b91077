// scrubfile-core/src/lib.rs
//! # scrubfile Core Library
//!
//! `scrubfile-core` holds the platform-independent logic behind `scrubfile`:
//! it compiles an ordered list of regular expressions and applies them one
//! after another to a text buffer, deleting every match or replacing it with
//! the literal marker `[REDACTED]`.
//!
//! ## Modules
//!
//! * `config`: The per-run [`SanitizeRequest`] and the optional YAML [`PatternFile`].
//! * `sanitizers`: Pattern compilation.
//! * `engine`: The [`SanitizationEngine`] trait.
//! * `engines`: The regex implementation of that trait.
//! * `sanitizer`: File-level [`sanitize_file`], with path validation and I/O.
//! * `headless`: One-shot sanitization of an in-memory string.
//! * `errors`: The [`SanitizeError`] taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use scrubfile_core::headless_sanitize_string;
//!
//! let out = headless_sanitize_string("call 555-1234 now", &["[0-9]{3}-[0-9]{4}"], false)?;
//! assert_eq!(out, "call  now");
//! # Ok::<(), scrubfile_core::SanitizeError>(())
//! ```
//!
//! ## Error Handling
//!
//! Fallible library calls return [`SanitizeError`]. Loading a pattern file
//! returns `anyhow::Result` so that path context travels with the error.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod sanitizer;
pub mod sanitizers;

pub use config::{merge_patterns, PatternFile, SanitizeRequest, REDACTION_MARKER};
pub use engine::{EngineOutput, SanitizationEngine};
pub use engines::regex_engine::RegexEngine;
pub use errors::{ErrorKind, SanitizeError};
pub use headless::headless_sanitize_string;
pub use sanitizer::{sanitize, sanitize_file, SanitizeOutcome};
pub use sanitizers::compiler::{compile_patterns, CompiledPattern, CompiledPatterns};
