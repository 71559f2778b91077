// scrubfile-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait separates "how matches are substituted" from "where the text comes
//! from", so the file-level sanitizer and the headless string helper share one
//! implementation.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizers::compiler::CompiledPatterns;

/// The text produced by one engine pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOutput {
    pub content: String,
    /// Total number of substitutions across all patterns.
    pub replacements: usize,
}

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Applies every compiled pattern, in order, to `content`.
    ///
    /// Each pattern runs over the output of the one before it. Patterns are
    /// compiled up front, so a pass cannot fail.
    fn sanitize(&self, content: &str) -> EngineOutput;

    /// Returns the patterns used by the engine.
    fn compiled_patterns(&self) -> &CompiledPatterns;
}
