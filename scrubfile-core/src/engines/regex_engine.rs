// scrubfile-core/src/engines/regex_engine.rs
//! A `SanitizationEngine` implementation that applies an ordered list of
//! regular expressions, deleting or redacting every match.
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::replacement_for;
use crate::engine::{EngineOutput, SanitizationEngine};
use crate::errors::SanitizeError;
use crate::sanitizers::compiler::{compile_patterns, CompiledPattern, CompiledPatterns};

#[derive(Debug)]
pub struct RegexEngine {
    compiled: CompiledPatterns,
    replacement: &'static str,
}

impl RegexEngine {
    /// Compiles `patterns` and builds an engine that deletes matches, or
    /// replaces them with `[REDACTED]` when `redact` is set.
    pub fn new<S: AsRef<str>>(patterns: &[S], redact: bool) -> Result<Self, SanitizeError> {
        Ok(Self {
            compiled: compile_patterns(patterns)?,
            replacement: replacement_for(redact),
        })
    }

    /// Substitutes every leftmost, non-overlapping match of one pattern.
    /// The replacement is inserted literally; `$1` and friends are not expanded.
    ///
    /// Scanning resumes at the end of each match, so an empty match directly
    /// after a non-empty one is also replaced. After an empty match the scan
    /// moves forward one character.
    fn apply(&self, pattern: &CompiledPattern, content: &str) -> (String, usize) {
        let mut out = String::with_capacity(content.len());
        let mut count = 0usize;
        let mut last = 0;
        let mut pos = 0;

        while let Some(m) = pattern.regex.find_at(content, pos) {
            out.push_str(&content[last..m.start()]);
            out.push_str(self.replacement);
            count += 1;
            last = m.end();

            pos = if m.is_empty() {
                match content[m.end()..].chars().next() {
                    Some(c) => m.end() + c.len_utf8(),
                    None => break,
                }
            } else {
                m.end()
            };
        }
        out.push_str(&content[last..]);
        (out, count)
    }
}

impl SanitizationEngine for RegexEngine {
    fn sanitize(&self, content: &str) -> EngineOutput {
        let mut buffer = content.to_string();
        let mut replacements = 0;

        for pattern in self.compiled.iter() {
            let (next, count) = self.apply(pattern, &buffer);
            buffer = next;
            replacements += count;
            debug!("Successfully applied pattern: {} ({} replacements)", pattern.source, count);
        }

        EngineOutput { content: buffer, replacements }
    }

    fn compiled_patterns(&self) -> &CompiledPatterns {
        &self.compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(patterns: &[&str], redact: bool, input: &str) -> EngineOutput {
        RegexEngine::new(patterns, redact).unwrap().sanitize(input)
    }

    #[test]
    fn test_deletes_phone_number() {
        let out = run(&["[0-9]{3}-[0-9]{4}"], false, "call 555-1234 now");
        assert_eq!(out.content, "call  now");
        assert_eq!(out.replacements, 1);
    }

    #[test]
    fn test_redacts_email() {
        let out = run(
            &[r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"],
            true,
            "email me at a@b.com",
        );
        assert_eq!(out.content, "email me at [REDACTED]");
    }

    #[test]
    fn test_no_patterns_is_identity() {
        let out = run(&[], true, "untouched\r\ntext\n");
        assert_eq!(out.content, "untouched\r\ntext\n");
        assert_eq!(out.replacements, 0);
    }

    #[test]
    fn test_every_non_overlapping_match_is_replaced() {
        let out = run(&["aa"], true, "aaaaa");
        assert_eq!(out.content, "[REDACTED][REDACTED]a");
        assert_eq!(out.replacements, 2);
    }

    #[test]
    fn test_later_pattern_sees_earlier_output() {
        // The first pass introduces "[REDACTED]"; the second pass matches inside it.
        let out = run(&["secret", "REDACTED"], true, "a secret here");
        assert_eq!(out.content, "a [[REDACTED]] here");
    }

    #[test]
    fn test_deletion_can_expose_new_match() {
        // Deleting "X" joins "ab" + "c" into "abc", which the second pattern then removes.
        let sequential = run(&["X", "abc"], false, "abXc");
        assert_eq!(sequential.content, "");

        // Applied the other way round, "abc" is never present.
        let reversed = run(&["abc", "X"], false, "abXc");
        assert_eq!(reversed.content, "abc");
    }

    #[test]
    fn test_empty_match_after_non_empty_match_is_replaced() {
        let out = run(&["x*"], true, "abxd");
        assert_eq!(out.content, "[REDACTED]a[REDACTED]b[REDACTED][REDACTED]d[REDACTED]");
        assert_eq!(out.replacements, 5);
    }

    #[test]
    fn test_empty_pattern_steps_over_multibyte_chars() {
        let out = run(&[""], false, "é€");
        assert_eq!(out.content, "é€");
        assert_eq!(out.replacements, 3);

        let out = run(&["x*"], true, "é");
        assert_eq!(out.content, "[REDACTED]é[REDACTED]");
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let out = run(&["(d)(e)"], true, "de");
        assert_eq!(out.content, "[REDACTED]");
    }
}
