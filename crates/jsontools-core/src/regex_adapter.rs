//! Regex engine adapter.
//!
//! Wraps [`regex::bytes::Regex`] so the rest of this crate only depends on
//! two operations: "does this whole string match" and "replace the whole
//! string". Patterns are anchored to whole-string match by default, and are
//! compiled once per builder/operation invocation and reused across every
//! node visited during that run.

use crate::error::PatternError;
use regex::bytes::Regex;

/// A compiled, whole-string-anchored pattern.
///
/// Replacement is always the literal replacement string passed at
/// construction — this crate does not expand `\1`..`\9` or `\&`
/// backreferences (documented limitation, not an oversight).
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `pattern`, anchoring it to match the whole input string.
    ///
    /// A pattern that already anchors itself with `^`/`$` is unaffected —
    /// wrapping in `^(?:...)$` is idempotent for an already-anchored inner
    /// pattern.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|e| PatternError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// Whether `text` matches the whole pattern.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text.as_bytes())
    }
}
