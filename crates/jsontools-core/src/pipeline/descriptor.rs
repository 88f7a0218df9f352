//! Queued pipeline operations.
//!
//! A descriptor list preserves queue order: two `replace_keys` calls with
//! different patterns are both kept, each with its own compiled pattern, and
//! both run — in the order they were queued — during the key-rewrite phase
//! of every node.

use crate::regex_adapter::CompiledPattern;

/// One queued operation, carrying its own compiled state.
#[derive(Debug, Clone)]
pub enum Descriptor {
    RemoveNulls,
    RemoveEmptyStrings,
    ReplaceKeys {
        pattern: CompiledPattern,
        replacement: String,
    },
    ReplaceValues {
        pattern: CompiledPattern,
        replacement: String,
    },
}
