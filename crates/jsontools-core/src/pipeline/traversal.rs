//! Fused single-traversal evaluator.
//!
//! Every node is visited exactly once and, while there, runs all queued
//! operations in a fixed three-phase order:
//!
//! 1. regex-key rewrite (`replace_keys` descriptors, in queue order)
//! 2. removal filters (`remove_nulls` / `remove_empty_strings`, in queue order)
//! 3. regex-value rewrite (`replace_values` descriptors, in queue order)
//!
//! `flatten`, if queued, is not part of this per-node order: it is a
//! reshaping pass that runs once over the already-transformed tree, after
//! every other operation.

use super::descriptor::Descriptor;
use super::mask::CapabilityMask;
use crate::value::{Object, Value};

/// Run every queued descriptor over `value` in a single traversal.
pub fn apply(value: &Value, descriptors: &[Descriptor], mask: CapabilityMask) -> Value {
    match value {
        Value::Object(map) => apply_object(map, descriptors, mask),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| apply(v, descriptors, mask))
                .collect(),
        ),
        Value::String(s) => apply_string_leaf(s, descriptors, mask),
        scalar => scalar.clone(),
    }
}

fn apply_object(map: &Object, descriptors: &[Descriptor], mask: CapabilityMask) -> Value {
    let mut out = Object::new();
    for (key, value) in map {
        let rewritten_key = if mask.has_replace_keys() {
            rewrite_key(key, descriptors)
        } else {
            key.clone()
        };

        if mask.has_removal() && is_removed(value, descriptors) {
            continue;
        }

        // Position comes from the rewritten key's first insertion; value
        // comes from whichever member wrote last.
        out.insert(rewritten_key, apply(value, descriptors, mask));
    }
    Value::Object(out)
}

fn rewrite_key(key: &str, descriptors: &[Descriptor]) -> String {
    for descriptor in descriptors {
        if let Descriptor::ReplaceKeys {
            pattern,
            replacement,
        } = descriptor
        {
            if pattern.is_match(key) {
                return replacement.clone();
            }
        }
    }
    key.to_string()
}

fn is_removed(value: &Value, descriptors: &[Descriptor]) -> bool {
    for descriptor in descriptors {
        match descriptor {
            Descriptor::RemoveNulls if value.is_null() => return true,
            Descriptor::RemoveEmptyStrings if value.is_empty_string() => return true,
            _ => {}
        }
    }
    false
}

fn apply_string_leaf(s: &str, descriptors: &[Descriptor], mask: CapabilityMask) -> Value {
    if !mask.has_replace_values() {
        return Value::from(s);
    }
    for descriptor in descriptors {
        if let Descriptor::ReplaceValues {
            pattern,
            replacement,
        } = descriptor
        {
            if pattern.is_match(s) {
                return Value::from(replacement.as_str());
            }
        }
    }
    Value::from(s)
}
