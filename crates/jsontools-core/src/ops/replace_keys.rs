//! `replace_keys`: rename object members whose key
//! whole-string-matches a compiled pattern to a literal replacement,
//! recursively.

use crate::regex_adapter::CompiledPattern;
use crate::value::{Object, Value};

pub fn replace_keys(value: &Value, pattern: &CompiledPattern, replacement: &str) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Object::new();
            for (k, v) in map {
                let new_key = if pattern.is_match(k) {
                    replacement.to_string()
                } else {
                    k.clone()
                };
                // A later member whose renamed key collides with an earlier
                // one overwrites in place: position from the first insertion,
                // value from the latest write.
                out.insert(new_key, replace_keys(v, pattern, replacement));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| replace_keys(v, pattern, replacement))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}
