//! `remove_empty_strings`: drop object members whose value
//! is `""`, recursively. Symmetric to [`super::remove_nulls`] — empty
//! strings nested inside arrays are left alone.

use crate::value::{Object, Value};

pub fn remove_empty_strings(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Object::new();
            for (k, v) in map {
                if v.is_empty_string() {
                    continue;
                }
                out.insert(k.clone(), remove_empty_strings(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(remove_empty_strings).collect()),
        scalar => scalar.clone(),
    }
}
