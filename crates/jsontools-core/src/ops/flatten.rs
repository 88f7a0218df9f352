//! Flattener: nested JSON → a single `Object` of dotted
//! paths to leaf values.

use super::common::walk_object_members;
use crate::path::PathBuilder;
use crate::value::{Object, Value};

/// Flatten a JSON value into an `Object` mapping dotted-path strings to leaf
/// values.
///
/// Three root-level quirks, all load-bearing for the test suite:
/// - An empty top-level object flattens to `{}`, not `{"": {}}`.
/// - A top-level array is returned unchanged — it is *not* indexed, even
///   though an array nested inside an object is. This asymmetry is a
///   documented legacy quirk, not a bug.
/// - A top-level scalar is wrapped as a single-member object under the
///   empty-string key.
pub fn flatten(value: &Value) -> Value {
    match value {
        Value::Object(map) if map.is_empty() => Value::object(vec![]),
        Value::Object(map) => {
            let mut out = Object::new();
            let mut path = PathBuilder::new();
            walk_object_members(map, &mut path, &mut |p, leaf| {
                out.insert(p.to_string(), leaf.clone());
            });
            Value::Object(out)
        }
        Value::Array(_) => value.clone(),
        scalar => Value::object(vec![(String::new(), scalar.clone())]),
    }
}
