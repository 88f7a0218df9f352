//! Shared leaf-walking traversal used by the flattener and the path-type
//! analyzer: descend into non-empty objects and
//! arrays, and treat everything else — scalars, and empty `{}`/`[]` — as a
//! leaf to visit.

use crate::path::PathBuilder;
use crate::value::{Object, Value};

/// Visit every leaf in `value`, calling `visit(path, leaf)` for each.
///
/// Does not special-case the root: callers with their own root-level quirks
/// for top-level scalars or arrays handle those before delegating the
/// interior walk to this function.
pub fn walk_leaves<F: FnMut(&str, &Value)>(value: &Value, path: &mut PathBuilder, visit: &mut F) {
    match value {
        Value::Object(map) if !map.is_empty() => walk_object_members(map, path, visit),
        Value::Array(items) if !items.is_empty() => {
            for (i, v) in items.iter().enumerate() {
                let mark = path.push_index(i);
                walk_leaves(v, path, visit);
                path.pop(mark);
            }
        }
        leaf => visit(path.as_str(), leaf),
    }
}

/// Visit every leaf reachable from a non-empty object's members, without
/// requiring the caller to wrap that object in a [`Value`] first.
pub fn walk_object_members<F: FnMut(&str, &Value)>(
    map: &Object,
    path: &mut PathBuilder,
    visit: &mut F,
) {
    for (k, v) in map {
        let mark = path.push_key(k);
        walk_leaves(v, path, visit);
        path.pop(mark);
    }
}
