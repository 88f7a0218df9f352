//! Path-type analyzer: maps every leaf path to its scalar
//! type name.
//!
//! Unlike [`super::flatten`], this walker has no root-level quirk to
//! replicate — the top-level-array asymmetry is specific to flatten — so
//! the root is walked the same way as any other node.

use super::common::walk_leaves;
use crate::path::PathBuilder;
use crate::value::{Object, Value};

/// Map each fully qualified leaf path to its scalar type name.
pub fn path_types(value: &Value) -> Value {
    let mut out = Object::new();
    let mut path = PathBuilder::new();
    walk_leaves(value, &mut path, &mut |p, leaf| {
        out.insert(p.to_string(), Value::from(leaf.schema_type_name()));
    });
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_scalar_types_for_every_leaf() {
        let input = Value::object(vec![
            ("name".to_string(), Value::from("John")),
            ("age".to_string(), Value::from(30i64)),
            ("score".to_string(), Value::from(95.5f64)),
            ("active".to_string(), Value::from(true)),
            ("data".to_string(), Value::Null),
            (
                "tags".to_string(),
                Value::Array(vec![Value::from("dev"), Value::from("python")]),
            ),
        ]);

        let types = path_types(&input);
        let obj = types.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("string")));
        assert_eq!(obj.get("age"), Some(&Value::from("integer")));
        assert_eq!(obj.get("score"), Some(&Value::from("number")));
        assert_eq!(obj.get("active"), Some(&Value::from("boolean")));
        assert_eq!(obj.get("data"), Some(&Value::from("null")));
        assert_eq!(obj.get("tags[0]"), Some(&Value::from("string")));
        assert_eq!(obj.get("tags[1]"), Some(&Value::from("string")));
        assert_eq!(obj.len(), 6);
    }

    #[test]
    fn non_leaf_containers_emit_no_entry() {
        let input = Value::object(vec![(
            "person".to_string(),
            Value::object(vec![("name".to_string(), Value::from("Alice"))]),
        )]);
        let types = path_types(&input);
        let obj = types.as_object().unwrap();
        assert!(obj.get("person").is_none());
        assert_eq!(obj.get("person.name"), Some(&Value::from("string")));
    }
}
