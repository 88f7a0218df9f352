//! `remove_nulls`: drop object members whose value is
//! `null`, recursively. Nulls nested inside arrays are left alone — only
//! object members are eligible for removal.

use crate::value::{Object, Value};

pub fn remove_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Object::new();
            for (k, v) in map {
                if v.is_null() {
                    continue;
                }
                out.insert(k.clone(), remove_nulls(v));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(remove_nulls).collect()),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_null_members_recursively() {
        let input = Value::object(vec![
            ("a".to_string(), Value::from("")),
            ("b".to_string(), Value::Null),
            (
                "n".to_string(),
                Value::object(vec![
                    ("a".to_string(), Value::from("")),
                    ("b".to_string(), Value::Null),
                ]),
            ),
        ]);
        let out = remove_nulls(&input);
        let obj = out.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Value::from("")));
        assert!(obj.get("b").is_none());
        let nested = obj.get("n").unwrap().as_object().unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.get("a"), Some(&Value::from("")));
    }

    #[test]
    fn nulls_inside_arrays_are_preserved() {
        let input = Value::Array(vec![Value::Null, Value::Null]);
        assert_eq!(remove_nulls(&input), input);
    }

    #[test]
    fn scalars_pass_through_unchanged() {
        assert_eq!(remove_nulls(&Value::from(5i64)), Value::from(5i64));
    }
}
