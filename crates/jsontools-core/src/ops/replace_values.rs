//! `replace_values`: replace string leaves that
//! whole-string-match a compiled pattern with a literal replacement,
//! recursively. Non-string values are never touched, regardless of match.

use crate::regex_adapter::CompiledPattern;
use crate::value::Value;

pub fn replace_values(value: &Value, pattern: &CompiledPattern, replacement: &str) -> Value {
    match value {
        Value::Object(map) => Value::object(
            map.iter()
                .map(|(k, v)| (k.clone(), replace_values(v, pattern, replacement)))
                .collect::<Vec<_>>(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| replace_values(v, pattern, replacement))
                .collect(),
        ),
        Value::String(s) if pattern.is_match(s) => Value::from(replacement),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_matching_string_leaves() {
        let pattern = CompiledPattern::compile("secret_.*").unwrap();
        let input = Value::object(vec![
            ("a".to_string(), Value::from("secret_123")),
            ("b".to_string(), Value::from("plain")),
        ]);
        let out = replace_values(&input, &pattern, "[redacted]");
        let obj = out.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::from("[redacted]")));
        assert_eq!(obj.get("b"), Some(&Value::from("plain")));
    }

    #[test]
    fn non_string_values_are_never_touched() {
        let pattern = CompiledPattern::compile("123").unwrap();
        let input = Value::object(vec![("n".to_string(), Value::from(123i64))]);
        assert_eq!(replace_values(&input, &pattern, "x"), input);
    }

    #[test]
    fn recurses_through_arrays_and_nested_objects() {
        let pattern = CompiledPattern::compile("hide").unwrap();
        let input = Value::Array(vec![
            Value::from("hide"),
            Value::object(vec![("k".to_string(), Value::from("hide"))]),
        ]);
        let out = replace_values(&input, &pattern, "gone");
        let arr = out.as_array().unwrap();
        assert_eq!(arr[0], Value::from("gone"));
        assert_eq!(
            arr[1].as_object().unwrap().get("k"),
            Some(&Value::from("gone"))
        );
    }
}
