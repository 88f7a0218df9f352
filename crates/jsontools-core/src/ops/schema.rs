//! Schema inference: produce a JSON-Schema-draft fragment
//! describing a value's shape, and merge fragments from a batch of
//! documents into one (key-union for objects, items-merge for arrays,
//! sorted type-list for scalar-type disagreement).

use crate::value::{Object, Value};

const TYPE: &str = "type";
const PROPERTIES: &str = "properties";
const ITEMS: &str = "items";

/// Infer a schema fragment for a single value.
pub fn schema_of(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut properties = Object::new();
            for (k, v) in map {
                properties.insert(k.clone(), schema_of(v));
            }
            Value::object(vec![
                (TYPE.to_string(), Value::from("object")),
                (PROPERTIES.to_string(), Value::Object(properties)),
            ])
        }
        Value::Array(items) => {
            let item_schema = merge_schemas(items.iter().map(schema_of));
            Value::object(vec![
                (TYPE.to_string(), Value::from("array")),
                (ITEMS.to_string(), item_schema),
            ])
        }
        scalar => Value::object(vec![(TYPE.to_string(), Value::from(scalar.schema_type_name()))]),
    }
}

/// Merge independently inferred schema fragments into one. Commutative and
/// associative: callers may merge in any order or in a tree rather than a
/// left fold and get the same result.
pub fn merge_schemas<I: IntoIterator<Item = Value>>(schemas: I) -> Value {
    let mut iter = schemas.into_iter();
    let first = match iter.next() {
        Some(v) => v,
        None => return Value::object(vec![]),
    };
    iter.fold(first, |acc, next| merge_two(&acc, &next))
}

/// Merge an already-materialized batch of top-level schema fragments.
pub fn merge_schema_list(schemas: Vec<Value>) -> Value {
    merge_schemas(schemas)
}

fn type_names(schema: &Value) -> Vec<String> {
    let Some(obj) = schema.as_object() else {
        return Vec::new();
    };
    match obj.get(TYPE) {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(|s| s.to_string()))
            .collect(),
        _ => Vec::new(),
    }
}

fn merge_two(a: &Value, b: &Value) -> Value {
    let mut names: Vec<String> = type_names(a).into_iter().chain(type_names(b)).collect();
    names.sort();
    names.dedup();

    if names.len() != 1 {
        return Value::object(vec![(
            TYPE.to_string(),
            Value::Array(names.into_iter().map(Value::from).collect()),
        )]);
    }

    match names[0].as_str() {
        "object" => {
            let empty = Object::new();
            let a_props = a
                .as_object()
                .and_then(|o| o.get(PROPERTIES))
                .and_then(|v| v.as_object())
                .unwrap_or(&empty);
            let b_props = b
                .as_object()
                .and_then(|o| o.get(PROPERTIES))
                .and_then(|v| v.as_object())
                .unwrap_or(&empty);

            let mut keys: Vec<&String> = a_props.keys().collect();
            for k in b_props.keys() {
                if !a_props.contains_key(k) {
                    keys.push(k);
                }
            }

            let mut merged_props = Object::new();
            for k in keys {
                let merged = match (a_props.get(k), b_props.get(k)) {
                    (Some(av), Some(bv)) => merge_two(av, bv),
                    (Some(av), None) => av.clone(),
                    (None, Some(bv)) => bv.clone(),
                    (None, None) => unreachable!(),
                };
                merged_props.insert(k.clone(), merged);
            }

            Value::object(vec![
                (TYPE.to_string(), Value::from("object")),
                (PROPERTIES.to_string(), Value::Object(merged_props)),
            ])
        }
        "array" => {
            let a_items = a.as_object().and_then(|o| o.get(ITEMS));
            let b_items = b.as_object().and_then(|o| o.get(ITEMS));
            let merged_items = match (a_items, b_items) {
                (Some(ai), Some(bi)) if !is_empty_schema(ai) && !is_empty_schema(bi) => {
                    merge_two(ai, bi)
                }
                (Some(ai), _) if !is_empty_schema(ai) => ai.clone(),
                (_, Some(bi)) if !is_empty_schema(bi) => bi.clone(),
                _ => Value::object(vec![]),
            };
            Value::object(vec![
                (TYPE.to_string(), Value::from("array")),
                (ITEMS.to_string(), merged_items),
            ])
        }
        scalar => Value::object(vec![(TYPE.to_string(), Value::from(scalar))]),
    }
}

fn is_empty_schema(schema: &Value) -> bool {
    schema.as_object().map(|o| o.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop<'a>(schema: &'a Value, key: &str) -> &'a Value {
        schema.as_object().unwrap().get(key).unwrap()
    }

    #[test]
    fn scalar_schema_reports_type() {
        assert_eq!(schema_of(&Value::from(1i64)), Value::object(vec![(TYPE.to_string(), Value::from("integer"))]));
        assert_eq!(schema_of(&Value::from(true)), Value::object(vec![(TYPE.to_string(), Value::from("boolean"))]));
    }

    #[test]
    fn object_schema_has_properties() {
        let input = Value::object(vec![("name".to_string(), Value::from("x"))]);
        let schema = schema_of(&input);
        assert_eq!(prop(&schema, TYPE), &Value::from("object"));
        let props = prop(&schema, PROPERTIES).as_object().unwrap();
        assert_eq!(props.get("name"), Some(&Value::object(vec![(TYPE.to_string(), Value::from("string"))])));
    }

    #[test]
    fn empty_object_has_empty_properties() {
        let schema = schema_of(&Value::object(vec![]));
        let props = prop(&schema, PROPERTIES).as_object().unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn empty_array_has_empty_items() {
        let schema = schema_of(&Value::Array(vec![]));
        assert_eq!(prop(&schema, ITEMS), &Value::object(vec![]));
    }

    #[test]
    fn array_items_merge_across_elements() {
        let input = Value::Array(vec![Value::from(1i64), Value::from(2.5f64)]);
        let schema = schema_of(&input);
        let items = prop(&schema, ITEMS);
        let types = prop(items, TYPE);
        assert_eq!(types, &Value::Array(vec![Value::from("integer"), Value::from("number")]));
    }

    #[test]
    fn batch_merge_unions_object_keys() {
        let a = schema_of(&Value::object(vec![(
            "a".to_string(),
            Value::object(vec![("b".to_string(), Value::from(1i64))]),
        )]));
        let b = schema_of(&Value::object(vec![(
            "x".to_string(),
            Value::object(vec![(
                "y".to_string(),
                Value::object(vec![("z".to_string(), Value::from(2i64))]),
            )]),
        )]));
        let c = schema_of(&Value::object(vec![
            ("id".to_string(), Value::from(123i64)),
            ("value".to_string(), Value::from(true)),
        ]));

        let merged = merge_schema_list(vec![a, b, c]);
        let props = prop(&merged, PROPERTIES).as_object().unwrap();
        assert_eq!(props.len(), 4);
        assert!(props.contains_key("a"));
        assert!(props.contains_key("x"));
        assert!(props.contains_key("id"));
        assert!(props.contains_key("value"));
    }

    #[test]
    fn merge_is_commutative_and_associative() {
        let a = schema_of(&Value::from(1i64));
        let b = schema_of(&Value::from("x"));
        let c = schema_of(&Value::from(true));

        let left = merge_two(&merge_two(&a, &b), &c);
        let right = merge_two(&a, &merge_two(&b, &c));
        let mut left_types = prop(&left, TYPE).as_array().unwrap().clone();
        let mut right_types = prop(&right, TYPE).as_array().unwrap().clone();
        left_types.sort_by(|x, y| x.to_string().cmp(&y.to_string()));
        right_types.sort_by(|x, y| x.to_string().cmp(&y.to_string()));
        assert_eq!(left_types, right_types);
    }

    #[test]
    fn type_disagreement_yields_sorted_type_array() {
        let merged = merge_two(&schema_of(&Value::from(1i64)), &schema_of(&Value::from("x")));
        assert_eq!(prop(&merged, TYPE), &Value::Array(vec![Value::from("integer"), Value::from("string")]));
    }
}
