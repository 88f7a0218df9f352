//! The JSON value model.
//!
//! `Value` is a tagged tree: `Null`, `Bool`, `Number`, `String`, `Array`, and
//! `Object`. Objects preserve first-insertion key order and reject duplicate
//! keys at construction time (last write wins), which is what the parser and
//! every operation in [`crate::ops`] rely on.

use indexmap::IndexMap;
use std::fmt;

/// An object's member map: an ordered sequence of `(key, value)` pairs with
/// keys unique within the object. Iteration order is first-insertion order;
/// re-inserting an existing key updates its value in place without moving it
/// to the end, matching `IndexMap`'s default `insert` semantics.
pub type Object = IndexMap<String, Value>;

/// A parsed JSON number, keeping the integer/real classification fixed by
/// variant rather than a side-channel flag: a value parsed from text
/// containing `.`, `e`, or `E` is always [`Number::Float`]; any other
/// numeric literal is [`Number::PosInt`] or [`Number::NegInt`].
/// Construction from Rust values preserves this by construction — there is
/// no way to build a `Number` that loses its kind.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// A non-negative integer-kind number.
    PosInt(u64),
    /// A negative integer-kind number.
    NegInt(i64),
    /// A real-kind number (its source text had `.`, `e`, or `E`).
    Float(f64),
}

impl Number {
    /// The scalar type name this number reports to the schema generator and
    /// path-type analyzer.
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::PosInt(_) | Number::NegInt(_) => "integer",
            Number::Float(_) => "number",
        }
    }

    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::PosInt(n) => n as f64,
            Number::NegInt(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::PosInt(a), Number::PosInt(b)) => a == b,
            (Number::NegInt(a), Number::NegInt(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::PosInt(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        if n >= 0 {
            Number::PosInt(n as u64)
        } else {
            Number::NegInt(n)
        }
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

/// A JSON value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The JSON-Schema `type` name for this value.
    pub fn schema_type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(n) => n.type_name(),
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn object(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut map = Object::new();
        for (k, v) in entries {
            map.insert(k, v);
        }
        Value::Object(map)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::serializer::to_string(self, false) {
            Ok(s) => f.write_str(&s),
            Err(_) => f.write_str("<invalid value>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(Number::from(n))
    }
}
