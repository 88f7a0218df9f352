//! [`Value`] → UTF-8 JSON bytes.
//!
//! Two output modes, selected per call: compact (no whitespace between
//! tokens) and pretty (two-space indent, newline between members, space
//! after `:`). Numbers are formatted so that `parse(serialize(v))` restores
//! the same [`Number`] variant — real-kind values always keep a `.` or `e`
//! in their text even when mathematically integral.

use crate::value::{Number, Value};

/// Serialize a value to a `String`, selecting compact or pretty form.
pub fn to_string(value: &Value, pretty: bool) -> Result<String, crate::error::EncodeError> {
    let mut out = String::with_capacity(128);
    if pretty {
        write_pretty(value, 0, &mut out);
    } else {
        write_compact(value, &mut out);
    }
    Ok(out)
}

/// Serialize a value to UTF-8 bytes.
pub fn to_bytes(value: &Value, pretty: bool) -> Result<Vec<u8>, crate::error::EncodeError> {
    to_string(value, pretty).map(String::into_bytes)
}

fn write_compact(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(n, out),
        Value::String(s) => write_escaped_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_compact(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped_string(k, out);
                out.push(':');
                write_compact(v, out);
            }
            out.push('}');
        }
    }
}

fn write_pretty(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            out.push('\n');
            for (i, item) in items.iter().enumerate() {
                indent(depth + 1, out);
                write_pretty(item, depth + 1, out);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(depth, out);
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            out.push('\n');
            for (i, (k, v)) in map.iter().enumerate() {
                indent(depth + 1, out);
                write_escaped_string(k, out);
                out.push_str(": ");
                write_pretty(v, depth + 1, out);
                if i + 1 < map.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(depth, out);
            out.push('}');
        }
        // Empty containers and scalars have no interior to indent.
        other => write_compact(other, out),
    }
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_number(n: &Number, out: &mut String) {
    match *n {
        Number::PosInt(v) => {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(v));
        }
        Number::NegInt(v) => {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(v));
        }
        Number::Float(v) => {
            let mut buf = ryu::Buffer::new();
            let formatted = buf.format(v);
            out.push_str(formatted);
            // ryu always emits a '.' or exponent for finite floats, so the
            // real/integer classification survives a reparse unchanged.
        }
    }
}

fn write_escaped_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
