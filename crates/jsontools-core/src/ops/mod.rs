//! The individual transformation operations, exposed both
//! as [`Value`]-to-[`Value`] functions for reuse by the fused pipeline, and
//! as UTF-8-JSON-bytes-in/bytes-out entry points for callers that only want
//! one operation.

mod common;
mod flatten;
mod path_types;
mod remove_empty_strings;
mod remove_nulls;
mod replace_keys;
mod replace_values;
mod schema;

pub use flatten::flatten;
pub use path_types::path_types;
pub use remove_empty_strings::remove_empty_strings;
pub use remove_nulls::remove_nulls;
pub use replace_keys::replace_keys;
pub use replace_values::replace_values;
pub use schema::{merge_schema_list, merge_schemas, schema_of};

use crate::error::JsonToolsError;
use crate::regex_adapter::CompiledPattern;
use crate::serializer;
use crate::value::Value;

fn encode(value: &Value, pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    Ok(serializer::to_bytes(value, pretty)?)
}

/// Flatten JSON bytes into a single-level object of dotted paths.
pub fn flatten_json(input: &[u8], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    encode(&flatten(&value), pretty)
}

/// Infer a JSON-Schema fragment for JSON bytes.
pub fn schema_of_json(input: &[u8], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    encode(&schema_of(&value), pretty)
}

/// Merge schema fragments inferred from a batch of JSON documents.
pub fn schema_of_batch_json(inputs: &[&[u8]], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let mut schemas = Vec::with_capacity(inputs.len());
    for input in inputs {
        let value = crate::parser::parse(input)?;
        schemas.push(schema_of(&value));
    }
    encode(&merge_schema_list(schemas), pretty)
}

/// Map every leaf path in JSON bytes to its scalar type name.
pub fn path_types_of_json(input: &[u8], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    encode(&path_types(&value), pretty)
}

/// Drop `null`-valued object members from JSON bytes, recursively.
pub fn remove_nulls_json(input: &[u8], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    encode(&remove_nulls(&value), pretty)
}

/// Drop `""`-valued object members from JSON bytes, recursively.
pub fn remove_empty_strings_json(input: &[u8], pretty: bool) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    encode(&remove_empty_strings(&value), pretty)
}

/// Rename object keys matching `pattern` to `replacement` in JSON bytes.
pub fn replace_keys_json(
    input: &[u8],
    pattern: &str,
    replacement: &str,
    pretty: bool,
) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    let compiled = CompiledPattern::compile(pattern)?;
    encode(&replace_keys(&value, &compiled, replacement), pretty)
}

/// Replace string leaves matching `pattern` with `replacement` in JSON bytes.
pub fn replace_values_json(
    input: &[u8],
    pattern: &str,
    replacement: &str,
    pretty: bool,
) -> Result<Vec<u8>, JsonToolsError> {
    let value = crate::parser::parse(input)?;
    let compiled = CompiledPattern::compile(pattern)?;
    encode(&replace_values(&value, &compiled, replacement), pretty)
}
