//! High-throughput JSON transformation engine: a hand-rolled JSON value
//! model and codec, a set of structural operations (flatten, schema
//! inference, path-type analysis, null/empty-string pruning, regex-driven
//! key and value replacement), a fused single-traversal pipeline for
//! chaining them, and a batch executor that dispatches across documents
//! either serially or on a bounded lock-free thread pool.
//!
//! Single documents go through [`parser::parse`] and [`serializer`]
//! directly or via the per-operation `*_json` helpers in [`ops`]. Chained
//! transformations go through [`pipeline::JsonToolsBuilder`]. Independent
//! documents go through [`batch`].

pub mod batch;
pub mod config;
pub mod error;
pub mod ops;
pub mod parser;
pub mod path;
pub mod pipeline;
pub mod regex_adapter;
pub mod serializer;
pub mod threadpool;
pub mod value;

pub use config::{Config, ThreadCount};
pub use error::{ErrorCode, ErrorReport, JsonToolsError, TaskError};
pub use pipeline::JsonToolsBuilder;
pub use value::{Number, Object, Value};
