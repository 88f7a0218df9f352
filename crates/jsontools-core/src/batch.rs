//! Batch executor: runs an operation over many independent
//! documents, dispatching to the thread pool only when the configured
//! heuristic says it is worth the overhead, and otherwise running serially
//! on the calling thread. Every slot's success or failure is independent —
//! one bad document never prevents the others in the batch from producing
//! a result.

use std::sync::{Arc, Mutex};

use crate::config::{resolve_thread_count, should_parallelize, Config};
use crate::error::{JsonToolsError, TaskError};
use crate::ops;
use crate::threadpool::ThreadPool;

fn total_bytes(inputs: &[&[u8]]) -> usize {
    inputs.iter().map(|i| i.len()).sum()
}

/// Run `op` over every input, preserving input order in the output
/// regardless of whether the batch ran serially or on the thread pool.
fn run_many<F>(inputs: &[&[u8]], config: &Config, op: F) -> Vec<Result<Vec<u8>, TaskError>>
where
    F: Fn(&[u8]) -> Result<Vec<u8>, JsonToolsError> + Send + Sync + 'static,
{
    let doc_count = inputs.len();
    let total = total_bytes(inputs);
    if !config.use_threads || !should_parallelize(doc_count, total) {
        tracing::debug!(doc_count, total_bytes = total, "running batch serially");
        return inputs
            .iter()
            .enumerate()
            .map(|(index, input)| op(input).map_err(|source| TaskError { index, source }))
            .collect();
    }

    let worker_count = resolve_thread_count(config.num_threads);
    tracing::debug!(doc_count, total_bytes = total, worker_count, "dispatching batch to thread pool");

    let op = Arc::new(op);
    let owned_inputs: Vec<Vec<u8>> = inputs.iter().map(|s| s.to_vec()).collect();
    let slots: Arc<Mutex<Vec<Option<Result<Vec<u8>, TaskError>>>>> =
        Arc::new(Mutex::new((0..doc_count).map(|_| None).collect()));

    let pool = ThreadPool::new(worker_count);
    for (index, document) in owned_inputs.into_iter().enumerate() {
        let op = Arc::clone(&op);
        let slots = Arc::clone(&slots);
        pool.submit(move || {
            let outcome = op(&document).map_err(|source| TaskError { index, source });
            slots.lock().expect("batch result mutex poisoned")[index] = Some(outcome);
        })
        .expect("thread pool accepting work during batch dispatch");
    }
    pool.shutdown(true);

    Arc::try_unwrap(slots)
        .expect("all worker references dropped after shutdown")
        .into_inner()
        .expect("batch result mutex poisoned")
        .into_iter()
        .map(|slot| slot.expect("every slot written exactly once"))
        .collect()
}

/// Flatten every document in `inputs` independently.
pub fn flatten_batch(inputs: &[&[u8]], config: &Config) -> Vec<Result<Vec<u8>, TaskError>> {
    let pretty = config.pretty_print;
    run_many(inputs, config, move |input| ops::flatten_json(input, pretty))
}

/// Map leaf paths to scalar types for every document independently.
pub fn path_types_batch(inputs: &[&[u8]], config: &Config) -> Vec<Result<Vec<u8>, TaskError>> {
    let pretty = config.pretty_print;
    run_many(inputs, config, move |input| {
        ops::path_types_of_json(input, pretty)
    })
}

/// Drop `null`-valued members from every document independently.
pub fn remove_nulls_batch(inputs: &[&[u8]], config: &Config) -> Vec<Result<Vec<u8>, TaskError>> {
    let pretty = config.pretty_print;
    run_many(inputs, config, move |input| {
        ops::remove_nulls_json(input, pretty)
    })
}

/// Drop `""`-valued members from every document independently.
pub fn remove_empty_strings_batch(
    inputs: &[&[u8]],
    config: &Config,
) -> Vec<Result<Vec<u8>, TaskError>> {
    let pretty = config.pretty_print;
    run_many(inputs, config, move |input| {
        ops::remove_empty_strings_json(input, pretty)
    })
}

/// Infer a schema fragment per document (possibly in parallel) and merge
/// them into one. Unlike the other batch operations this
/// produces a single output, so the first failing document aborts the merge
/// — there is no way to partially merge around a parse failure.
pub fn schema_of_batch(inputs: &[&[u8]], config: &Config) -> Result<Vec<u8>, TaskError> {
    let per_doc = run_many(inputs, config, |input| {
        let value = crate::parser::parse(input)?;
        crate::serializer::to_bytes(&ops::schema_of(&value), false).map_err(Into::into)
    });

    let mut schemas = Vec::with_capacity(per_doc.len());
    for result in per_doc {
        let bytes = result?;
        let value = crate::parser::parse(&bytes).expect("schema_of output is always valid JSON");
        schemas.push(value);
    }

    let merged = ops::merge_schema_list(schemas);
    crate::serializer::to_bytes(&merged, config.pretty_print)
        .map_err(JsonToolsError::from)
        .map_err(|source| TaskError { index: 0, source })
}
