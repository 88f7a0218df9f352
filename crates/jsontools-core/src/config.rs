//! Configuration shared by the batch executor and the fused pipeline.

use serde::{Deserialize, Serialize};

/// How many worker threads a batch run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadCount {
    /// Pick a worker count from detected hardware concurrency.
    Auto,
    /// Use exactly this many workers (`0` is treated as [`ThreadCount::Auto`]).
    Fixed(usize),
}

impl Default for ThreadCount {
    fn default() -> Self {
        ThreadCount::Auto
    }
}

/// Options shared across the single-operation functions, the batch executor,
/// and the fused pipeline builder.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g. `pretty-print`, `use-threads`).
/// This naming convention is part of the public API contract for config
/// files and FFI-style callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Indent output two spaces per level with newlines between members.
    /// Default: `false` (compact).
    pub pretty_print: bool,
    /// Enable the thread-pool path in batch APIs. Default: `false`.
    pub use_threads: bool,
    /// Worker count when `use_threads` is set. Default: [`ThreadCount::Auto`].
    pub num_threads: ThreadCount,
    /// Maximum recursion depth a tree walker will descend before returning
    /// [`crate::error::JsonToolsError::Internal`]. Every recursive walker
    /// needs a stack-overflow guard on adversarial input; chosen generously
    /// enough not to trip on realistic documents.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pretty_print: false,
            use_threads: false,
            num_threads: ThreadCount::Auto,
            max_depth: 512,
        }
    }
}

/// Heuristic for whether a batch run is worth parallelizing: documents
/// smaller than 64 KiB in aggregate, or fewer than 4 of them, run serially
/// even if `use_threads` was requested.
pub const PARALLEL_SIZE_THRESHOLD_BYTES: usize = 64 * 1024;
pub const PARALLEL_MIN_DOCUMENT_COUNT: usize = 4;

/// Resolve a worker count from [`ThreadCount`] and the detected hardware
/// concurrency, clamped to at least 1.
pub fn resolve_thread_count(count: ThreadCount) -> usize {
    match count {
        ThreadCount::Auto => num_cpus::get().max(1),
        ThreadCount::Fixed(0) => num_cpus::get().max(1),
        ThreadCount::Fixed(n) => n,
    }
}

/// Decide whether a batch of `doc_count` documents totalling `total_bytes`
/// should run in parallel.
pub fn should_parallelize(doc_count: usize, total_bytes: usize) -> bool {
    total_bytes >= PARALLEL_SIZE_THRESHOLD_BYTES && doc_count >= PARALLEL_MIN_DOCUMENT_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serde_round_trip() {
        let cfg = Config {
            pretty_print: true,
            use_threads: true,
            num_threads: ThreadCount::Fixed(4),
            max_depth: 100,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"pretty-print\":true"));
        assert!(json.contains("\"use-threads\":true"));

        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn defaults_are_serial_and_compact() {
        let cfg = Config::default();
        assert!(!cfg.pretty_print);
        assert!(!cfg.use_threads);
        assert_eq!(cfg.num_threads, ThreadCount::Auto);
    }

    #[test]
    fn heuristic_requires_both_size_and_count() {
        assert!(!should_parallelize(3, 1_000_000));
        assert!(!should_parallelize(10, 100));
        assert!(should_parallelize(10, PARALLEL_SIZE_THRESHOLD_BYTES));
    }

    #[test]
    fn fixed_zero_resolves_to_auto() {
        assert_eq!(
            resolve_thread_count(ThreadCount::Fixed(0)),
            num_cpus::get().max(1)
        );
    }
}
