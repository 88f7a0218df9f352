//! Fused pipeline builder: queue transformation operations
//! once, then run them over one or more documents in a single traversal
//! each, instead of re-walking the tree per operation.
//!
//! State machine: `Empty -> Ready -> Executing -> Done | Failed`, with
//! `reset()` returning to `Empty` from any state. `add_json()` re-enters
//! `Ready` from `Empty` or `Done`, so a configured builder can process many
//! documents without re-queuing its operations.

use super::descriptor::Descriptor;
use super::mask::CapabilityMask;
use super::traversal;
use crate::error::{BuilderStateError, JsonToolsError};
use crate::ops::flatten;
use crate::regex_adapter::CompiledPattern;
use crate::serializer;
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    Ready,
    Executing,
    Done,
    Failed,
}

/// Builds and runs a fused transformation pipeline over JSON documents.
#[derive(Debug)]
pub struct JsonToolsBuilder {
    state: State,
    input: Option<Value>,
    descriptors: Vec<Descriptor>,
    mask: CapabilityMask,
    flatten_last: bool,
    pretty: bool,
}

impl Default for JsonToolsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonToolsBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Empty,
            input: None,
            descriptors: Vec::new(),
            mask: CapabilityMask::empty(),
            flatten_last: false,
            pretty: false,
        }
    }

    fn check_enqueue_ready(&self) -> Result<(), JsonToolsError> {
        match self.state {
            State::Empty | State::Ready => Ok(()),
            State::Executing | State::Done | State::Failed => {
                Err(BuilderStateError::EnqueueNotReady.into())
            }
        }
    }

    fn check_add_json_ready(&self) -> Result<(), JsonToolsError> {
        match self.state {
            State::Empty | State::Done => Ok(()),
            State::Ready | State::Executing | State::Failed => {
                Err(BuilderStateError::AddJsonNotReady.into())
            }
        }
    }

    /// Parse `bytes` and set it as the document the next `build()` will run
    /// over. Valid from `Empty` or `Done`.
    pub fn add_json(&mut self, bytes: &[u8]) -> Result<&mut Self, JsonToolsError> {
        self.check_add_json_ready()?;
        let value = crate::parser::parse(bytes)?;
        self.input = Some(value);
        self.state = State::Ready;
        Ok(self)
    }

    pub fn remove_nulls(&mut self) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        self.push_descriptor(Descriptor::RemoveNulls);
        Ok(self)
    }

    pub fn remove_empty_strings(&mut self) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        self.push_descriptor(Descriptor::RemoveEmptyStrings);
        Ok(self)
    }

    pub fn replace_keys(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        let compiled = self.compile_pattern(pattern)?;
        self.push_descriptor(Descriptor::ReplaceKeys {
            pattern: compiled,
            replacement: replacement.to_string(),
        });
        Ok(self)
    }

    pub fn replace_values(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        let compiled = self.compile_pattern(pattern)?;
        self.push_descriptor(Descriptor::ReplaceValues {
            pattern: compiled,
            replacement: replacement.to_string(),
        });
        Ok(self)
    }

    /// Queue a final flatten reshape, run after every other operation.
    pub fn flatten(&mut self) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        self.flatten_last = true;
        Ok(self)
    }

    pub fn pretty_print(&mut self, enabled: bool) -> Result<&mut Self, JsonToolsError> {
        self.check_enqueue_ready()?;
        self.pretty = enabled;
        Ok(self)
    }

    fn compile_pattern(&self, pattern: &str) -> Result<CompiledPattern, JsonToolsError> {
        CompiledPattern::compile(pattern).map_err(|e| {
            BuilderStateError::BadPattern {
                index: self.descriptors.len(),
                reason: e.reason,
            }
            .into()
        })
    }

    fn push_descriptor(&mut self, descriptor: Descriptor) {
        self.mask.add(&descriptor);
        self.descriptors.push(descriptor);
    }

    /// Run the queued operations over the current document in one traversal,
    /// encoding the result. Valid only from `Ready`.
    pub fn build(&mut self) -> Result<Vec<u8>, JsonToolsError> {
        match self.state {
            State::Empty => return Err(BuilderStateError::NoInput.into()),
            State::Ready => {}
            State::Executing | State::Done | State::Failed => {
                return Err(BuilderStateError::BuildNotReady.into())
            }
        }
        self.state = State::Executing;
        tracing::debug!(
            operations = self.descriptors.len(),
            flatten = self.flatten_last,
            "running fused pipeline"
        );

        let input = self.input.as_ref().expect("Ready state implies input set");
        let mut result = traversal::apply(input, &self.descriptors, self.mask);
        if self.flatten_last {
            result = flatten(&result);
        }

        match serializer::to_bytes(&result, self.pretty) {
            Ok(bytes) => {
                self.state = State::Done;
                Ok(bytes)
            }
            Err(e) => {
                self.state = State::Failed;
                tracing::warn!(error = %e, "fused pipeline failed to encode result");
                Err(e.into())
            }
        }
    }

    /// Clear all queued operations and the current document, returning to
    /// `Empty`.
    pub fn reset(&mut self) -> &mut Self {
        self.state = State::Empty;
        self.input = None;
        self.descriptors.clear();
        self.mask = CapabilityMask::empty();
        self.flatten_last = false;
        self.pretty = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_queued_operations_in_documented_order() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(br#"{"old_name":"Bob","empty":"","missing":null}"#)
            .unwrap();
        b.replace_keys("old_.*", "new_name").unwrap();
        b.remove_nulls().unwrap();
        b.remove_empty_strings().unwrap();
        let out = b.build().unwrap();
        assert_eq!(out, br#"{"new_name":"Bob"}"#);
        assert_eq!(b.build().unwrap_err().error_code(), crate::error::ErrorCode::BuilderStateError);
    }

    #[test]
    fn flatten_runs_after_other_operations() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(br#"{"a":{"old":null,"b":1}}"#).unwrap();
        b.remove_nulls().unwrap();
        b.flatten().unwrap();
        let out = b.build().unwrap();
        assert_eq!(out, br#"{"a.b":1}"#);
    }

    #[test]
    fn build_without_input_reports_no_input() {
        let mut b = JsonToolsBuilder::new();
        let err = b.build().unwrap_err();
        assert_eq!(err.error_code(), crate::error::ErrorCode::BuilderStateError);
    }

    #[test]
    fn add_json_after_ready_is_rejected() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(b"1").unwrap();
        let err = b.add_json(b"2").unwrap_err();
        assert_eq!(err.error_code(), crate::error::ErrorCode::BuilderStateError);
    }

    #[test]
    fn add_json_after_done_reenters_ready_for_another_document() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(b"1").unwrap();
        assert_eq!(b.build().unwrap(), b"1");
        b.add_json(b"2").unwrap();
        assert_eq!(b.build().unwrap(), b"2");
    }

    #[test]
    fn reset_returns_to_empty_and_clears_operations() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(b"1").unwrap();
        b.remove_nulls().unwrap();
        b.build().unwrap();
        b.reset();
        let err = b.build().unwrap_err();
        assert_eq!(err.error_code(), crate::error::ErrorCode::BuilderStateError);
        b.add_json(br#"{"a":null}"#).unwrap();
        let out = b.build().unwrap();
        assert_eq!(out, br#"{"a":null}"#);
    }

    #[test]
    fn invalid_pattern_reports_bad_pattern_with_index() {
        let mut b = JsonToolsBuilder::new();
        b.add_json(b"{}").unwrap();
        b.remove_nulls().unwrap();
        let err = b.replace_keys("(unclosed", "x").unwrap_err();
        match err {
            JsonToolsError::BuilderState(BuilderStateError::BadPattern { index, .. }) => {
                assert_eq!(index, 1);
            }
            other => panic!("expected BadPattern, got {other:?}"),
        }
    }
}
