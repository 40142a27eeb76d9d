//! Keyed state shared between pipeline stages.

use std::collections::HashMap;

use serde_json::Value;

use crate::stage::StageError;

/// Write-once key/value store scoped to a single pipeline run.
///
/// Each stage publishes exactly one new key; keys are never overwritten. The
/// state is owned by one evaluation and dropped when it completes, so no
/// locking is involved.
#[derive(Debug, Default)]
pub struct PipelineState {
    values: HashMap<String, Value>,
}

impl PipelineState {
    /// Create an empty state for a fresh pipeline run.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Publish a value under `key`. Publishing an already-present key is a
    /// wiring defect and fails with [`StageError::DuplicateOutput`].
    pub fn publish(&mut self, key: impl Into<String>, value: Value) -> Result<(), StageError> {
        let key = key.into();
        if self.values.contains_key(&key) {
            return Err(StageError::DuplicateOutput(key));
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a key that a stage declared as required, failing with
    /// [`StageError::MissingInput`] naming the key when absent.
    pub fn require(&self, key: &str) -> Result<&Value, StageError> {
        self.values
            .get(key)
            .ok_or_else(|| StageError::MissingInput(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
