//! The opaque external reasoning seam.
//!
//! Stages that need judgement rather than arithmetic hand a task off to a
//! [`Reasoner`]: given instructions and structured input, it returns
//! unstructured text. Nothing here assumes a particular model or runtime -
//! a deterministic stub satisfies the interface just as well as a hosted
//! language model.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::stage::StageError;

#[derive(Error, Debug)]
pub enum ReasonerError {
    #[error("reasoner call timed out after {0:?}")]
    Timeout(Duration),

    #[error("reasoner request failed: {0}")]
    Request(String),
}

impl From<ReasonerError> for StageError {
    fn from(error: ReasonerError) -> Self {
        match error {
            ReasonerError::Timeout(timeout) => StageError::Timeout {
                operation: "reasoner call".to_string(),
                timeout,
            },
            ReasonerError::Request(message) => StageError::Service(message),
        }
    }
}

/// One delegated reasoning task.
#[derive(Debug, Clone)]
pub struct ReasonerRequest {
    /// Which transformation is being asked for (the stage's output key).
    pub task: String,
    /// Free-form instructions for the reasoning process.
    pub instructions: String,
    /// Structured input gathered from pipeline state.
    pub input: Value,
}

impl ReasonerRequest {
    pub fn new(task: impl Into<String>, instructions: impl Into<String>, input: Value) -> Self {
        Self {
            task: task.into(),
            instructions: instructions.into(),
            input,
        }
    }
}

#[async_trait]
pub trait Reasoner: Send + Sync {
    /// Run one reasoning task to completion and return its raw text output.
    async fn complete(&self, request: ReasonerRequest) -> Result<String, ReasonerError>;
}

/// Extract JSON from text that might be wrapped in markdown code blocks or
/// mixed with surrounding prose.
pub fn extract_json_from_text(text: &str) -> Option<String> {
    if let Some(start) = text.find("```json") {
        if let Some(end) = text[start + 7..].find("```") {
            return Some(text[start + 7..start + 7 + end].trim().to_string());
        }
    }

    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if end > start {
                return Some(text[start..=end].trim().to_string());
            }
        }
    }

    None
}

/// Best-effort recovery of a JSON value from reasoner output.
///
/// Tries the whole text first, then [`extract_json_from_text`]. Anything
/// that still does not parse is a [`StageError::MalformedOutput`] carrying a
/// short preview of the offending text.
pub fn parse_reasoner_output(text: &str) -> Result<Value, StageError> {
    if let Ok(value) = serde_json::from_str::<Value>(text.trim()) {
        return Ok(value);
    }

    if let Some(candidate) = extract_json_from_text(text) {
        if let Ok(value) = serde_json::from_str::<Value>(&candidate) {
            return Ok(value);
        }
    }

    Err(StageError::MalformedOutput(preview(text)))
}

fn preview(text: &str) -> String {
    const MAX: usize = 120;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "empty output".to_string();
    }
    let cut = trimmed
        .char_indices()
        .nth(MAX)
        .map(|(index, _)| index)
        .unwrap_or(trimmed.len());
    let mut out = trimmed[..cut].to_string();
    if cut < trimmed.len() {
        out.push_str("...");
    }
    out
}
