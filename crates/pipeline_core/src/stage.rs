//! Stage capability trait and error taxonomy.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::state::PipelineState;

/// Errors a single stage can fail with.
///
/// `MissingInput` and `DuplicateOutput` indicate a defect in stage wiring and
/// must fail loudly; everything else is recoverable and a caller may retry
/// the stage with the same inputs.
#[derive(Error, Debug)]
pub enum StageError {
    #[error("required state key missing: {0}")]
    MissingInput(String),

    #[error("state key already published: {0}")]
    DuplicateOutput(String),

    #[error("could not interpret reasoner output: {0}")]
    MalformedOutput(String),

    #[error("no data found for player: {0}")]
    PlayerNotFound(String),

    #[error("{operation} timed out after {timeout:?}")]
    Timeout { operation: String, timeout: Duration },

    #[error("external call failed: {0}")]
    Service(String),
}

impl StageError {
    /// Whether retrying the stage with the same inputs can possibly succeed.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            StageError::MissingInput(_) | StageError::DuplicateOutput(_)
        )
    }
}

/// One unit of transformation in a sequential pipeline.
///
/// A stage declares, ahead of execution, the state keys it reads and the
/// single key it publishes. The pipeline validates the declared inputs,
/// invokes [`execute`](PipelineStage::execute), and publishes the returned
/// value itself, so a stage can never touch any other key.
#[async_trait]
pub trait PipelineStage: Send + Sync {
    fn name(&self) -> &str;

    /// State keys that must be present before the stage runs.
    fn required_keys(&self) -> &[&str] {
        &[]
    }

    /// The one key this stage publishes on success.
    fn output_key(&self) -> &str;

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError>;
}
