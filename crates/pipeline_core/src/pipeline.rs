//! Sequential pipeline execution.

use std::sync::Arc;

use thiserror::Error;

use crate::stage::{PipelineStage, StageError};
use crate::state::PipelineState;

/// A stage failure together with the identity of the stage that halted the
/// pipeline.
#[derive(Error, Debug)]
#[error("stage '{stage}' failed: {source}")]
pub struct PipelineError {
    pub stage: String,
    #[source]
    pub source: StageError,
}

impl PipelineError {
    pub fn new(stage: impl Into<String>, source: StageError) -> Self {
        Self {
            stage: stage.into(),
            source,
        }
    }
}

/// Runs stages strictly in declared order; stage *i+1* only starts after
/// stage *i* has published its output key. The first stage error halts the
/// run. No stage is retried here - retry policy belongs to the caller (see
/// [`RetryStage`](crate::retry::RetryStage)).
pub struct SequentialPipeline {
    name: String,
    stages: Vec<Arc<dyn PipelineStage>>,
}

impl SequentialPipeline {
    pub fn new(name: impl Into<String>, stages: Vec<Arc<dyn PipelineStage>>) -> Self {
        Self {
            name: name.into(),
            stages,
        }
    }

    pub fn builder(name: impl Into<String>) -> SequentialPipelineBuilder {
        SequentialPipelineBuilder {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage against `state`, returning the fully accumulated
    /// state on success (useful for audit and debugging).
    pub async fn evaluate(
        &self,
        mut state: PipelineState,
    ) -> Result<PipelineState, PipelineError> {
        for stage in &self.stages {
            for key in stage.required_keys() {
                if !state.contains(key) {
                    return Err(PipelineError::new(
                        stage.name(),
                        StageError::MissingInput((*key).to_string()),
                    ));
                }
            }

            log::debug!("[{}] running stage '{}'", self.name, stage.name());
            let value = stage
                .execute(&state)
                .await
                .map_err(|error| PipelineError::new(stage.name(), error))?;

            state
                .publish(stage.output_key(), value)
                .map_err(|error| PipelineError::new(stage.name(), error))?;
            log::debug!(
                "[{}] stage '{}' published '{}'",
                self.name,
                stage.name(),
                stage.output_key()
            );
        }

        Ok(state)
    }
}

pub struct SequentialPipelineBuilder {
    name: String,
    stages: Vec<Arc<dyn PipelineStage>>,
}

impl SequentialPipelineBuilder {
    pub fn stage(mut self, stage: impl PipelineStage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> SequentialPipeline {
        SequentialPipeline::new(self.name, self.stages)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::*;

    struct RecordingStage {
        name: String,
        requires: Vec<&'static str>,
        output: &'static str,
        fail: bool,
        executions: Arc<AtomicUsize>,
    }

    impl RecordingStage {
        fn new(name: &str, requires: Vec<&'static str>, output: &'static str) -> Self {
            Self {
                name: name.to_string(),
                requires,
                output,
                fail: false,
                executions: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }

        fn execution_counter(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.executions)
        }
    }

    #[async_trait]
    impl PipelineStage for RecordingStage {
        fn name(&self) -> &str {
            &self.name
        }

        fn required_keys(&self) -> &[&str] {
            &self.requires
        }

        fn output_key(&self) -> &str {
            self.output
        }

        async fn execute(&self, _state: &PipelineState) -> Result<Value, StageError> {
            self.executions.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StageError::MalformedOutput("scripted failure".into()));
            }
            Ok(json!({ "from": self.name }))
        }
    }

    #[tokio::test]
    async fn runs_stages_in_order_and_accumulates_state() {
        let pipeline = SequentialPipeline::builder("match_analysis")
            .stage(RecordingStage::new("first", vec![], "a"))
            .stage(RecordingStage::new("second", vec!["a"], "b"))
            .stage(RecordingStage::new("third", vec!["a", "b"], "c"))
            .build();

        let state = pipeline.evaluate(PipelineState::new()).await.unwrap();
        assert_eq!(state.len(), 3);
        assert!(state.contains("a") && state.contains("b") && state.contains("c"));
    }

    #[tokio::test]
    async fn halts_on_first_failure_without_running_later_stages() {
        let failing = RecordingStage::new("second", vec!["a"], "b").failing();
        let third = RecordingStage::new("third", vec!["b"], "c");
        let third_runs = third.execution_counter();

        let pipeline = SequentialPipeline::builder("match_analysis")
            .stage(RecordingStage::new("first", vec![], "a"))
            .stage(failing)
            .stage(third)
            .build();

        let err = pipeline.evaluate(PipelineState::new()).await.unwrap_err();
        assert_eq!(err.stage, "second");
        assert!(matches!(err.source, StageError::MalformedOutput(_)));
        assert_eq!(third_runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_declared_key_fails_before_execution() {
        let stage = RecordingStage::new("analyst", vec!["player_profiles"], "analysis");
        let runs = stage.execution_counter();
        let pipeline = SequentialPipeline::builder("match_analysis")
            .stage(stage)
            .build();

        let err = pipeline.evaluate(PipelineState::new()).await.unwrap_err();
        assert_eq!(err.stage, "analyst");
        assert!(
            matches!(err.source, StageError::MissingInput(ref key) if key == "player_profiles")
        );
        // The precondition check must prevent the stage body from running.
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn duplicate_output_key_is_a_pipeline_error() {
        let pipeline = SequentialPipeline::builder("match_analysis")
            .stage(RecordingStage::new("first", vec![], "a"))
            .stage(RecordingStage::new("second", vec![], "a"))
            .build();

        let err = pipeline.evaluate(PipelineState::new()).await.unwrap_err();
        assert_eq!(err.stage, "second");
        assert!(matches!(err.source, StageError::DuplicateOutput(ref key) if key == "a"));
    }
}
