//! Stages 2 and 3: reasoner-backed form and skill analyses.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use pipeline_core::{
    parse_reasoner_output, PipelineStage, PipelineState, Reasoner, ReasonerRequest, StageError,
};

use crate::prompts;
use crate::stages::keys;

const REQUIRED: &[&str] = &[keys::PLAYER_PROFILES];

/// Delegate one analysis of the published player profiles to the reasoner.
///
/// Analyses are consumed opaquely by the synthesis stage, so structure is
/// best-effort: a JSON reply is kept as JSON, anything else non-empty is
/// kept as text. An empty reply is malformed.
async fn analyze(
    reasoner: &dyn Reasoner,
    task: &str,
    instructions: &str,
    state: &PipelineState,
) -> Result<Value, StageError> {
    let input = state.require(keys::PLAYER_PROFILES)?.clone();
    let reply = reasoner
        .complete(ReasonerRequest::new(task, instructions, input))
        .await?;

    match parse_reasoner_output(&reply) {
        Ok(value) => Ok(value),
        Err(_) if !reply.trim().is_empty() => Ok(Value::String(reply.trim().to_string())),
        Err(error) => Err(error),
    }
}

/// Compares each player's 3-month window against their 2-year window and
/// summarizes the direction and size of the change.
pub struct RecentFormAnalyst {
    reasoner: Arc<dyn Reasoner>,
}

impl RecentFormAnalyst {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }
}

#[async_trait]
impl PipelineStage for RecentFormAnalyst {
    fn name(&self) -> &str {
        "recent_form_analyst"
    }

    fn required_keys(&self) -> &[&str] {
        REQUIRED
    }

    fn output_key(&self) -> &str {
        keys::RECENT_FORM_ANALYSIS
    }

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError> {
        analyze(
            self.reasoner.as_ref(),
            keys::RECENT_FORM_ANALYSIS,
            prompts::RECENT_FORM_INSTRUCTIONS,
            state,
        )
        .await
    }
}

/// Summarizes each player's long-horizon window per category.
pub struct BaselineSkillAnalyst {
    reasoner: Arc<dyn Reasoner>,
}

impl BaselineSkillAnalyst {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }
}

#[async_trait]
impl PipelineStage for BaselineSkillAnalyst {
    fn name(&self) -> &str {
        "baseline_skill_analyst"
    }

    fn required_keys(&self) -> &[&str] {
        REQUIRED
    }

    fn output_key(&self) -> &str {
        keys::BASELINE_SKILL_ANALYSIS
    }

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError> {
        analyze(
            self.reasoner.as_ref(),
            keys::BASELINE_SKILL_ANALYSIS,
            prompts::BASELINE_SKILL_INSTRUCTIONS,
            state,
        )
        .await
    }
}
