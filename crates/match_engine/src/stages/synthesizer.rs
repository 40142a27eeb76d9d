//! Stage 4: combine both analyses into a win/tie probability triple.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use pipeline_core::{
    parse_reasoner_output, PipelineStage, PipelineState, Reasoner, ReasonerRequest, StageError,
};

use crate::outcome::MatchProbabilities;
use crate::prompts;
use crate::stages::keys;

const REQUIRED: &[&str] = &[keys::RECENT_FORM_ANALYSIS, keys::BASELINE_SKILL_ANALYSIS];

/// Weighs recent form against baseline skill and publishes the
/// probability triple. Unlike the analysts, this stage's output has a
/// contract: a triple in [0, 1] summing to 1.0 within tolerance - anything
/// else the reasoner replies is malformed output.
pub struct MatchupSynthesizer {
    reasoner: Arc<dyn Reasoner>,
}

impl MatchupSynthesizer {
    pub fn new(reasoner: Arc<dyn Reasoner>) -> Self {
        Self { reasoner }
    }
}

#[async_trait]
impl PipelineStage for MatchupSynthesizer {
    fn name(&self) -> &str {
        "matchup_synthesizer"
    }

    fn required_keys(&self) -> &[&str] {
        REQUIRED
    }

    fn output_key(&self) -> &str {
        keys::MATCH_PROBABILITIES
    }

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError> {
        let input = json!({
            (keys::RECENT_FORM_ANALYSIS): state.require(keys::RECENT_FORM_ANALYSIS)?,
            (keys::BASELINE_SKILL_ANALYSIS): state.require(keys::BASELINE_SKILL_ANALYSIS)?,
        });

        let reply = self
            .reasoner
            .complete(ReasonerRequest::new(
                keys::MATCH_PROBABILITIES,
                prompts::SYNTHESIS_INSTRUCTIONS,
                input,
            ))
            .await?;

        let value = parse_reasoner_output(&reply)?;
        let probabilities: MatchProbabilities = serde_json::from_value(value)
            .map_err(|error| StageError::MalformedOutput(format!("not a probability triple: {error}")))?;

        if !probabilities.is_valid() {
            return Err(StageError::MalformedOutput(format!(
                "probabilities out of range or sum {:.3} != 1.0",
                probabilities.sum()
            )));
        }

        serde_json::to_value(probabilities)
            .map_err(|error| StageError::MalformedOutput(error.to_string()))
    }
}
