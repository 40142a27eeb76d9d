//! Stage 5: resolve the probability triple into a discrete outcome.

use async_trait::async_trait;
use serde_json::Value;

use pipeline_core::{PipelineStage, PipelineState, StageError};

use crate::outcome::{MatchOutcome, MatchProbabilities, MatchResult};
use crate::stages::keys;

const REQUIRED: &[&str] = &[keys::MATCH_PROBABILITIES];

/// Despite the inherited name this performs no sampling: the published
/// triple is resolved by the deterministic strict-argmax tie-break in
/// [`MatchResult::from_probabilities`].
pub struct MonteCarloSimulator;

#[async_trait]
impl PipelineStage for MonteCarloSimulator {
    fn name(&self) -> &str {
        "monte_carlo_simulator"
    }

    fn required_keys(&self) -> &[&str] {
        REQUIRED
    }

    fn output_key(&self) -> &str {
        keys::SIMULATION_RESULTS
    }

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError> {
        let probabilities: MatchProbabilities =
            serde_json::from_value(state.require(keys::MATCH_PROBABILITIES)?.clone()).map_err(
                |error| StageError::MalformedOutput(format!("not a probability triple: {error}")),
            )?;

        let outcome = MatchOutcome {
            result: MatchResult::from_probabilities(&probabilities),
            probabilities,
        };

        serde_json::to_value(outcome).map_err(|error| StageError::MalformedOutput(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn resolves_the_favorite() {
        let mut state = PipelineState::new();
        state
            .publish(
                keys::MATCH_PROBABILITIES,
                json!({"prob_a": 0.6, "prob_b": 0.3, "prob_tie": 0.1}),
            )
            .unwrap();

        let value = MonteCarloSimulator.execute(&state).await.unwrap();
        let outcome: MatchOutcome = serde_json::from_value(value).unwrap();
        assert_eq!(outcome.result, MatchResult::WinA);
        assert_eq!(outcome.probabilities.prob_a, 0.6);
    }

    #[tokio::test]
    async fn malformed_triple_in_state_is_rejected() {
        let mut state = PipelineState::new();
        state
            .publish(keys::MATCH_PROBABILITIES, json!({"prob_a": "high"}))
            .unwrap();

        let err = MonteCarloSimulator.execute(&state).await.unwrap_err();
        assert!(matches!(err, StageError::MalformedOutput(_)));
    }

    #[tokio::test]
    async fn missing_probabilities_fail() {
        let err = MonteCarloSimulator
            .execute(&PipelineState::new())
            .await
            .unwrap_err();
        assert!(
            matches!(err, StageError::MissingInput(ref key) if key == keys::MATCH_PROBABILITIES)
        );
    }
}
