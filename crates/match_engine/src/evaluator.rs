//! Per-match pipeline wiring.

use std::sync::Arc;

use datagolf::StatsProvider;
use pipeline_core::{
    PipelineError, PipelineState, Reasoner, RetryPolicy, RetryStage, SequentialPipeline,
    StageError,
};

use crate::outcome::MatchOutcome;
use crate::stages::{
    keys, BaselineSkillAnalyst, MatchupSynthesizer, MonteCarloSimulator, PlayerProfiler,
    RecentFormAnalyst,
};
use crate::types::MatchPairing;

#[derive(Debug, Clone, Copy)]
pub struct EvaluatorConfig {
    /// Attempts per reasoner-backed stage; malformed output is retried with
    /// the same inputs until this is exhausted.
    pub retry: RetryPolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
        }
    }
}

/// Evaluates one pairing through the five-stage analysis pipeline.
///
/// Each call wires a fresh [`SequentialPipeline`] and a fresh
/// [`PipelineState`]; nothing is shared or reused across matches.
pub struct MatchEvaluator {
    stats: Arc<dyn StatsProvider>,
    reasoner: Arc<dyn Reasoner>,
    config: EvaluatorConfig,
}

impl MatchEvaluator {
    pub fn new(stats: Arc<dyn StatsProvider>, reasoner: Arc<dyn Reasoner>) -> Self {
        Self::with_config(stats, reasoner, EvaluatorConfig::default())
    }

    pub fn with_config(
        stats: Arc<dyn StatsProvider>,
        reasoner: Arc<dyn Reasoner>,
        config: EvaluatorConfig,
    ) -> Self {
        Self {
            stats,
            reasoner,
            config,
        }
    }

    fn build_pipeline(&self, pairing: &MatchPairing) -> SequentialPipeline {
        let retry = self.config.retry;
        SequentialPipeline::builder(format!("match-{}", pairing.number))
            .stage(PlayerProfiler::new(Arc::clone(&self.stats), pairing.clone()))
            .stage(RetryStage::new(
                RecentFormAnalyst::new(Arc::clone(&self.reasoner)),
                retry,
            ))
            .stage(RetryStage::new(
                BaselineSkillAnalyst::new(Arc::clone(&self.reasoner)),
                retry,
            ))
            .stage(RetryStage::new(
                MatchupSynthesizer::new(Arc::clone(&self.reasoner)),
                retry,
            ))
            .stage(MonteCarloSimulator)
            .build()
    }

    /// Run the full pipeline and return the accumulated state, all five
    /// output keys included. Useful for auditing how an outcome was reached.
    pub async fn run_pipeline(
        &self,
        pairing: &MatchPairing,
    ) -> Result<PipelineState, PipelineError> {
        self.build_pipeline(pairing)
            .evaluate(PipelineState::new())
            .await
    }

    /// Evaluate one pairing to its discrete outcome.
    pub async fn evaluate(&self, pairing: &MatchPairing) -> Result<MatchOutcome, PipelineError> {
        let state = self.run_pipeline(pairing).await?;

        let results = state
            .require(keys::SIMULATION_RESULTS)
            .map_err(|error| PipelineError::new("monte_carlo_simulator", error))?;
        serde_json::from_value(results.clone()).map_err(|error| {
            PipelineError::new(
                "monte_carlo_simulator",
                StageError::MalformedOutput(error.to_string()),
            )
        })
    }
}
