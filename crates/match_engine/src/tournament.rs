//! Tournament-level fan-out and score aggregation.

use std::sync::Arc;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

use pipeline_core::PipelineError;

use crate::evaluator::MatchEvaluator;
use crate::outcome::MatchOutcome;
use crate::types::MatchPairing;

/// Points on the board before the matches under evaluation begin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StartingScore {
    pub side_a: f64,
    pub side_b: f64,
}

#[derive(Debug, Clone)]
pub struct TournamentConfig {
    pub team_a: String,
    pub team_b: String,
    pub starting_score: StartingScore,
    /// Upper bound on simultaneously evaluated matches, to cap load on the
    /// stats service and the reasoning process.
    pub max_concurrent_matches: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            team_a: "Europe".to_string(),
            team_b: "USA".to_string(),
            starting_score: StartingScore {
                side_a: 0.0,
                side_b: 0.0,
            },
            max_concurrent_matches: 4,
        }
    }
}

/// How one match ended up in the report.
#[derive(Debug)]
pub enum MatchStatus {
    Scored(MatchOutcome),
    /// The match's pipeline failed; the error names the stage and kind.
    Failed(PipelineError),
    /// Cancellation arrived before this match launched.
    Skipped,
}

#[derive(Debug)]
pub struct MatchRecord {
    pub pairing: MatchPairing,
    pub status: MatchStatus,
}

/// Per-match results in pairing order plus the aggregated score.
#[derive(Debug)]
pub struct TournamentReport {
    pub team_a: String,
    pub team_b: String,
    pub score_a: f64,
    pub score_b: f64,
    pub records: Vec<MatchRecord>,
}

impl TournamentReport {
    pub fn scored(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records
            .iter()
            .filter(|record| matches!(record.status, MatchStatus::Scored(_)))
    }

    pub fn unscored(&self) -> impl Iterator<Item = &MatchRecord> {
        self.records
            .iter()
            .filter(|record| !matches!(record.status, MatchStatus::Scored(_)))
    }

    pub fn scored_count(&self) -> usize {
        self.scored().count()
    }

    /// True when any match went unscored, meaning the totals cover only a
    /// subset of the matches.
    pub fn is_partial(&self) -> bool {
        self.unscored().next().is_some()
    }
}

/// Runs every pairing through a [`MatchEvaluator`], concurrently up to the
/// configured bound.
///
/// Matches are independent: one match failing is recorded and the rest
/// continue. Results are attributed to their pairing by its number, never
/// by completion order, and scores are summed by this single owner after
/// all evaluations return.
pub struct TournamentRunner {
    evaluator: Arc<MatchEvaluator>,
    config: TournamentConfig,
}

impl TournamentRunner {
    pub fn new(evaluator: Arc<MatchEvaluator>, config: TournamentConfig) -> Self {
        Self { evaluator, config }
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub async fn run(
        &self,
        pairings: Vec<MatchPairing>,
        cancel: CancellationToken,
    ) -> TournamentReport {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_matches.max(1)));

        let evaluations = pairings.into_iter().map(|pairing| {
            let evaluator = Arc::clone(&self.evaluator);
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();
            async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        return MatchRecord {
                            pairing,
                            status: MatchStatus::Skipped,
                        }
                    }
                };

                // Launch gate: once shutdown is requested, matches that
                // have not started stay unlaunched.
                if cancel.is_cancelled() {
                    log::info!("match {} skipped: shutdown requested", pairing.number);
                    return MatchRecord {
                        pairing,
                        status: MatchStatus::Skipped,
                    };
                }

                log::debug!("evaluating {}", pairing.label());
                match evaluator.evaluate(&pairing).await {
                    Ok(outcome) => MatchRecord {
                        pairing,
                        status: MatchStatus::Scored(outcome),
                    },
                    Err(error) => {
                        log::warn!("match {} unscored: {}", pairing.number, error);
                        MatchRecord {
                            pairing,
                            status: MatchStatus::Failed(error),
                        }
                    }
                }
            }
        });

        let mut records = join_all(evaluations).await;
        records.sort_by_key(|record| record.pairing.number);

        let mut score_a = self.config.starting_score.side_a;
        let mut score_b = self.config.starting_score.side_b;
        for record in &records {
            if let MatchStatus::Scored(outcome) = &record.status {
                score_a += outcome.result.points_a();
                score_b += outcome.result.points_b();
            }
        }

        TournamentReport {
            team_a: self.config.team_a.clone(),
            team_b: self.config.team_b.clone(),
            score_a,
            score_b,
            records,
        }
    }
}
