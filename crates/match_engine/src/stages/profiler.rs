//! Stage 1: fetch both players' statistics and merge them into one record.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use datagolf::{DataGolfError, StatsProvider};
use pipeline_core::{PipelineStage, PipelineState, StageError};

use crate::stages::keys;
use crate::types::{MatchPairing, MatchProfiles, PlayerProfile};

/// Resolves a pairing's two player names against the stats service and
/// publishes the merged [`MatchProfiles`] record. The only stage that
/// performs an external data fetch; it reads nothing from state.
pub struct PlayerProfiler {
    stats: Arc<dyn StatsProvider>,
    pairing: MatchPairing,
}

impl PlayerProfiler {
    pub fn new(stats: Arc<dyn StatsProvider>, pairing: MatchPairing) -> Self {
        Self { stats, pairing }
    }
}

#[async_trait]
impl PipelineStage for PlayerProfiler {
    fn name(&self) -> &str {
        "player_profiler"
    }

    fn output_key(&self) -> &str {
        keys::PLAYER_PROFILES
    }

    async fn execute(&self, _state: &PipelineState) -> Result<Value, StageError> {
        let (stats_a, stats_b) = tokio::join!(
            self.stats.fetch(&self.pairing.side_a.player),
            self.stats.fetch(&self.pairing.side_b.player),
        );

        let profiles = MatchProfiles {
            number: self.pairing.number,
            player_a: PlayerProfile {
                name: self.pairing.side_a.player.clone(),
                team: self.pairing.side_a.team.clone(),
                stats: stats_a.map_err(into_stage_error)?,
            },
            player_b: PlayerProfile {
                name: self.pairing.side_b.player.clone(),
                team: self.pairing.side_b.team.clone(),
                stats: stats_b.map_err(into_stage_error)?,
            },
        };

        serde_json::to_value(&profiles)
            .map_err(|error| StageError::MalformedOutput(error.to_string()))
    }
}

fn into_stage_error(error: DataGolfError) -> StageError {
    match error {
        DataGolfError::NotFound(name) => StageError::PlayerNotFound(name),
        DataGolfError::Timeout { name, timeout } => StageError::Timeout {
            operation: format!("stats lookup for '{name}'"),
            timeout,
        },
        DataGolfError::Unavailable { name, message } => {
            StageError::Service(format!("stats lookup for '{name}': {message}"))
        }
    }
}
