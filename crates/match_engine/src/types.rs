//! Pairing and profile types.

use datagolf::PlayerStats;
use serde::{Deserialize, Serialize};

/// One competitor in a match: player name plus team affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSide {
    pub player: String,
    pub team: String,
}

impl MatchSide {
    pub fn new(player: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
        }
    }
}

/// A head-to-head singles assignment. Immutable after construction;
/// `number` is the 1-based position in the tournament's reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPairing {
    pub number: usize,
    pub side_a: MatchSide,
    pub side_b: MatchSide,
}

impl MatchPairing {
    pub fn new(number: usize, side_a: MatchSide, side_b: MatchSide) -> Self {
        Self {
            number,
            side_a,
            side_b,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "Match {}: {} ({}) vs {} ({})",
            self.number, self.side_a.player, self.side_a.team, self.side_b.player, self.side_b.team
        )
    }
}

/// One player's fetched statistics together with their match identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub team: String,
    pub stats: PlayerStats,
}

/// The structured record the profiler stage publishes under
/// `player_profiles`: both players' two-window statistics merged with the
/// pairing identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchProfiles {
    pub number: usize,
    pub player_a: PlayerProfile,
    pub player_b: PlayerProfile,
}
