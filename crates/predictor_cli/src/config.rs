//! Tournament setup loading.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use match_engine::{MatchPairing, MatchSide, StartingScore, TournamentConfig};

/// Teams, score going into the session, and the ordered singles card.
///
/// Loaded from a JSON file, or defaulted to the 2025 Sunday singles.
#[derive(Debug, Clone, Deserialize)]
pub struct TournamentSetup {
    pub team_a: String,
    pub team_b: String,
    pub starting_score: StartingScore,
    /// Ordered (side A player, side B player) assignments.
    pub pairings: Vec<(String, String)>,
}

impl TournamentSetup {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading tournament setup from {}", path.display()))?;
        let setup: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing tournament setup from {}", path.display()))?;
        if setup.pairings.is_empty() {
            anyhow::bail!("tournament setup has no pairings");
        }
        Ok(setup)
    }

    /// The 2025 Ryder Cup Sunday singles card, Europe 11.5 - USA 4.5 after
    /// Saturday.
    pub fn ryder_cup_2025() -> Self {
        let card = [
            ("Justin Rose", "Cameron Young"),
            ("Tommy Fleetwood", "Justin Thomas"),
            ("Matt Fitzpatrick", "Bryson DeChambeau"),
            ("Rory McIlroy", "Scottie Scheffler"),
            ("Ludvig Åberg", "Patrick Cantlay"),
            ("Jon Rahm", "Xander Schauffele"),
            ("Sepp Straka", "J. J. Spaun"),
            ("Shane Lowry", "Russell Henley"),
            ("Rasmus Højgaard", "Ben Griffin"),
            ("Tyrrell Hatton", "Collin Morikawa"),
            ("Robert MacIntyre", "Sam Burns"),
            ("Viktor Hovland", "Harris English"),
        ];

        Self {
            team_a: "Europe".to_string(),
            team_b: "USA".to_string(),
            starting_score: StartingScore {
                side_a: 11.5,
                side_b: 4.5,
            },
            pairings: card
                .iter()
                .map(|(a, b)| ((*a).to_string(), (*b).to_string()))
                .collect(),
        }
    }

    pub fn match_pairings(&self) -> Vec<MatchPairing> {
        self.pairings
            .iter()
            .enumerate()
            .map(|(index, (player_a, player_b))| {
                MatchPairing::new(
                    index + 1,
                    MatchSide::new(player_a.clone(), self.team_a.clone()),
                    MatchSide::new(player_b.clone(), self.team_b.clone()),
                )
            })
            .collect()
    }

    pub fn tournament_config(&self, max_concurrent_matches: usize) -> TournamentConfig {
        TournamentConfig {
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
            starting_score: self.starting_score,
            max_concurrent_matches,
        }
    }
}
