//! End-to-end flows through the match analysis pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use datagolf::{DataGolfError, MockDataGolf, PlayerStats, StatsProvider, StrokesGained};
use match_engine::stages::keys;
use match_engine::{
    LocalReasoner, MatchEvaluator, MatchPairing, MatchResult, MatchSide, StartingScore,
    TournamentConfig, TournamentRunner,
};
use pipeline_core::{Reasoner, ReasonerError, ReasonerRequest, StageError};

/// Stats stub serving a fixed roster, for matchups the tour dataset does
/// not contain.
struct FixtureStats {
    players: HashMap<String, PlayerStats>,
}

impl FixtureStats {
    fn with_flat_totals(entries: &[(&str, f64)]) -> Self {
        let players = entries
            .iter()
            .map(|(name, total)| {
                (
                    (*name).to_string(),
                    PlayerStats {
                        baseline: StrokesGained::flat(*total),
                        recent: StrokesGained::flat(*total),
                    },
                )
            })
            .collect();
        Self { players }
    }
}

#[async_trait]
impl StatsProvider for FixtureStats {
    async fn fetch(&self, player_name: &str) -> Result<PlayerStats, DataGolfError> {
        self.players
            .get(player_name)
            .copied()
            .ok_or_else(|| DataGolfError::NotFound(player_name.to_string()))
    }
}

/// Reasoner with canned replies: empty analyses, then a fixed prose-wrapped
/// probability triple.
struct ScriptedSynthesis;

#[async_trait]
impl Reasoner for ScriptedSynthesis {
    async fn complete(&self, request: ReasonerRequest) -> Result<String, ReasonerError> {
        let reply = match request.task.as_str() {
            keys::MATCH_PROBABILITIES => {
                "Weighing form against baseline: \
                 {\"prob_a\": 0.6, \"prob_b\": 0.3, \"prob_tie\": 0.1}"
            }
            _ => "{\"summary\": \"no separation worth noting\"}",
        };
        Ok(reply.to_string())
    }
}

fn pairing(number: usize, player_a: &str, player_b: &str) -> MatchPairing {
    MatchPairing::new(
        number,
        MatchSide::new(player_a, "Europe"),
        MatchSide::new(player_b, "USA"),
    )
}

#[tokio::test]
async fn flat_two_vs_one_baseline_resolves_to_a_full_point() {
    let stats = Arc::new(FixtureStats::with_flat_totals(&[("A", 2.0), ("B", 1.0)]));
    let evaluator = Arc::new(MatchEvaluator::new(stats, Arc::new(LocalReasoner)));
    let runner = TournamentRunner::new(
        evaluator,
        TournamentConfig {
            starting_score: StartingScore {
                side_a: 0.0,
                side_b: 0.0,
            },
            ..TournamentConfig::default()
        },
    );

    let report = runner
        .run(vec![pairing(1, "A", "B")], CancellationToken::new())
        .await;

    assert!(!report.is_partial());
    assert_eq!(report.score_a, 1.0);
    assert_eq!(report.score_b, 0.0);
}

#[tokio::test]
async fn scripted_probabilities_resolve_through_the_whole_pipeline() {
    let evaluator = MatchEvaluator::new(
        Arc::new(MockDataGolf::instant()),
        Arc::new(ScriptedSynthesis),
    );

    let outcome = evaluator
        .evaluate(&pairing(1, "Justin Rose", "Cameron Young"))
        .await
        .unwrap();

    assert_eq!(outcome.result, MatchResult::WinA);
    assert_eq!(outcome.probabilities.prob_a, 0.6);
    assert_eq!(outcome.result.points_a(), 1.0);
}

#[tokio::test]
async fn pipeline_state_holds_exactly_the_five_stage_outputs() {
    let evaluator = MatchEvaluator::new(Arc::new(MockDataGolf::instant()), Arc::new(LocalReasoner));

    let state = evaluator
        .run_pipeline(&pairing(4, "Rory McIlroy", "Scottie Scheffler"))
        .await
        .unwrap();

    let mut keys_found: Vec<_> = state.keys().collect();
    keys_found.sort_unstable();
    assert_eq!(
        keys_found,
        vec![
            keys::BASELINE_SKILL_ANALYSIS,
            keys::MATCH_PROBABILITIES,
            keys::PLAYER_PROFILES,
            keys::RECENT_FORM_ANALYSIS,
            keys::SIMULATION_RESULTS,
        ]
    );
}

#[tokio::test]
async fn unknown_player_marks_only_that_match_unscored() {
    let evaluator = Arc::new(MatchEvaluator::new(
        Arc::new(MockDataGolf::instant()),
        Arc::new(LocalReasoner),
    ));
    let runner = TournamentRunner::new(evaluator, TournamentConfig::default());

    let report = runner
        .run(
            vec![
                pairing(1, "Justin Rose", "Cameron Young"),
                pairing(2, "Shane Lowry", "Nobody"),
                pairing(3, "Tyrrell Hatton", "Collin Morikawa"),
            ],
            CancellationToken::new(),
        )
        .await;

    assert_eq!(report.scored_count(), 2);
    assert!(report.is_partial());

    let failed: Vec<_> = report.unscored().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].pairing.number, 2);
    match &failed[0].status {
        match_engine::MatchStatus::Failed(error) => {
            assert_eq!(error.stage, "player_profiler");
            assert!(
                matches!(error.source, StageError::PlayerNotFound(ref name) if name == "Nobody")
            );
        }
        other => panic!("unexpected status: {other:?}"),
    }
}

#[tokio::test]
async fn full_sunday_singles_card_runs_concurrently() {
    let card = [
        ("Justin Rose", "Cameron Young"),
        ("Tommy Fleetwood", "Justin Thomas"),
        ("Matt Fitzpatrick", "Bryson DeChambeau"),
        ("Rory McIlroy", "Scottie Scheffler"),
        ("Ludvig Åberg", "Patrick Cantlay"),
        ("Jon Rahm", "Xander Schauffele"),
        ("Sepp Straka", "J.J. Spaun"),
        ("Shane Lowry", "Russell Henley"),
        ("Rasmus Højgaard", "Ben Griffin"),
        ("Tyrrell Hatton", "Collin Morikawa"),
        ("Robert MacIntyre", "Sam Burns"),
        ("Viktor Hovland", "Harris English"),
    ];
    let pairings: Vec<_> = card
        .iter()
        .enumerate()
        .map(|(index, (a, b))| pairing(index + 1, a, b))
        .collect();

    let evaluator = Arc::new(MatchEvaluator::new(
        Arc::new(MockDataGolf::instant()),
        Arc::new(LocalReasoner),
    ));
    let runner = TournamentRunner::new(
        evaluator,
        TournamentConfig {
            starting_score: StartingScore {
                side_a: 11.5,
                side_b: 4.5,
            },
            max_concurrent_matches: 4,
            ..TournamentConfig::default()
        },
    );

    let report = runner.run(pairings, CancellationToken::new()).await;

    assert_eq!(report.scored_count(), 12);
    assert!(!report.is_partial());
    // Every point awarded lands on exactly one side.
    let total = report.score_a + report.score_b;
    assert!((total - (11.5 + 4.5 + 12.0)).abs() < 1e-9);
}
