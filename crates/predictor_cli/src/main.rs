//! Ryder Cup singles predictor.
//!
//! Runs every configured pairing through the five-stage match analysis
//! pipeline and prints the projected final score. Works fully offline
//! against the built-in stats table and deterministic reasoner; point it at
//! hosted endpoints with `--data-url` / `--reasoner-url`.

mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use datagolf::{MockDataGolf, RemoteDataGolf, StatsProvider};
use match_engine::{
    HttpReasoner, LocalReasoner, MatchEvaluator, MatchResult, MatchStatus, TournamentReport,
    TournamentRunner,
};
use pipeline_core::Reasoner;

use crate::config::TournamentSetup;

#[derive(Debug, Parser)]
#[command(name = "predictor", about = "Predict Ryder Cup singles outcomes")]
struct Args {
    /// Tournament setup JSON (teams, starting score, pairings). Defaults to
    /// the 2025 Sunday singles card.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of matches evaluated at the same time.
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// Hosted reasoning endpoint; omitted = deterministic local analyst.
    #[arg(long, env = "PREDICTOR_REASONER_URL")]
    reasoner_url: Option<String>,

    /// Remote stats endpoint; omitted = built-in mock dataset.
    #[arg(long, env = "PREDICTOR_DATA_URL")]
    data_url: Option<String>,

    /// Per-lookup timeout against the stats service, in milliseconds.
    #[arg(long, default_value_t = 2_000)]
    lookup_timeout_ms: u64,

    /// Per-call timeout against the reasoning endpoint, in milliseconds.
    #[arg(long, default_value_t = 60_000)]
    reasoner_timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let setup = match &args.config {
        Some(path) => TournamentSetup::from_file(path)?,
        None => TournamentSetup::ryder_cup_2025(),
    };

    let stats: Arc<dyn StatsProvider> = match &args.data_url {
        Some(url) => Arc::new(RemoteDataGolf::new(
            url.clone(),
            Duration::from_millis(args.lookup_timeout_ms),
        )),
        None => Arc::new(
            MockDataGolf::new().with_timeout(Duration::from_millis(args.lookup_timeout_ms)),
        ),
    };

    let reasoner: Arc<dyn Reasoner> = match &args.reasoner_url {
        Some(url) => Arc::new(HttpReasoner::new(
            url.clone(),
            Duration::from_millis(args.reasoner_timeout_ms),
        )),
        None => Arc::new(LocalReasoner),
    };

    let evaluator = Arc::new(MatchEvaluator::new(stats, reasoner));
    let runner = TournamentRunner::new(evaluator, setup.tournament_config(args.concurrency));

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("shutdown requested; letting running matches finish");
            signal_cancel.cancel();
        }
    });

    let report = runner.run(setup.match_pairings(), cancel).await;
    print_report(&report);
    Ok(())
}

fn print_report(report: &TournamentReport) {
    for record in &report.records {
        let pairing = &record.pairing;
        match &record.status {
            MatchStatus::Scored(outcome) => {
                let verdict = match outcome.result {
                    MatchResult::WinA => format!("{} wins", pairing.side_a.player),
                    MatchResult::WinB => format!("{} wins", pairing.side_b.player),
                    MatchResult::Tie => "match halved".to_string(),
                };
                println!(
                    "{}  ->  {}  [pA {:.2}, pB {:.2}, tie {:.2}]",
                    pairing.label(),
                    verdict,
                    outcome.probabilities.prob_a,
                    outcome.probabilities.prob_b,
                    outcome.probabilities.prob_tie,
                );
            }
            MatchStatus::Failed(error) => {
                println!("{}  ->  unscored: {}", pairing.label(), error);
            }
            MatchStatus::Skipped => {
                println!("{}  ->  skipped: shutdown requested", pairing.label());
            }
        }
    }

    let qualifier = if report.is_partial() {
        format!(
            " (partial: {} of {} matches scored)",
            report.scored_count(),
            report.records.len()
        )
    } else {
        String::new()
    };
    println!();
    println!(
        "Final score{}: {} {} - {} {}",
        qualifier, report.team_a, report.score_a, report.team_b, report.score_b,
    );
}
