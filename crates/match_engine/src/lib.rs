//! Ryder Cup singles prediction engine.
//!
//! One match is analyzed by a five-stage sequential pipeline (profile,
//! recent form, baseline skill, probability synthesis, discrete outcome);
//! a tournament fans the per-match evaluations out concurrently and
//! accumulates points, tolerating individual match failures.

pub mod evaluator;
pub mod outcome;
pub mod prompts;
pub mod reasoner;
pub mod stages;
pub mod tournament;
pub mod types;

pub use evaluator::{EvaluatorConfig, MatchEvaluator};
pub use outcome::{MatchOutcome, MatchProbabilities, MatchResult};
pub use reasoner::{HttpReasoner, LocalReasoner};
pub use tournament::{
    MatchRecord, MatchStatus, StartingScore, TournamentConfig, TournamentReport, TournamentRunner,
};
pub use types::{MatchPairing, MatchProfiles, MatchSide, PlayerProfile};
