//! The five concrete stages of the match analysis pipeline.

pub mod analyst;
pub mod profiler;
pub mod simulator;
pub mod synthesizer;

pub use analyst::{BaselineSkillAnalyst, RecentFormAnalyst};
pub use profiler::PlayerProfiler;
pub use simulator::MonteCarloSimulator;
pub use synthesizer::MatchupSynthesizer;

/// State keys the stages publish, in pipeline order.
pub mod keys {
    pub const PLAYER_PROFILES: &str = "player_profiles";
    pub const RECENT_FORM_ANALYSIS: &str = "recent_form_analysis";
    pub const BASELINE_SKILL_ANALYSIS: &str = "baseline_skill_analysis";
    pub const MATCH_PROBABILITIES: &str = "match_probabilities";
    pub const SIMULATION_RESULTS: &str = "simulation_results";
}
