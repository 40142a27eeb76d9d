//! Match probabilities and the discrete outcome rule.

use serde::{Deserialize, Serialize};

/// Win/tie probability triple for one match.
///
/// Field aliases accept the wordier names the original synthesis prompt
/// asks a language model to emit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchProbabilities {
    #[serde(alias = "player_A_win_prob")]
    pub prob_a: f64,
    #[serde(alias = "player_B_win_prob")]
    pub prob_b: f64,
    #[serde(alias = "tie_prob")]
    pub prob_tie: f64,
}

impl MatchProbabilities {
    /// Tolerance on the triple summing to 1.0.
    pub const SUM_TOLERANCE: f64 = 1e-2;

    pub fn new(prob_a: f64, prob_b: f64, prob_tie: f64) -> Self {
        Self {
            prob_a,
            prob_b,
            prob_tie,
        }
    }

    pub fn sum(&self) -> f64 {
        self.prob_a + self.prob_b + self.prob_tie
    }

    /// Each component in [0, 1] and the sum within tolerance of 1.0.
    pub fn is_valid(&self) -> bool {
        let in_unit = |p: f64| (0.0..=1.0).contains(&p);
        in_unit(self.prob_a)
            && in_unit(self.prob_b)
            && in_unit(self.prob_tie)
            && (self.sum() - 1.0).abs() <= Self::SUM_TOLERANCE
    }
}

/// The three discrete match results, mapped to match-play points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    WinA,
    Tie,
    WinB,
}

impl MatchResult {
    /// Deterministic tie-break over a probability triple.
    ///
    /// Side A wins only when its probability is strictly greater than both
    /// others, likewise side B; every remaining case - any equality at the
    /// maximum, or the tie probability itself being maximal - is a tie.
    pub fn from_probabilities(probabilities: &MatchProbabilities) -> Self {
        let MatchProbabilities {
            prob_a,
            prob_b,
            prob_tie,
        } = *probabilities;

        if prob_a > prob_b && prob_a > prob_tie {
            MatchResult::WinA
        } else if prob_b > prob_a && prob_b > prob_tie {
            MatchResult::WinB
        } else {
            MatchResult::Tie
        }
    }

    /// Points credited to side A: win 1.0, tie 0.5, loss 0.0.
    pub fn points_a(&self) -> f64 {
        match self {
            MatchResult::WinA => 1.0,
            MatchResult::Tie => 0.5,
            MatchResult::WinB => 0.0,
        }
    }

    /// Points credited to side B.
    pub fn points_b(&self) -> f64 {
        1.0 - self.points_a()
    }
}

/// A resolved match: the discrete result plus the probability triple that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub probabilities: MatchProbabilities,
}
