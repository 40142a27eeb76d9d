//! Deterministic offline reasoner.
//!
//! Computes the same analyses the stage instructions ask a language model
//! for, straight from the structured input. Keeps the whole pipeline
//! runnable without any hosted model and gives tests a reasoner whose
//! output is exactly reproducible.

use async_trait::async_trait;
use serde_json::{json, Value};

use pipeline_core::{Reasoner, ReasonerError, ReasonerRequest};

use crate::stages::keys;
use crate::types::{MatchProfiles, PlayerProfile};

/// Total-delta threshold separating "steady" from a real form move.
const TREND_THRESHOLD: f64 = 0.05;
/// Weight of the form delta relative to the baseline gap.
const FORM_WEIGHT: f64 = 0.5;
/// Logistic steepness on the combined strokes-gained edge.
const EDGE_STEEPNESS: f64 = 1.1;

pub struct LocalReasoner;

#[async_trait]
impl Reasoner for LocalReasoner {
    async fn complete(&self, request: ReasonerRequest) -> Result<String, ReasonerError> {
        let value = match request.task.as_str() {
            keys::RECENT_FORM_ANALYSIS => recent_form(&request.input)?,
            keys::BASELINE_SKILL_ANALYSIS => baseline_skill(&request.input)?,
            keys::MATCH_PROBABILITIES => synthesize(&request.input)?,
            other => {
                return Err(ReasonerError::Request(format!(
                    "unsupported task: {other}"
                )))
            }
        };

        serde_json::to_string(&value).map_err(|error| ReasonerError::Request(error.to_string()))
    }
}

fn profiles(input: &Value) -> Result<MatchProfiles, ReasonerError> {
    serde_json::from_value(input.clone())
        .map_err(|error| ReasonerError::Request(format!("unexpected profile input: {error}")))
}

fn recent_form(input: &Value) -> Result<Value, ReasonerError> {
    let profiles = profiles(input)?;
    Ok(json!({
        "player_a": form_summary(&profiles.player_a),
        "player_b": form_summary(&profiles.player_b),
    }))
}

fn form_summary(profile: &PlayerProfile) -> Value {
    let total_delta = profile.stats.recent.total - profile.stats.baseline.total;
    let trend = if total_delta >= TREND_THRESHOLD {
        "improving"
    } else if total_delta <= -TREND_THRESHOLD {
        "declining"
    } else {
        "steady"
    };

    let deltas: Value = profile
        .stats
        .recent
        .by_category()
        .iter()
        .zip(profile.stats.baseline.by_category())
        .map(|((name, recent), (_, baseline))| ((*name).to_string(), json!(recent - baseline)))
        .collect::<serde_json::Map<_, _>>()
        .into();

    json!({
        "name": profile.name,
        "trend": trend,
        "total_delta": total_delta,
        "deltas": deltas,
    })
}

fn baseline_skill(input: &Value) -> Result<Value, ReasonerError> {
    let profiles = profiles(input)?;
    Ok(json!({
        "player_a": skill_summary(&profiles.player_a),
        "player_b": skill_summary(&profiles.player_b),
    }))
}

fn skill_summary(profile: &PlayerProfile) -> Value {
    let categories = profile.stats.baseline.by_category();
    let strongest = categories
        .iter()
        .max_by(|left, right| left.1.total_cmp(&right.1))
        .map(|(name, _)| *name)
        .unwrap_or_default();
    let weakest = categories
        .iter()
        .min_by(|left, right| left.1.total_cmp(&right.1))
        .map(|(name, _)| *name)
        .unwrap_or_default();

    let by_category: Value = categories
        .iter()
        .map(|(name, value)| ((*name).to_string(), json!(value)))
        .collect::<serde_json::Map<_, _>>()
        .into();

    json!({
        "name": profile.name,
        "baseline_total": profile.stats.baseline.total,
        "strongest": strongest,
        "weakest": weakest,
        "categories": by_category,
    })
}

fn synthesize(input: &Value) -> Result<Value, ReasonerError> {
    let baseline_a = number(input, "/baseline_skill_analysis/player_a/baseline_total")?;
    let baseline_b = number(input, "/baseline_skill_analysis/player_b/baseline_total")?;
    let delta_a = number(input, "/recent_form_analysis/player_a/total_delta")?;
    let delta_b = number(input, "/recent_form_analysis/player_b/total_delta")?;

    let edge = (baseline_a - baseline_b) + FORM_WEIGHT * (delta_a - delta_b);

    // Closer matches carry more tie risk.
    let prob_tie = (0.25 - 0.08 * edge.abs()).clamp(0.05, 0.25);
    let win_share = 1.0 / (1.0 + (-EDGE_STEEPNESS * edge).exp());

    let prob_a = round3((1.0 - prob_tie) * win_share);
    let prob_tie = round3(prob_tie);
    let prob_b = round3(1.0 - prob_tie - prob_a);

    Ok(json!({
        "prob_a": prob_a,
        "prob_b": prob_b,
        "prob_tie": prob_tie,
    }))
}

fn number(input: &Value, pointer: &str) -> Result<f64, ReasonerError> {
    input
        .pointer(pointer)
        .and_then(Value::as_f64)
        .ok_or_else(|| ReasonerError::Request(format!("missing numeric field at {pointer}")))
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
