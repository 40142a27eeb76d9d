//! HTTP client for a real stats endpoint speaking the mock wire contract.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::service::{DataGolfError, Result, StatsProvider};
use crate::types::PlayerStats;

/// Remote lookup over HTTP.
///
/// The endpoint takes the player name as a `player` query parameter and
/// responds with either the two-window stats object or `{"error": "..."}`
/// for an unknown name, the same shape the mock serves.
pub struct RemoteDataGolf {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteDataGolf {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[async_trait]
impl StatsProvider for RemoteDataGolf {
    async fn fetch(&self, player_name: &str) -> Result<PlayerStats> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("player", player_name)])
            .send()
            .await
            .map_err(|error| classify(error, player_name, self.timeout))?;

        let body: Value = response
            .error_for_status()
            .map_err(|error| classify(error, player_name, self.timeout))?
            .json()
            .await
            .map_err(|error| classify(error, player_name, self.timeout))?;

        if body.get("error").is_some() {
            return Err(DataGolfError::NotFound(player_name.to_string()));
        }

        serde_json::from_value(body).map_err(|error| DataGolfError::Unavailable {
            name: player_name.to_string(),
            message: format!("unexpected response shape: {error}"),
        })
    }
}

fn classify(error: reqwest::Error, player_name: &str, timeout: Duration) -> DataGolfError {
    if error.is_timeout() {
        DataGolfError::Timeout {
            name: player_name.to_string(),
            timeout,
        }
    } else {
        DataGolfError::Unavailable {
            name: player_name.to_string(),
            message: error.to_string(),
        }
    }
}
