//! Lookup service contract and the in-process mock implementation.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::mock_data::TOUR_PLAYER_DATA;
use crate::types::PlayerStats;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataGolfError {
    #[error("no data found for player: {0}")]
    NotFound(String),

    #[error("lookup for '{name}' timed out after {timeout:?}")]
    Timeout { name: String, timeout: Duration },

    #[error("stats request for '{name}' failed: {message}")]
    Unavailable { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, DataGolfError>;

/// Read-only strokes-gained lookup. Deterministic for a given name and safe
/// to call concurrently.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch both statistic windows for `player_name`. Lookup is by exact
    /// string match - no case folding, no diacritic stripping.
    async fn fetch(&self, player_name: &str) -> Result<PlayerStats>;
}

/// Mock service backed by the static tour data table.
///
/// Simulates a small network delay per lookup, bounded by a timeout so a
/// stalled lookup fails with a recoverable [`DataGolfError::Timeout`]
/// instead of blocking its caller.
pub struct MockDataGolf {
    delay: Duration,
    timeout: Duration,
}

impl MockDataGolf {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// No simulated latency; used by tests that only care about the data.
    pub fn instant() -> Self {
        Self {
            delay: Duration::ZERO,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for MockDataGolf {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for MockDataGolf {
    async fn fetch(&self, player_name: &str) -> Result<PlayerStats> {
        let lookup = async {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            TOUR_PLAYER_DATA
                .get(player_name)
                .copied()
                .ok_or_else(|| DataGolfError::NotFound(player_name.to_string()))
        };

        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => {
                if result.is_ok() {
                    log::debug!("stats lookup hit for '{player_name}'");
                }
                result
            }
            Err(_) => Err(DataGolfError::Timeout {
                name: player_name.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}
