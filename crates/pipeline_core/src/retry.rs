//! Per-stage retry decorator.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::stage::{PipelineStage, StageError};
use crate::state::PipelineState;

/// How many times a wrapped stage may run and how long to back off between
/// attempts. Backoff grows linearly with the attempt number.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_millis(100),
        }
    }
}

/// Wraps a stage and retries recoverable failures with the same inputs.
///
/// Wiring defects (`MissingInput`, `DuplicateOutput`) are surfaced
/// immediately - retrying cannot fix a mis-wired pipeline.
pub struct RetryStage<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S: PipelineStage> RetryStage<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<S: PipelineStage> PipelineStage for RetryStage<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn required_keys(&self) -> &[&str] {
        self.inner.required_keys()
    }

    fn output_key(&self) -> &str {
        self.inner.output_key()
    }

    async fn execute(&self, state: &PipelineState) -> Result<Value, StageError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut last_error = None;

        for attempt in 0..attempts {
            match self.inner.execute(state).await {
                Ok(value) => return Ok(value),
                Err(error) if !error.is_recoverable() => return Err(error),
                Err(error) => {
                    log::warn!(
                        "stage '{}' attempt {}/{} failed: {}",
                        self.inner.name(),
                        attempt + 1,
                        attempts,
                        error
                    );
                    last_error = Some(error);
                    if attempt + 1 < attempts {
                        tokio::time::sleep(self.policy.backoff * (attempt + 1)).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| StageError::Service("retries exhausted".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    struct FlakyStage {
        failures_before_success: usize,
        recoverable: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl PipelineStage for FlakyStage {
        fn name(&self) -> &str {
            "flaky"
        }

        fn output_key(&self) -> &str {
            "out"
        }

        async fn execute(&self, _state: &PipelineState) -> Result<Value, StageError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                if self.recoverable {
                    Err(StageError::MalformedOutput("not json".into()))
                } else {
                    Err(StageError::MissingInput("player_profiles".into()))
                }
            } else {
                Ok(json!("ok"))
            }
        }
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            backoff: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn retries_recoverable_errors_until_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stage = RetryStage::new(
            FlakyStage {
                failures_before_success: 2,
                recoverable: true,
                calls: Arc::clone(&calls),
            },
            policy(3),
        );

        let value = stage.execute(&PipelineState::new()).await.unwrap();
        assert_eq!(value, json!("ok"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_retries_surface_the_last_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stage = RetryStage::new(
            FlakyStage {
                failures_before_success: usize::MAX,
                recoverable: true,
                calls: Arc::clone(&calls),
            },
            policy(2),
        );

        let err = stage.execute(&PipelineState::new()).await.unwrap_err();
        assert!(matches!(err, StageError::MalformedOutput(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn wiring_defects_are_never_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stage = RetryStage::new(
            FlakyStage {
                failures_before_success: usize::MAX,
                recoverable: false,
                calls: Arc::clone(&calls),
            },
            policy(5),
        );

        let err = stage.execute(&PipelineState::new()).await.unwrap_err();
        assert!(matches!(err, StageError::MissingInput(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
