//! Remote reasoner client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use pipeline_core::{Reasoner, ReasonerError, ReasonerRequest};

/// Posts each task to a hosted reasoning endpoint and returns the reply
/// body verbatim.
///
/// The endpoint receives `{"task", "instructions", "input"}` and may answer
/// with whatever text it likes - the pipeline recovers structure
/// best-effort. Nothing here assumes which model (if any) backs the
/// endpoint.
pub struct HttpReasoner {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpReasoner {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

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
impl Reasoner for HttpReasoner {
    async fn complete(&self, request: ReasonerRequest) -> Result<String, ReasonerError> {
        let body = json!({
            "task": request.task,
            "instructions": request.instructions,
            "input": request.input,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|error| self.classify(error))?;

        response
            .error_for_status()
            .map_err(|error| self.classify(error))?
            .text()
            .await
            .map_err(|error| self.classify(error))
    }
}

impl HttpReasoner {
    fn classify(&self, error: reqwest::Error) -> ReasonerError {
        if error.is_timeout() {
            ReasonerError::Timeout(self.timeout)
        } else {
            ReasonerError::Request(error.to_string())
        }
    }
}
