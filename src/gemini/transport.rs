/// Outbound transport for generation requests
///
/// The client talks to the service through the `Transport` trait so the
/// response handling can be exercised without a network.

use std::future::Future;

use super::error::GenerationError;
use super::wire::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// One request/response exchange with the generation service
pub trait Transport: Clone + Send + Sync + 'static {
    fn send(
        &self,
        api_key: &str,
        model: &str,
        request: GenerateContentRequest,
    ) -> impl Future<Output = Result<GenerateContentResponse, GenerationError>> + Send;
}

/// HTTPS transport to the public REST endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        api_key: &str,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let endpoint = self.endpoint(model);
        tracing::debug!("🌐 POST {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::transport(error_message(status, &body)));
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

/// The service's own error message if the body carries one, else the status line
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| status.to_string())
}
