/// Image generation client
///
/// Sends one image plus one instruction to the generation service and pulls
/// a single image out of the answer. One attempt per call: no retries, no
/// caching, no streaming.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::data_uri::DataUri;
use super::error::GenerationError;
use super::transport::{HttpTransport, Transport};
use super::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct GeminiClient<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl GeminiClient<HttpTransport> {
    /// Client talking to the configured HTTPS endpoint
    pub fn new(config: Config) -> Self {
        let transport = HttpTransport::new(config.api_base_url.clone());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> GeminiClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate an edited version of `image` following `prompt`
    ///
    /// Returns the generated image as a data URI.
    pub async fn generate(
        &self,
        image: &[u8],
        mime_type: &str,
        prompt: &str,
    ) -> Result<DataUri, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingCredential)?;

        let request = GenerateContentRequest::image_edit(mime_type, BASE64.encode(image), prompt);

        tracing::info!(
            "🪄 Requesting {} ({} bytes of {}, prompt of {} chars)",
            self.config.model,
            image.len(),
            mime_type,
            prompt.chars().count()
        );

        let result = match self.transport.send(api_key, &self.config.model, request).await {
            Ok(response) => extract_image(response),
            Err(err) => Err(err),
        };

        match &result {
            Ok(uri) => tracing::info!("✅ Received {} image", uri.mime_type()),
            Err(err) => tracing::error!("❌ Generation failed: {}", err),
        }

        result
    }
}

/// Pull the generated image out of a response
///
/// Only the first candidate is considered, and within it the first part
/// carrying inline data wins.
pub fn extract_image(response: GenerateContentResponse) -> Result<DataUri, GenerationError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GenerationError::NoCandidates)?;

    let content = match candidate.content {
        Some(content) => content,
        None => {
            return Err(match candidate.finish_reason {
                Some(reason) if !reason.is_empty() => GenerationError::Blocked(reason),
                _ => GenerationError::NoContent,
            })
        }
    };

    if content.parts.is_empty() {
        return Err(GenerationError::NoParts);
    }

    let image = content.parts.iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        let data = inline.data.as_deref().filter(|d| !d.is_empty())?;
        Some(DataUri::from_base64(inline.mime_type.as_deref(), data))
    });

    if let Some(uri) = image {
        return Ok(uri);
    }

    // The model sometimes explains a refusal in plain text
    let text = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .find(|text| !text.is_empty());

    match text {
        Some(text) => Err(GenerationError::TextInsteadOfImage(text.to_string())),
        None => Err(GenerationError::NoImageData),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::wire::{Candidate, Content, InlineData, Part};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory transport answering every request with the same outcome
    #[derive(Clone)]
    struct FakeTransport {
        outcome: Result<GenerateContentResponse, GenerationError>,
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<(String, String, GenerateContentRequest)>>>,
    }

    impl FakeTransport {
        fn answering(outcome: Result<GenerateContentResponse, GenerationError>) -> Self {
            Self {
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }

        fn responding(value: serde_json::Value) -> Self {
            Self::answering(Ok(serde_json::from_value(value).unwrap()))
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for FakeTransport {
        async fn send(
            &self,
            api_key: &str,
            model: &str,
            request: GenerateContentRequest,
        ) -> Result<GenerateContentResponse, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() =
                Some((api_key.to_string(), model.to_string(), request));
            self.outcome.clone()
        }
    }

    fn client(transport: FakeTransport) -> GeminiClient<FakeTransport> {
        let config = Config {
            api_key: Some("test-key".into()),
            ..Config::default()
        };
        GeminiClient::with_transport(config, transport)
    }

    async fn generate_with(response: serde_json::Value) -> Result<String, GenerationError> {
        client(FakeTransport::responding(response))
            .generate(b"fake image", "image/png", "edit")
            .await
            .map(|uri| uri.to_string())
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_call() {
        let transport = FakeTransport::responding(json!({}));
        let client = GeminiClient::with_transport(Config::default(), transport.clone());

        let result = client.generate(b"bytes", "image/png", "prompt").await;

        assert_eq!(result, Err(GenerationError::MissingCredential));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_request_carries_image_then_prompt() {
        let transport = FakeTransport::responding(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "AAAA" } }] } }]
        }));

        client(transport.clone())
            .generate(&[1, 2, 3], "image/webp", "add snow")
            .await
            .unwrap();

        assert_eq!(transport.calls(), 1);
        let (api_key, model, request) = transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(api_key, "test-key");
        assert_eq!(model, "gemini-2.5-flash-image");
        assert_eq!(request, GenerateContentRequest::image_edit("image/webp", "AQID".into(), "add snow"));
    }

    #[tokio::test]
    async fn test_zero_candidates() {
        assert_eq!(
            generate_with(json!({ "candidates": [] })).await,
            Err(GenerationError::NoCandidates)
        );
    }

    #[tokio::test]
    async fn test_safety_finish_reason() {
        let err = generate_with(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
            .await
            .unwrap_err();

        assert_eq!(err, GenerationError::Blocked("SAFETY".into()));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_candidate_without_content_or_reason() {
        assert_eq!(
            generate_with(json!({ "candidates": [{}] })).await,
            Err(GenerationError::NoContent)
        );
    }

    #[tokio::test]
    async fn test_content_without_parts() {
        assert_eq!(
            generate_with(json!({ "candidates": [{ "content": { "parts": [] } }] })).await,
            Err(GenerationError::NoParts)
        );
    }

    #[tokio::test]
    async fn test_text_refusal_is_reported_verbatim() {
        let err = generate_with(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I can't do that" }] } }]
        }))
        .await
        .unwrap_err();

        assert!(err.to_string().contains("I can't do that"));
    }

    #[tokio::test]
    async fn test_inline_png() {
        assert_eq!(
            generate_with(json!({
                "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "AAAA" } }] } }]
            }))
            .await,
            Ok("data:image/png;base64,AAAA".to_string())
        );
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let transport = FakeTransport::answering(Err(GenerationError::transport("connection reset")));

        let err = client(transport).generate(b"x", "image/png", "p").await.unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
    }

    #[test]
    fn test_first_image_part_wins_over_text() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part { text: Some("Here you go".into()), inline_data: None },
                        Part {
                            inline_data: Some(InlineData { mime_type: Some("image/jpeg".into()), data: Some("Zmlyc3Q=".into()) }),
                            text: None,
                        },
                        Part {
                            inline_data: Some(InlineData { mime_type: Some("image/png".into()), data: Some("c2Vjb25k".into()) }),
                            text: None,
                        },
                    ],
                }),
                finish_reason: Some("STOP".into()),
            }],
        };

        assert_eq!(
            extract_image(response).unwrap().to_string(),
            "data:image/jpeg;base64,Zmlyc3Q="
        );
    }

    #[test]
    fn test_empty_inline_data_is_skipped() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "" } },
                { "inlineData": { "data": "QUJD" } }
            ] } }]
        }))
        .unwrap();

        assert_eq!(extract_image(response).unwrap().to_string(), "data:image/png;base64,QUJD");
    }

    #[test]
    fn test_only_first_candidate_is_considered() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "finishReason": "IMAGE_SAFETY" },
                { "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "AAAA" } }] } }
            ]
        }))
        .unwrap();

        assert_eq!(extract_image(response), Err(GenerationError::Blocked("IMAGE_SAFETY".into())));
    }

    #[test]
    fn test_no_image_and_no_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }, {}] } }]
        }))
        .unwrap();

        assert_eq!(extract_image(response), Err(GenerationError::NoImageData));
    }
}
