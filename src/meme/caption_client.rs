use std::time::Duration;

use crate::caption::{fallback_caption, parse_caption};
use crate::config::CaptionConfig;
use crate::error::{MemeError, Result};
use crate::models::{
    CaptionOrigin, CaptionPair, CaptionRequest, CaptionResolution, ChatCompletionRequest,
    ChatCompletionResponse, ChatMessage, FallbackReason,
};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_CAPTION_MODEL: &str = "gpt-3.5-turbo";

const CAPTION_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_MAX_TOKENS: u32 = 80;
const DEFAULT_TEMPERATURE: f32 = 0.9;

const SYSTEM_INSTRUCTION: &str = "You are a witty meme caption generator. Produce two short \
     lines: a TOP caption and a BOTTOM caption. Keep them punchy, family-friendly, and \
     suitable for a meme. Return with TOP: ... and BOTTOM: ....";

/// Caption service adapter: a chat-completion call when a credential is
/// present, the local generator otherwise.
///
/// `generate` never fails; every remote failure is converted into a fallback
/// caption carrying the reason.
#[derive(Clone)]
pub struct CaptionClient {
    client: reqwest::Client,
    config: CaptionConfig,
    base_url: String,
}

impl CaptionClient {
    pub fn new(config: CaptionConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(CAPTION_TIMEOUT)
            .build()
            .map_err(|e| MemeError::ClientError(format!("failed to build HTTP client: {}", e)))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Points the client at a different OpenAI-compatible endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn generate(&self, request: &CaptionRequest) -> CaptionResolution {
        let Some(api_key) = self.config.api_key.clone() else {
            log::debug!("No caption credential supplied, using the local generator");
            return self.fallback(&request.prompt, FallbackReason::MissingCredential);
        };

        match self.remote_caption(&api_key, request).await {
            Ok(pair) => {
                log::info!("Remote caption accepted");
                CaptionResolution {
                    pair,
                    origin: CaptionOrigin::Remote,
                }
            }
            Err(reason) => {
                log::warn!("Caption service unavailable ({}), falling back", reason);
                self.fallback(&request.prompt, reason)
            }
        }
    }

    fn fallback(&self, prompt: &str, reason: FallbackReason) -> CaptionResolution {
        CaptionResolution {
            pair: fallback_caption(prompt),
            origin: CaptionOrigin::Fallback(reason),
        }
    }

    async fn remote_caption(
        &self,
        api_key: &str,
        request: &CaptionRequest,
    ) -> std::result::Result<CaptionPair, FallbackReason> {
        let model = request
            .model_id
            .clone()
            .or_else(|| self.config.model.clone())
            .unwrap_or_else(|| DEFAULT_CAPTION_MODEL.to_string());

        let payload = ChatCompletionRequest {
            model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Create a meme caption for: {}", request.prompt),
                },
            ],
            max_tokens: Some(request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
            temperature: Some(request.temperature.unwrap_or(DEFAULT_TEMPERATURE)),
        };

        log::info!("Requesting caption from {}", self.base_url);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| FallbackReason::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FallbackReason::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| FallbackReason::MalformedResponse(e.to_string()))?;

        let content = completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                FallbackReason::MalformedResponse("response contained no choices".to_string())
            })?;

        let pair = parse_caption(&content);
        if pair.is_empty() {
            return Err(FallbackReason::EmptyCaption);
        }

        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::caption::PUNCH_TEMPLATES;

    fn client_for(server_uri: &str) -> CaptionClient {
        CaptionClient::new(
            CaptionConfig::new()
                .with_api_key("sk-test")
                .with_base_url(server_uri),
        )
        .unwrap()
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "choices": [
                { "message": { "role": "assistant", "content": content } }
            ]
        })
    }

    #[tokio::test]
    async fn missing_credential_falls_back() {
        let client = CaptionClient::new(CaptionConfig::new()).unwrap();
        let resolution = client.generate(&CaptionRequest::new("deploy friday")).await;

        assert_eq!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::MissingCredential)
        );
        assert!(resolution.pair.top.starts_with("deploy friday — "));
        assert!(PUNCH_TEMPLATES
            .iter()
            .any(|(_, bottom)| *bottom == resolution.pair.bottom));
    }

    #[tokio::test]
    async fn remote_markers_resolve_as_remote() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("TOP: Ship it\nBOTTOM: Revert it")),
            )
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("deploy friday"))
            .await;

        assert!(resolution.is_remote());
        assert_eq!(resolution.pair, CaptionPair::new("Ship it", "Revert it"));
    }

    #[tokio::test]
    async fn remote_plain_lines_resolve_as_remote() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("first\nsecond")),
            )
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("anything"))
            .await;

        assert!(resolution.is_remote());
        assert_eq!(resolution.pair, CaptionPair::new("first", "second"));
    }

    #[tokio::test]
    async fn auth_error_converts_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("prompt"))
            .await;

        match resolution.origin {
            CaptionOrigin::Fallback(FallbackReason::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid api key"));
            }
            other => panic!("expected ApiError fallback, got {:?}", other),
        }
        assert!(!resolution.pair.bottom.is_empty());
    }

    #[tokio::test]
    async fn rate_limit_converts_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("prompt"))
            .await;

        assert!(matches!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::ApiError { status: 429, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_body_converts_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("prompt"))
            .await;

        assert!(matches!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn missing_choices_convert_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("prompt"))
            .await;

        assert!(matches!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn empty_caption_text_converts_to_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("   ")))
            .mount(&server)
            .await;

        let resolution = client_for(&server.uri())
            .generate(&CaptionRequest::new("prompt"))
            .await;

        assert_eq!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::EmptyCaption)
        );
    }

    #[tokio::test]
    async fn connection_failure_converts_to_fallback() {
        // Nothing listens on port 1.
        let client = client_for("http://127.0.0.1:1");
        let resolution = client.generate(&CaptionRequest::new("prompt")).await;

        assert!(matches!(
            resolution.origin,
            CaptionOrigin::Fallback(FallbackReason::RequestFailed(_))
        ));
        assert!(!resolution.pair.is_empty());
    }
}
