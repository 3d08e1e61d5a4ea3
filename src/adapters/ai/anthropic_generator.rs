//! Anthropic Generator - TextGenerator implementation over the Anthropic
//! Messages API.
//!
//! Acknowledgments are short single-shot completions, so this adapter is
//! deliberately narrow: one non-streaming request per call, one attempt, a
//! tight client-level timeout. Retrying would blow the acknowledgment
//! budget; the caller's deterministic fallback covers every failure.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new(api_key)
//!     .with_model("claude-3-5-haiku-20241022")
//!     .with_timeout(Duration::from_secs(3));
//!
//! let generator = AnthropicGenerator::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GeneratedText, GenerationError, GenerationRequest, TextGenerator};

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Configuration for the Anthropic generator.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Request timeout; acknowledgments must stay snappy.
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "claude-3-5-haiku-20241022".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            timeout: Duration::from_secs(3),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Anthropic Messages API generator.
pub struct AnthropicGenerator {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Converts a port request to Anthropic's wire format.
    fn to_anthropic_request(&self, request: &GenerationRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: self.config.model.clone(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
            system: request.system_instructions.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends the request and maps transport failures.
    async fn send_request(&self, request: &GenerationRequest) -> Result<Response, GenerationError> {
        let anthropic_request = self.to_anthropic_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&anthropic_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to errors.
    async fn handle_response_status(
        &self,
        response: Response,
    ) -> Result<Response, GenerationError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(GenerationError::AuthenticationFailed),
            429 => Err(GenerationError::unavailable(format!(
                "rate limited: {}",
                error_body
            ))),
            500..=599 => Err(GenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses the response body into generated text.
    async fn parse_response(&self, response: Response) -> Result<GeneratedText, GenerationError> {
        let response = self.handle_response_status(response).await?;

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse response: {}", e)))?;

        let content = anthropic_response
            .content
            .into_iter()
            .filter_map(|block| {
                if block.block_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        let text = GeneratedText::new(content, anthropic_response.model);
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for AnthropicGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }

    fn generator_name(&self) -> &str {
        "anthropic"
    }
}

// ── wire types ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<AnthropicContentBlock>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_keep_the_timeout_tight() {
        let config = AnthropicConfig::new("sk-ant-test");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.model.contains("haiku"));
        assert_eq!(config.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn config_builder_overrides() {
        let config = AnthropicConfig::new("sk-ant-test")
            .with_model("claude-sonnet-4-20250514")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(1));
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn request_conversion_carries_prompt_and_system() {
        let generator = AnthropicGenerator::new(AnthropicConfig::new("sk-ant-test"));
        let request = GenerationRequest::new("the prompt")
            .with_system_instructions("the instructions")
            .with_max_tokens(120)
            .with_temperature(0.8);

        let wire = generator.to_anthropic_request(&request);
        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, "user");
        assert_eq!(wire.messages[0].content, "the prompt");
        assert_eq!(wire.system, Some("the instructions".to_string()));
        assert_eq!(wire.max_tokens, 120);
        assert_eq!(wire.temperature, Some(0.8));
    }

    #[test]
    fn wire_request_omits_absent_optionals() {
        let generator = AnthropicGenerator::new(AnthropicConfig::new("sk-ant-test"));
        let wire = generator.to_anthropic_request(&GenerationRequest::new("hi"));
        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("\"system\""));
        assert!(!json.contains("\"temperature\""));
    }

    #[tokio::test]
    async fn connection_failure_maps_to_a_generation_error() {
        // Port 9 is discard; nothing listens there in the test environment.
        let config = AnthropicConfig::new("sk-ant-test")
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_millis(300));
        let generator = AnthropicGenerator::new(config);

        let err = generator
            .generate(GenerationRequest::new("hello"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Network(_) | GenerationError::Timeout { .. }
        ));
    }
}
