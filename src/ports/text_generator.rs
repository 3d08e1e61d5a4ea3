//! Text Generator Port - the engine's only network-shaped dependency.
//!
//! Acknowledgment phrasing is produced by an external generative text
//! service consumed through this narrow contract: a prompt plus system
//! instructions in, a short piece of text out. The service is treated as
//! unreliable: callers must bound every request with a timeout and fall
//! back deterministically on any [`GenerationError`].
//!
//! # Example
//!
//! ```ignore
//! struct CannedGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for CannedGenerator {
//!     async fn generate(&self, _request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
//!         Ok(GeneratedText::new("Sounds rough.", "canned"))
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Port for short-form generative text calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates one short piece of text for the given request.
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError>;

    /// Human-readable name of the backing service, for logs.
    fn generator_name(&self) -> &str;
}

/// One generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// The user-turn prompt.
    pub prompt: String,
    /// Behavioral instructions for the model.
    pub system_instructions: Option<String>,
    /// Cap on generated length.
    pub max_tokens: u32,
    /// Response randomness; `None` uses the service default.
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Creates a request with the given prompt and sensible short-form caps.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instructions: None,
            max_tokens: 160,
            temperature: None,
        }
    }

    /// Sets the system instructions.
    pub fn with_system_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.system_instructions = Some(instructions.into());
        self
    }

    /// Sets the max token cap.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedText {
    /// The generated text, trimmed.
    pub text: String,
    /// Model that produced it.
    pub model: String,
}

impl GeneratedText {
    /// Creates a generated-text value, trimming surrounding whitespace.
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
            model: model.into(),
        }
    }

    /// Returns true when the service returned nothing usable.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Generation failures. Every variant degrades to the deterministic
/// acknowledgment fallback; none of them ever reaches the interview caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// The bounded timeout elapsed before a response arrived.
    #[error("generation timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The service is down or refused the request.
    #[error("generation service unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("generation authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("generation network error: {0}")]
    Network(String),

    /// The response could not be parsed.
    #[error("generation parse error: {0}")]
    Parse(String),

    /// The service answered with empty or whitespace-only text.
    #[error("generation returned an empty response")]
    EmptyResponse,
}

impl GenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_sets_all_fields() {
        let request = GenerationRequest::new("say something nice")
            .with_system_instructions("be brief")
            .with_max_tokens(80)
            .with_temperature(0.6);

        assert_eq!(request.prompt, "say something nice");
        assert_eq!(request.system_instructions, Some("be brief".to_string()));
        assert_eq!(request.max_tokens, 80);
        assert_eq!(request.temperature, Some(0.6));
    }

    #[test]
    fn generated_text_is_trimmed() {
        let text = GeneratedText::new("  a warm phrase \n", "model-x");
        assert_eq!(text.text, "a warm phrase");
        assert!(!text.is_empty());
    }

    #[test]
    fn whitespace_only_generation_is_empty() {
        assert!(GeneratedText::new("   \n", "model-x").is_empty());
    }

    #[test]
    fn errors_display_lowercase_messages() {
        assert_eq!(
            GenerationError::Timeout { timeout_secs: 3 }.to_string(),
            "generation timed out after 3s"
        );
        assert_eq!(
            GenerationError::unavailable("503").to_string(),
            "generation service unavailable: 503"
        );
        assert_eq!(
            GenerationError::EmptyResponse.to_string(),
            "generation returned an empty response"
        );
    }
}
