//! Disabled Text Generator.
//!
//! Wired when no generative service is configured. Every call reports
//! `Unavailable`, which routes every acknowledgment through the
//! deterministic fallback table; the interview itself is unaffected.

use async_trait::async_trait;

use crate::ports::{GeneratedText, GenerationError, GenerationRequest, TextGenerator};

/// Generator that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

impl DisabledGenerator {
    /// Creates a disabled generator.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(
        &self,
        _request: GenerationRequest,
    ) -> Result<GeneratedText, GenerationError> {
        Err(GenerationError::unavailable("no generative service configured"))
    }

    fn generator_name(&self) -> &str {
        "disabled"
    }
}
