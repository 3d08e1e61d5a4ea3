//! Mock Text Generator for testing.
//!
//! Configurable mock implementation of the TextGenerator port, allowing
//! tests to run without calling the real generative service.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for degradation testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let generator = MockGenerator::new()
//!     .with_response("Sounds like the calendar runs you, not the other way around.")
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GeneratedText, GenerationError, GenerationRequest, TextGenerator};

/// A configured mock outcome.
#[derive(Debug, Clone)]
enum MockOutcome {
    Success(String),
    Failure(GenerationError),
}

/// Mock generator for tests.
///
/// Responses queue up and are consumed one per call; an exhausted queue
/// answers with `Unavailable` so a misconfigured test fails loudly instead
/// of hanging on a default.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockGenerator {
    /// Creates an empty mock generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Success(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(MockOutcome::Failure(error));
        self
    }

    /// Adds artificial latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Requests received so far.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<GeneratedText, GenerationError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            Some(MockOutcome::Success(text)) => Ok(GeneratedText::new(text, "mock-model")),
            Some(MockOutcome::Failure(error)) => Err(error),
            None => Err(GenerationError::unavailable("mock queue exhausted")),
        }
    }

    fn generator_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let generator = MockGenerator::new()
            .with_response("first")
            .with_response("second");

        let a = generator.generate(GenerationRequest::new("p1")).await.unwrap();
        let b = generator.generate(GenerationRequest::new("p2")).await.unwrap();
        assert_eq!(a.text, "first");
        assert_eq!(b.text, "second");
    }

    #[tokio::test]
    async fn returns_queued_errors() {
        let generator =
            MockGenerator::new().with_error(GenerationError::Timeout { timeout_secs: 3 });
        let err = generator
            .generate(GenerationRequest::new("p"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Timeout { .. }));
    }

    #[tokio::test]
    async fn exhausted_queue_fails_loudly() {
        let generator = MockGenerator::new();
        let err = generator
            .generate(GenerationRequest::new("p"))
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Unavailable { .. }));
    }

    #[tokio::test]
    async fn records_calls_for_verification() {
        let generator = MockGenerator::new().with_response("ok");
        let request = GenerationRequest::new("the prompt").with_max_tokens(99);
        generator.generate(request.clone()).await.unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.calls()[0], request);
    }

    #[tokio::test]
    async fn delay_is_observable() {
        let generator = MockGenerator::new()
            .with_response("slow")
            .with_delay(Duration::from_millis(30));

        let started = std::time::Instant::now();
        generator.generate(GenerationRequest::new("p")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
