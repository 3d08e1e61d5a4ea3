//! BootstrapInterviewHandler - start an interview and issue the first question.
//!
//! No answer exists yet, so there is nothing to detect or acknowledge: the
//! handler validates the caller's fields, creates a fresh state snapshot,
//! and returns the anchor-1 question.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{require_non_empty, ValidationError};
use crate::domain::interview::{InterviewEngine, InterviewState, QuestionKind};

/// Command to start a new interview.
#[derive(Debug, Clone)]
pub struct BootstrapInterviewCommand {
    /// The owner's industry, used for acknowledgment flavor.
    pub industry: String,
    /// How to address the owner.
    pub display_name: String,
}

/// Result of bootstrapping an interview.
#[derive(Debug, Clone)]
pub struct BootstrapReply {
    /// Fresh state snapshot; the caller carries it into the first turn.
    pub state: InterviewState,
    /// The anchor-1 question.
    pub question: String,
    /// Its topic label.
    pub topic: &'static str,
    /// Always [`QuestionKind::Anchor`] at bootstrap.
    pub question_kind: QuestionKind,
}

/// Handler for starting interviews.
pub struct BootstrapInterviewHandler {
    engine: Arc<InterviewEngine>,
}

impl BootstrapInterviewHandler {
    pub fn new(engine: Arc<InterviewEngine>) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: BootstrapInterviewCommand) -> Result<BootstrapReply, ValidationError> {
        require_non_empty("industry", &cmd.industry)?;
        require_non_empty("display_name", &cmd.display_name)?;

        let outcome = self.engine.bootstrap(cmd.industry, cmd.display_name);
        info!(
            interview_id = %outcome.state.interview_id(),
            topic = outcome.topic,
            "interview bootstrapped"
        );

        Ok(BootstrapReply {
            state: outcome.state,
            question: outcome.question,
            topic: outcome.topic,
            question_kind: QuestionKind::Anchor,
        })
    }
}
