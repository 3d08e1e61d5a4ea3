//! HTTP DTOs for interview endpoints
//!
//! These types decouple the HTTP API from the application layer. The state
//! snapshot travels with every request and response because the engine
//! keeps nothing between turns: the caller owns the conversation.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{BootstrapReply, TurnReply};
use crate::domain::interview::{InterviewState, Progress, QuestionKind};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to start an interview
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapRequest {
    pub industry: String,
    pub display_name: String,
}

/// Request to process one answer
#[derive(Debug, Clone, Deserialize)]
pub struct TurnRequest {
    /// Snapshot returned by the previous turn (or bootstrap)
    pub state: InterviewState,
    /// Raw answer text; empty is a legitimate answer
    pub answer_text: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for starting an interview
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapResponse {
    pub question: String,
    pub topic: String,
    pub question_type: QuestionKind,
    pub updated_progress: Progress,
    pub state: InterviewState,
}

impl From<(BootstrapReply, u8)> for BootstrapResponse {
    fn from((reply, max_questions): (BootstrapReply, u8)) -> Self {
        let updated_progress = reply.state.progress(max_questions);
        Self {
            question: reply.question,
            topic: reply.topic.to_string(),
            question_type: reply.question_kind,
            updated_progress,
            state: reply.state,
        }
    }
}

/// Response for one processed answer
#[derive(Debug, Clone, Serialize)]
pub struct TurnResponse {
    pub signals_detected: Vec<String>,
    pub acknowledgment: String,
    pub next_question: String,
    pub next_question_type: QuestionKind,
    pub next_topic: Option<String>,
    pub updated_progress: Progress,
    pub interview_complete: bool,
    pub state: InterviewState,
}

impl From<TurnReply> for TurnResponse {
    fn from(reply: TurnReply) -> Self {
        Self {
            signals_detected: reply.signals_detected,
            acknowledgment: reply.acknowledgment,
            next_question: reply.next_question,
            next_question_type: reply.next_question_kind,
            next_topic: reply.next_topic.map(|t| t.to_string()),
            updated_progress: reply.progress,
            interview_complete: reply.interview_complete,
            state: reply.state,
        }
    }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}
