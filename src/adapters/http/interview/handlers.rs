//! HTTP handlers for interview endpoints
//!
//! These handlers connect axum routes to application layer command handlers.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    BootstrapInterviewCommand, BootstrapInterviewHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::interview::{IndustryHints, InterviewEngine};
use crate::ports::TextGenerator;

use super::dto::{BootstrapRequest, BootstrapResponse, ErrorResponse, TurnRequest, TurnResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct InterviewAppState {
    pub engine: Arc<InterviewEngine>,
    pub generator: Arc<dyn TextGenerator>,
    pub hints: IndustryHints,
    pub ack_timeout: Duration,
}

impl InterviewAppState {
    pub fn new(
        engine: Arc<InterviewEngine>,
        generator: Arc<dyn TextGenerator>,
        hints: IndustryHints,
        ack_timeout: Duration,
    ) -> Self {
        Self {
            engine,
            generator,
            hints,
            ack_timeout,
        }
    }

    pub fn bootstrap_handler(&self) -> BootstrapInterviewHandler {
        BootstrapInterviewHandler::new(self.engine.clone())
    }

    pub fn submit_answer_handler(&self) -> SubmitAnswerHandler<dyn TextGenerator> {
        SubmitAnswerHandler::new(self.engine.clone(), self.generator.clone())
            .with_hints(self.hints.clone())
            .with_ack_timeout(self.ack_timeout)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Start a new interview
///
/// POST /interviews
pub async fn bootstrap_interview(
    State(app_state): State<InterviewAppState>,
    Json(req): Json<BootstrapRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let cmd = BootstrapInterviewCommand {
        industry: req.industry,
        display_name: req.display_name,
    };

    let reply = app_state.bootstrap_handler().handle(cmd).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
    })?;

    let max_questions = app_state.engine.config().max_total_questions;
    let response = BootstrapResponse::from((reply, max_questions));
    Ok((StatusCode::CREATED, Json(response)))
}

/// Process one answer
///
/// POST /interviews/turns
///
/// Infallible once the request parses: every degradation inside the engine
/// and the acknowledgment path resolves to a normal turn response.
pub async fn submit_turn(
    State(app_state): State<InterviewAppState>,
    Json(req): Json<TurnRequest>,
) -> impl IntoResponse {
    let cmd = SubmitAnswerCommand {
        state: req.state,
        answer_text: req.answer_text,
    };

    let reply = app_state.submit_answer_handler().handle(cmd).await;
    (StatusCode::OK, Json(TurnResponse::from(reply)))
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
