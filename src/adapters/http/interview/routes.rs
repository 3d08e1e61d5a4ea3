//! Route definitions for interview endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{bootstrap_interview, health, submit_turn, InterviewAppState};

/// Create the interview router with all endpoints
///
/// # Endpoints
///
/// - `POST /interviews` - Start an interview, returns the first question
/// - `POST /interviews/turns` - Process one answer, returns the next prompt
/// - `GET /health` - Liveness probe
pub fn routes() -> Router<InterviewAppState> {
    Router::new()
        .route("/interviews", post(bootstrap_interview))
        .route("/interviews/turns", post(submit_turn))
        .route("/health", get(health))
}
