//! SubmitAnswerHandler - process one answer and assemble the full turn reply.
//!
//! Orchestrates a single turn: the pure engine decides follow-up vs advance
//! vs terminate, then the acknowledgment is produced. Anchor transitions go
//! through the generative service under a hard timeout; follow-up turns and
//! every generative failure use the deterministic fallback table. The
//! handler itself is infallible: no turn ever surfaces an error to the
//! interview caller.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::interview::{
    build_prompt, fallback_acknowledgment, AckContext, IndustryHints, InterviewEngine,
    InterviewState, Progress, QuestionKind, SYSTEM_INSTRUCTIONS,
};
use crate::ports::{GenerationError, GenerationRequest, TextGenerator};

/// Command to process one answer.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    /// State snapshot from the previous turn (or bootstrap).
    pub state: InterviewState,
    /// Raw answer text; empty is a legitimate answer.
    pub answer_text: String,
}

/// Everything the caller needs from one turn.
#[derive(Debug, Clone)]
pub struct TurnReply {
    /// Updated snapshot; the caller carries it into the next turn.
    pub state: InterviewState,
    /// Signal names fired by this answer.
    pub signals_detected: Vec<String>,
    /// Short validating phrase shown before the next question.
    pub acknowledgment: String,
    /// False when the deterministic fallback produced the acknowledgment.
    pub used_external_service: bool,
    /// The next prompt to show.
    pub next_question: String,
    /// Classification of that prompt.
    pub next_question_kind: QuestionKind,
    /// Topic label, absent once the interview is complete.
    pub next_topic: Option<&'static str>,
    /// Progress counters.
    pub progress: Progress,
    /// True once no further questions will be issued.
    pub interview_complete: bool,
}

/// Handler for interview turns.
pub struct SubmitAnswerHandler<G: ?Sized + TextGenerator> {
    engine: Arc<InterviewEngine>,
    generator: Arc<G>,
    hints: IndustryHints,
    ack_timeout: Duration,
}

impl<G: ?Sized + TextGenerator> SubmitAnswerHandler<G> {
    pub fn new(engine: Arc<InterviewEngine>, generator: Arc<G>) -> Self {
        Self {
            engine,
            generator,
            hints: IndustryHints::builtin(),
            ack_timeout: Duration::from_secs(3),
        }
    }

    /// Overrides the industry hint set.
    pub fn with_hints(mut self, hints: IndustryHints) -> Self {
        self.hints = hints;
        self
    }

    /// Overrides the acknowledgment timeout.
    pub fn with_ack_timeout(mut self, timeout: Duration) -> Self {
        self.ack_timeout = timeout;
        self
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> TurnReply {
        let outcome = self.engine.process_answer(&cmd.state, &cmd.answer_text);

        let ctx = AckContext {
            answer_text: &cmd.answer_text,
            detected_signals: &outcome.detection.signals,
            industry: outcome.state.industry(),
            display_name: outcome.state.display_name(),
            next_question: outcome.decision.next_question(),
        };
        let (acknowledgment, used_external_service) = if outcome.decision.is_anchor_transition() {
            self.acknowledge(&ctx).await
        } else {
            // Probing turns stay responsive: no external call at all.
            (
                fallback_acknowledgment(ctx.detected_signals).to_string(),
                false,
            )
        };

        info!(
            interview_id = %outcome.state.interview_id(),
            anchor = outcome.state.current_anchor().index(),
            questions_asked = outcome.state.questions_asked(),
            decision = ?outcome.decision.question_kind(),
            used_external_service,
            "turn processed"
        );

        let progress = outcome
            .state
            .progress(self.engine.config().max_total_questions);
        TurnReply {
            signals_detected: outcome.detection.signals,
            acknowledgment,
            used_external_service,
            next_question: outcome.decision.next_question().to_string(),
            next_question_kind: outcome.decision.question_kind(),
            next_topic: outcome.decision.next_topic(),
            progress,
            interview_complete: outcome.state.is_complete(),
            state: outcome.state,
        }
    }

    /// Tries the generative service under the configured timeout; any
    /// failure selects from the fallback table instead.
    async fn acknowledge(&self, ctx: &AckContext<'_>) -> (String, bool) {
        let request = GenerationRequest::new(build_prompt(ctx, &self.hints))
            .with_system_instructions(SYSTEM_INSTRUCTIONS)
            .with_temperature(0.7);

        let result = match tokio::time::timeout(self.ack_timeout, self.generator.generate(request))
            .await
        {
            Ok(inner) => inner,
            Err(_) => Err(GenerationError::Timeout {
                timeout_secs: self.ack_timeout.as_secs() as u32,
            }),
        };

        match result {
            Ok(generated) if !generated.is_empty() => (generated.text, true),
            Ok(_) => self.fall_back(ctx, GenerationError::EmptyResponse),
            Err(err) => self.fall_back(ctx, err),
        }
    }

    fn fall_back(&self, ctx: &AckContext<'_>, err: GenerationError) -> (String, bool) {
        warn!(
            generator = self.generator.generator_name(),
            error = %err,
            "acknowledgment generation failed, using fallback"
        );
        (fallback_acknowledgment(ctx.detected_signals).to_string(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{DisabledGenerator, MockGenerator};
    use crate::domain::interview::EngineConfig;
    use crate::domain::interview::SignalBank;

    fn engine() -> Arc<InterviewEngine> {
        Arc::new(InterviewEngine::with_defaults())
    }

    fn start_state() -> InterviewState {
        InterviewEngine::with_defaults()
            .bootstrap("plumbing", "Sam")
            .state
    }

    fn command(answer: &str) -> SubmitAnswerCommand {
        SubmitAnswerCommand {
            state: start_state(),
            answer_text: answer.to_string(),
        }
    }

    const INFORMATIVE: &str = "scheduling is a nightmare, we do it all by hand";

    #[tokio::test]
    async fn anchor_transition_uses_the_generative_service() {
        let generator = Arc::new(
            MockGenerator::new().with_response("Sounds like the calendar runs you ragged."),
        );
        let handler = SubmitAnswerHandler::new(engine(), generator.clone());

        let reply = handler.handle(command(INFORMATIVE)).await;
        assert_eq!(reply.next_question_kind, QuestionKind::Anchor);
        assert!(reply.used_external_service);
        assert_eq!(reply.acknowledgment, "Sounds like the calendar runs you ragged.");
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn follow_up_turns_never_call_the_service() {
        let generator = Arc::new(MockGenerator::new());
        let handler = SubmitAnswerHandler::new(engine(), generator.clone());

        let reply = handler.handle(command("It's fine")).await;
        assert_eq!(reply.next_question_kind, QuestionKind::FollowUp);
        assert!(!reply.used_external_service);
        assert!(!reply.acknowledgment.is_empty());
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn service_error_degrades_to_the_fallback() {
        let generator = Arc::new(
            MockGenerator::new().with_error(GenerationError::unavailable("503 from upstream")),
        );
        let handler = SubmitAnswerHandler::new(engine(), generator);

        let reply = handler.handle(command(INFORMATIVE)).await;
        assert!(!reply.used_external_service);
        // Pain intensity fired, so its fallback line is selected.
        assert!(reply.acknowledgment.contains("draining"));
    }

    #[tokio::test]
    async fn slow_service_is_cut_off_by_the_timeout() {
        let generator = Arc::new(
            MockGenerator::new()
                .with_response("too late to matter")
                .with_delay(Duration::from_millis(200)),
        );
        let handler = SubmitAnswerHandler::new(engine(), generator)
            .with_ack_timeout(Duration::from_millis(20));

        let reply = handler.handle(command(INFORMATIVE)).await;
        assert!(!reply.used_external_service);
        assert!(!reply.acknowledgment.is_empty());
    }

    #[tokio::test]
    async fn empty_generation_counts_as_a_failure() {
        let generator = Arc::new(MockGenerator::new().with_response("   \n"));
        let handler = SubmitAnswerHandler::new(engine(), generator);

        let reply = handler.handle(command(INFORMATIVE)).await;
        assert!(!reply.used_external_service);
        assert!(!reply.acknowledgment.is_empty());
    }

    #[tokio::test]
    async fn disabled_generator_still_produces_an_acknowledgment() {
        let handler = SubmitAnswerHandler::new(engine(), Arc::new(DisabledGenerator::new()));
        let reply = handler.handle(command(INFORMATIVE)).await;
        assert!(!reply.used_external_service);
        assert!(!reply.acknowledgment.is_empty());
    }

    #[tokio::test]
    async fn prompt_carries_the_interview_context() {
        let generator = Arc::new(MockGenerator::new().with_response("ack"));
        let handler = SubmitAnswerHandler::new(engine(), generator.clone());

        handler.handle(command(INFORMATIVE)).await;
        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.contains("plumbing"));
        assert!(calls[0].prompt.contains(INFORMATIVE));
        assert!(calls[0]
            .system_instructions
            .as_deref()
            .unwrap()
            .contains("1-2 sentences"));
    }

    #[tokio::test]
    async fn reply_reports_progress_and_completion() {
        let config = EngineConfig {
            max_total_questions: 1,
            max_follow_ups_per_anchor: 2,
        };
        let engine = Arc::new(InterviewEngine::new(SignalBank::builtin(), config));
        let state = engine.bootstrap("plumbing", "Sam").state;
        let handler =
            SubmitAnswerHandler::new(engine, Arc::new(MockGenerator::new().with_response("ack")));

        let reply = handler
            .handle(SubmitAnswerCommand {
                state,
                answer_text: "whatever".to_string(),
            })
            .await;

        assert!(reply.interview_complete);
        assert_eq!(reply.next_question_kind, QuestionKind::Summary);
        assert_eq!(reply.next_topic, None);
        assert_eq!(reply.progress.questions_asked, 1);
        assert_eq!(reply.progress.max_questions, 1);
    }
}
