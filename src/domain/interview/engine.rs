//! The interview engine.
//!
//! A pure transition function over [`InterviewState`]: given the current
//! snapshot and a new answer, it runs signal detection, decides between
//! probing deeper, advancing to the next anchor, or ending the interview,
//! and returns a new snapshot plus a sum-typed decision. It performs no I/O
//! and never fails; acknowledgment text is generated by the caller from the
//! returned decision.
//!
//! Decision order per turn:
//! 1. Detect signals, log the answer, bump the question counter.
//! 2. Hard stop: question budget spent, or the answer just closed the
//!    final anchor.
//! 3. Follow-up: the answer warrants probing, the per-anchor budget has
//!    room, and the detector produced a probe to ask.
//! 4. Otherwise advance; walking past the last anchor completes the
//!    interview (second line of defense behind step 2).

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::anchor::{Anchor, CLOSING_PROMPT};
use super::detector::{detect, DetectionResult};
use super::phase::QuestionKind;
use super::signal_bank::SignalBank;
use super::state::InterviewState;

/// Tunable bounds on conversation length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hard ceiling on processed answers across the whole interview.
    pub max_total_questions: u8,
    /// Probing budget within a single anchor.
    pub max_follow_ups_per_anchor: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_total_questions: 8,
            max_follow_ups_per_anchor: 2,
        }
    }
}

/// What the engine decided to do with the conversation after an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnDecision {
    /// Probe deeper on the current anchor.
    FollowUp {
        /// Anchor being probed.
        anchor: Anchor,
        /// The probing question to ask next.
        question: String,
    },
    /// Move on to the next anchor's canonical question.
    Advance {
        /// The anchor being moved into.
        anchor: Anchor,
        /// Its canonical question.
        question: String,
    },
    /// The interview is over; only the closing prompt remains.
    Complete {
        /// Closing prompt shown to the user.
        closing_prompt: String,
    },
}

impl TurnDecision {
    /// The next prompt to show the user.
    pub fn next_question(&self) -> &str {
        match self {
            TurnDecision::FollowUp { question, .. } => question,
            TurnDecision::Advance { question, .. } => question,
            TurnDecision::Complete { closing_prompt } => closing_prompt,
        }
    }

    /// Classification of the next prompt.
    pub fn question_kind(&self) -> QuestionKind {
        match self {
            TurnDecision::FollowUp { .. } => QuestionKind::FollowUp,
            TurnDecision::Advance { .. } => QuestionKind::Anchor,
            TurnDecision::Complete { .. } => QuestionKind::Summary,
        }
    }

    /// Topic label of the next prompt, if it still belongs to an anchor.
    pub fn next_topic(&self) -> Option<&'static str> {
        match self {
            TurnDecision::FollowUp { anchor, .. } => Some(anchor.topic()),
            TurnDecision::Advance { anchor, .. } => Some(anchor.topic()),
            TurnDecision::Complete { .. } => None,
        }
    }

    /// True when this decision leaves (or ends) an anchor, which is when the
    /// generative acknowledgment path applies; follow-up decisions take the
    /// deterministic fallback path to keep probing responsive.
    pub fn is_anchor_transition(&self) -> bool {
        !matches!(self, TurnDecision::FollowUp { .. })
    }

    /// True once the interview is terminal.
    pub fn is_complete(&self) -> bool {
        matches!(self, TurnDecision::Complete { .. })
    }
}

/// Result of processing one answer.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// New state snapshot; the caller carries it into the next turn.
    pub state: InterviewState,
    /// What the detector saw in the answer.
    pub detection: DetectionResult,
    /// What the engine decided to do.
    pub decision: TurnDecision,
}

/// First question produced at bootstrap, before any answer exists.
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    /// Fresh state snapshot.
    pub state: InterviewState,
    /// The anchor-1 question.
    pub question: String,
    /// Its topic label.
    pub topic: &'static str,
}

/// The interview engine: an immutable signal bank plus length bounds.
///
/// One engine serves any number of concurrent conversations; all
/// per-conversation data lives in the state snapshots passed through it.
#[derive(Debug, Clone)]
pub struct InterviewEngine {
    bank: SignalBank,
    config: EngineConfig,
}

impl InterviewEngine {
    /// Creates an engine over the given bank and bounds.
    pub fn new(bank: SignalBank, config: EngineConfig) -> Self {
        Self { bank, config }
    }

    /// Engine with the compiled-in bank and default bounds.
    pub fn with_defaults() -> Self {
        Self::new(SignalBank::builtin(), EngineConfig::default())
    }

    /// The configured bounds.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The signal bank in use.
    pub fn bank(&self) -> &SignalBank {
        &self.bank
    }

    /// Starts an interview: fresh state plus the anchor-1 question.
    pub fn bootstrap(
        &self,
        industry: impl Into<String>,
        display_name: impl Into<String>,
    ) -> BootstrapOutcome {
        let state = InterviewState::new(industry, display_name);
        let anchor = state.current_anchor();
        BootstrapOutcome {
            state,
            question: anchor.question().to_string(),
            topic: anchor.topic(),
        }
    }

    /// Processes one answer and returns the new state and decision.
    ///
    /// Total over its inputs: any text (including empty) yields a decision,
    /// and a snapshot that is already terminal is answered idempotently with
    /// another completion rather than an error.
    pub fn process_answer(&self, state: &InterviewState, answer_text: &str) -> TurnOutcome {
        let detection = detect(answer_text, &self.bank);

        if state.is_complete() {
            return TurnOutcome {
                state: state.clone(),
                detection,
                decision: TurnDecision::Complete {
                    closing_prompt: CLOSING_PROMPT.to_string(),
                },
            };
        }

        let mut next = state.clone();
        let answered_anchor = next.current_anchor();
        let answered_anchor_phase = next.phase().is_anchor();
        next.record_answer(
            answer_text.to_string(),
            detection.signals.clone(),
            Utc::now(),
        );

        // Hard stop comes before any signal-based branching.
        let budget_spent = next.questions_asked() >= self.config.max_total_questions;
        let final_anchor_answered = answered_anchor_phase && answered_anchor == Anchor::last();
        if budget_spent || final_anchor_answered {
            next.mark_complete();
            return TurnOutcome {
                state: next,
                detection,
                decision: TurnDecision::Complete {
                    closing_prompt: CLOSING_PROMPT.to_string(),
                },
            };
        }

        let budget_left =
            next.follow_ups_for_current_anchor() < self.config.max_follow_ups_per_anchor;
        if detection.should_probe_deeper && budget_left {
            if let Some(question) = detection.follow_up_suggestions.first() {
                next.begin_follow_up();
                return TurnOutcome {
                    state: next,
                    decision: TurnDecision::FollowUp {
                        anchor: answered_anchor,
                        question: question.clone(),
                    },
                    detection,
                };
            }
        }

        match answered_anchor.next() {
            Some(anchor) => {
                next.advance_to(anchor);
                TurnOutcome {
                    state: next,
                    detection,
                    decision: TurnDecision::Advance {
                        anchor,
                        question: anchor.question().to_string(),
                    },
                }
            }
            None => {
                // Unreachable when the hard stop above is ordered correctly;
                // kept so a malformed snapshot can never push past anchor 3.
                next.mark_complete();
                TurnOutcome {
                    state: next,
                    detection,
                    decision: TurnDecision::Complete {
                        closing_prompt: CLOSING_PROMPT.to_string(),
                    },
                }
            }
        }
    }
}
