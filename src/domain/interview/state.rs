//! Interview state.
//!
//! One value per active conversation, owned exclusively by the caller
//! driving that conversation. The engine never holds state between turns:
//! a snapshot comes in with each answer and a new snapshot goes out with
//! each response. Distinct conversations share nothing.
//!
//! Invariants maintained by the engine (the only writer):
//! - `current_anchor` never decreases and only advances one step at a time.
//! - `follow_ups_for_current_anchor` resets to 0 exactly when the anchor
//!   changes, and otherwise grows by at most 1 per turn.
//! - `questions_asked` grows by exactly 1 per processed answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::InterviewId;

use super::anchor::Anchor;
use super::phase::{InterviewStatus, TurnPhase};

/// One logged answer with the signals detected in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Anchor the question belonged to.
    pub anchor: Anchor,
    /// Whether it answered the anchor question or a follow-up.
    pub phase: TurnPhase,
    /// Raw answer text.
    pub text: String,
    /// Signal names fired by this answer.
    pub detected_signals: Vec<String>,
    /// When the answer was processed.
    pub answered_at: DateTime<Utc>,
}

/// Progress counters reported back to the caller after every turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based index of the anchor currently in play.
    pub current_anchor: u8,
    /// Answers processed so far.
    pub questions_asked: u8,
    /// Hard ceiling on total questions.
    pub max_questions: u8,
}

/// Full per-conversation state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewState {
    interview_id: InterviewId,
    industry: String,
    display_name: String,
    current_anchor: Anchor,
    phase: TurnPhase,
    status: InterviewStatus,
    follow_ups_for_current_anchor: u8,
    questions_asked: u8,
    answers_log: Vec<AnswerRecord>,
    accumulated_signals: BTreeMap<String, u32>,
}

impl InterviewState {
    /// Creates the state of a freshly bootstrapped interview: anchor 1,
    /// anchor phase, no answers yet.
    pub fn new(industry: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            interview_id: InterviewId::new(),
            industry: industry.into(),
            display_name: display_name.into(),
            current_anchor: Anchor::first(),
            phase: TurnPhase::Anchor,
            status: InterviewStatus::Active,
            follow_ups_for_current_anchor: 0,
            questions_asked: 0,
            answers_log: Vec::new(),
            accumulated_signals: BTreeMap::new(),
        }
    }

    /// Reassembles a snapshot from caller-supplied parts (wire format).
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        interview_id: InterviewId,
        industry: String,
        display_name: String,
        current_anchor: Anchor,
        phase: TurnPhase,
        status: InterviewStatus,
        follow_ups_for_current_anchor: u8,
        questions_asked: u8,
        answers_log: Vec<AnswerRecord>,
        accumulated_signals: BTreeMap<String, u32>,
    ) -> Self {
        Self {
            interview_id,
            industry,
            display_name,
            current_anchor,
            phase,
            status,
            follow_ups_for_current_anchor,
            questions_asked,
            answers_log,
            accumulated_signals,
        }
    }

    pub fn interview_id(&self) -> InterviewId {
        self.interview_id
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn current_anchor(&self) -> Anchor {
        self.current_anchor
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn status(&self) -> InterviewStatus {
        self.status
    }

    pub fn follow_ups_for_current_anchor(&self) -> u8 {
        self.follow_ups_for_current_anchor
    }

    pub fn questions_asked(&self) -> u8 {
        self.questions_asked
    }

    pub fn answers_log(&self) -> &[AnswerRecord] {
        &self.answers_log
    }

    /// Signal counts across the whole conversation.
    pub fn accumulated_signals(&self) -> &BTreeMap<String, u32> {
        &self.accumulated_signals
    }

    /// Returns true once the interview is terminal.
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Progress counters for the caller, given the configured ceiling.
    pub fn progress(&self, max_questions: u8) -> Progress {
        Progress {
            current_anchor: self.current_anchor.index(),
            questions_asked: self.questions_asked,
            max_questions,
        }
    }

    /// The primary (anchor-phase) answer recorded for each anchor, in
    /// sequence order. These are the high-signal facts the interview exists
    /// to extract; follow-up answers add color but are not primary.
    pub fn anchor_answers(&self) -> Vec<(Anchor, &AnswerRecord)> {
        Anchor::ALL
            .iter()
            .filter_map(|anchor| {
                self.answers_log
                    .iter()
                    .find(|r| r.anchor == *anchor && r.phase.is_anchor())
                    .map(|r| (*anchor, r))
            })
            .collect()
    }

    // ── engine-side mutators ───────────────────────────────────────────
    // These are the only writers; they live behind the pure transition
    // function in `engine.rs` which clones the incoming snapshot first.

    pub(super) fn record_answer(
        &mut self,
        text: String,
        detected_signals: Vec<String>,
        answered_at: DateTime<Utc>,
    ) {
        for name in &detected_signals {
            *self.accumulated_signals.entry(name.clone()).or_insert(0) += 1;
        }
        self.answers_log.push(AnswerRecord {
            anchor: self.current_anchor,
            phase: self.phase,
            text,
            detected_signals,
            answered_at,
        });
        self.questions_asked = self.questions_asked.saturating_add(1);
    }

    pub(super) fn begin_follow_up(&mut self) {
        self.phase = TurnPhase::FollowUp;
        self.follow_ups_for_current_anchor = self.follow_ups_for_current_anchor.saturating_add(1);
    }

    pub(super) fn advance_to(&mut self, anchor: Anchor) {
        debug_assert!(anchor > self.current_anchor);
        self.current_anchor = anchor;
        self.phase = TurnPhase::Anchor;
        self.follow_ups_for_current_anchor = 0;
    }

    pub(super) fn mark_complete(&mut self) {
        self.status = InterviewStatus::Complete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> InterviewState {
        InterviewState::new("plumbing", "Sam")
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_at_anchor_one_with_zero_counters() {
            let s = state();
            assert_eq!(s.current_anchor(), Anchor::Problem);
            assert_eq!(s.phase(), TurnPhase::Anchor);
            assert_eq!(s.questions_asked(), 0);
            assert_eq!(s.follow_ups_for_current_anchor(), 0);
            assert!(!s.is_complete());
            assert!(s.answers_log().is_empty());
        }

        #[test]
        fn keeps_industry_and_display_name() {
            let s = state();
            assert_eq!(s.industry(), "plumbing");
            assert_eq!(s.display_name(), "Sam");
        }

        #[test]
        fn serde_round_trip_preserves_state() {
            let mut s = state();
            s.record_answer(
                "all on paper".to_string(),
                vec!["manual_work".to_string()],
                Utc::now(),
            );
            let json = serde_json::to_string(&s).unwrap();
            let back: InterviewState = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    mod recording {
        use super::*;

        #[test]
        fn record_answer_increments_questions_asked_by_one() {
            let mut s = state();
            s.record_answer("first".to_string(), vec![], Utc::now());
            assert_eq!(s.questions_asked(), 1);
            s.record_answer("second".to_string(), vec![], Utc::now());
            assert_eq!(s.questions_asked(), 2);
        }

        #[test]
        fn record_answer_logs_anchor_and_phase_of_the_question_answered() {
            let mut s = state();
            s.record_answer("answer".to_string(), vec!["vague".to_string()], Utc::now());
            let record = &s.answers_log()[0];
            assert_eq!(record.anchor, Anchor::Problem);
            assert_eq!(record.phase, TurnPhase::Anchor);
            assert_eq!(record.detected_signals, vec!["vague".to_string()]);
        }

        #[test]
        fn accumulated_signals_is_a_multiset() {
            let mut s = state();
            s.record_answer("a".to_string(), vec!["vague".to_string()], Utc::now());
            s.record_answer(
                "b".to_string(),
                vec!["vague".to_string(), "manual_work".to_string()],
                Utc::now(),
            );
            assert_eq!(s.accumulated_signals()["vague"], 2);
            assert_eq!(s.accumulated_signals()["manual_work"], 1);
        }
    }

    mod transitions {
        use super::*;

        #[test]
        fn begin_follow_up_sets_phase_and_counts() {
            let mut s = state();
            s.begin_follow_up();
            assert_eq!(s.phase(), TurnPhase::FollowUp);
            assert_eq!(s.follow_ups_for_current_anchor(), 1);
        }

        #[test]
        fn advance_resets_follow_up_budget_and_phase() {
            let mut s = state();
            s.begin_follow_up();
            s.begin_follow_up();
            s.advance_to(Anchor::Process);
            assert_eq!(s.current_anchor(), Anchor::Process);
            assert_eq!(s.phase(), TurnPhase::Anchor);
            assert_eq!(s.follow_ups_for_current_anchor(), 0);
        }

        #[test]
        fn mark_complete_is_terminal() {
            let mut s = state();
            s.mark_complete();
            assert!(s.is_complete());
        }
    }

    mod views {
        use super::*;

        #[test]
        fn progress_reports_anchor_index_and_counters() {
            let mut s = state();
            s.record_answer("x".to_string(), vec![], Utc::now());
            s.advance_to(Anchor::Process);
            let progress = s.progress(8);
            assert_eq!(progress.current_anchor, 2);
            assert_eq!(progress.questions_asked, 1);
            assert_eq!(progress.max_questions, 8);
        }

        #[test]
        fn anchor_answers_picks_the_anchor_phase_answer_per_topic() {
            let mut s = state();
            s.record_answer("problem answer".to_string(), vec![], Utc::now());
            s.begin_follow_up();
            s.record_answer("follow-up color".to_string(), vec![], Utc::now());
            s.advance_to(Anchor::Process);
            s.record_answer("process answer".to_string(), vec![], Utc::now());

            let answers = s.anchor_answers();
            assert_eq!(answers.len(), 2);
            assert_eq!(answers[0].0, Anchor::Problem);
            assert_eq!(answers[0].1.text, "problem answer");
            assert_eq!(answers[1].0, Anchor::Process);
            assert_eq!(answers[1].1.text, "process answer");
        }

        #[test]
        fn anchor_answers_skips_topics_not_yet_answered() {
            let s = state();
            assert!(s.anchor_answers().is_empty());
        }
    }
}
