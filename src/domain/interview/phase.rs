//! Turn phases and interview lifecycle status.
//!
//! `TurnPhase` records what kind of question an answer was responding to;
//! `InterviewStatus` tracks whether the conversation is still issuing
//! questions; `QuestionKind` classifies the *next* prompt a turn returns.

use serde::{Deserialize, Serialize};

/// The kind of question the interview is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// A canonical top-level anchor question.
    #[default]
    Anchor,
    /// A probing follow-up within the current anchor.
    FollowUp,
}

impl TurnPhase {
    /// Returns true for the anchor phase.
    pub fn is_anchor(&self) -> bool {
        matches!(self, TurnPhase::Anchor)
    }
}

/// Whether the interview is still issuing questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    /// More questions may follow.
    #[default]
    Active,
    /// Terminal. No further questions are issued.
    Complete,
}

impl InterviewStatus {
    /// Returns true once the interview is terminal.
    pub fn is_complete(&self) -> bool {
        matches!(self, InterviewStatus::Complete)
    }
}

/// Classification of the next prompt returned by a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// The canonical question of a (new) anchor.
    Anchor,
    /// A probing follow-up on the current anchor.
    FollowUp,
    /// The closing prompt of a completed interview.
    Summary,
}

impl QuestionKind {
    /// Wire label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::Anchor => "anchor",
            QuestionKind::FollowUp => "follow_up",
            QuestionKind::Summary => "summary",
        }
    }
}
