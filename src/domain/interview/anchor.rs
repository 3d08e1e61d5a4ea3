//! The fixed anchor sequence.
//!
//! Every interview walks the same three top-level topics in strict order:
//! Problem, Process, Priority. Each anchor carries one canonical question.
//! Follow-up probing happens *within* an anchor; the sequence itself never
//! branches or backtracks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One of the three top-level interview topics, asked in strict order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// What the owner's costliest problem is.
    Problem,
    /// How the affected process works today.
    Process,
    /// How urgent the fix is and what it would be worth.
    Priority,
}

impl Anchor {
    /// All anchors in interview order.
    pub const ALL: [Anchor; 3] = [Anchor::Problem, Anchor::Process, Anchor::Priority];

    /// The first anchor of every interview.
    pub fn first() -> Self {
        Anchor::Problem
    }

    /// The last anchor; an anchor-phase answer here ends the interview.
    pub fn last() -> Self {
        Anchor::Priority
    }

    /// 1-based position in the sequence.
    pub fn index(&self) -> u8 {
        match self {
            Anchor::Problem => 1,
            Anchor::Process => 2,
            Anchor::Priority => 3,
        }
    }

    /// Builds an anchor from its 1-based index.
    pub fn from_index(index: u8) -> Result<Self, ValidationError> {
        match index {
            1 => Ok(Anchor::Problem),
            2 => Ok(Anchor::Process),
            3 => Ok(Anchor::Priority),
            other => Err(ValidationError::out_of_range(
                "current_anchor",
                1,
                3,
                other as i32,
            )),
        }
    }

    /// The next anchor in the sequence, or `None` past the last one.
    pub fn next(&self) -> Option<Self> {
        match self {
            Anchor::Problem => Some(Anchor::Process),
            Anchor::Process => Some(Anchor::Priority),
            Anchor::Priority => None,
        }
    }

    /// Short topic label, suitable for progress display.
    pub fn topic(&self) -> &'static str {
        match self {
            Anchor::Problem => "Problem",
            Anchor::Process => "Process",
            Anchor::Priority => "Priority",
        }
    }

    /// The canonical question asked when this anchor is reached.
    pub fn question(&self) -> &'static str {
        match self {
            Anchor::Problem => {
                "What's the single most frustrating or time-consuming problem \
                 in your business right now?"
            }
            Anchor::Process => {
                "Walk me through how that process works today, from start to finish."
            }
            Anchor::Priority => {
                "If you could fix one thing first, what would it be, and what \
                 would fixing it be worth to you?"
            }
        }
    }
}

/// Closing prompt issued once the interview is complete. It invites a final
/// free-form addition but is never followed by another engine question.
pub const CLOSING_PROMPT: &str =
    "That's everything I needed. Is there anything else you'd like to add?";
