//! The signal bank.
//!
//! A fixed catalog of conversational cue categories. Each signal is either
//! pattern-based (fires when any of its lowercase substrings appears in the
//! answer) or length-based (fires when the answer is shorter than a word
//! threshold), and carries an ordered list of candidate follow-up questions.
//!
//! The bank is immutable data loaded once at startup: either the compiled-in
//! catalog below or a YAML override. It is injected into the engine at
//! construction so tests can substitute fixed banks.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Well-known signal names used by the acknowledgment fallback table.
pub mod names {
    /// Strong negative emotion about the problem.
    pub const PAIN_INTENSITY: &str = "pain_intensity";
    /// The process is done by hand.
    pub const MANUAL_WORK: &str = "manual_work";
    /// The problem is visible to customers.
    pub const CUSTOMER_IMPACT: &str = "customer_impact";
    /// The answer is too short to carry information.
    pub const VAGUE: &str = "vague";
}

/// How a signal decides whether it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalRule {
    /// Fires when any pattern is a substring of the lowercased answer.
    /// An empty pattern list makes the signal an inert placeholder.
    Patterns {
        /// Lowercase substrings to scan for.
        patterns: Vec<String>,
    },
    /// Fires when the answer has strictly fewer whitespace-delimited words
    /// than the threshold.
    MinWords {
        /// Word-count threshold.
        min_words: usize,
    },
}

/// One named signal category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalDefinition {
    /// Unique key for this signal.
    pub name: String,
    /// Firing rule (exactly one policy per signal).
    #[serde(flatten)]
    pub rule: SignalRule,
    /// Candidate follow-up questions, best first. A signal with no
    /// follow-ups can still fire but never contributes a suggestion.
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

impl SignalDefinition {
    /// Creates a pattern-based signal.
    pub fn pattern(
        name: impl Into<String>,
        patterns: &[&str],
        follow_ups: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            rule: SignalRule::Patterns {
                patterns: patterns.iter().map(|p| p.to_lowercase()).collect(),
            },
            follow_ups: follow_ups.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Creates a length-based signal.
    pub fn min_words(name: impl Into<String>, min_words: usize, follow_ups: &[&str]) -> Self {
        Self {
            name: name.into(),
            rule: SignalRule::MinWords { min_words },
            follow_ups: follow_ups.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Returns true for a length-based signal.
    pub fn is_length_based(&self) -> bool {
        matches!(self.rule, SignalRule::MinWords { .. })
    }
}

/// Errors loading a signal bank from external data.
#[derive(Debug, Error)]
pub enum BankLoadError {
    #[error("failed to read signal bank file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse signal bank: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// An ordered, immutable catalog of signal definitions.
///
/// Declaration order is significant: when several signals fire at once, their
/// follow-up suggestions are surfaced in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalBank {
    signals: Vec<SignalDefinition>,
}

static BUILTIN: Lazy<SignalBank> = Lazy::new(|| {
    SignalBank::new(vec![
        SignalDefinition::pattern(
            names::PAIN_INTENSITY,
            &[
                "nightmare",
                "killing",
                "hate",
                "worst",
                "drowning",
                "exhausting",
                "fed up",
                "losing money",
                "every single day",
                "can't keep up",
            ],
            &[
                "What does that cost you in a typical week?",
                "When did it start getting this bad?",
            ],
        ),
        SignalDefinition::pattern(
            names::MANUAL_WORK,
            &[
                "by hand",
                "manually",
                "spreadsheet",
                "on paper",
                "whiteboard",
                "copy and paste",
                "sticky notes",
                "write it down",
                "type it in",
                "re-enter",
            ],
            &[
                "How many hours a week go into doing that by hand?",
                "Who else touches that process?",
            ],
        ),
        SignalDefinition::pattern(
            names::CUSTOMER_IMPACT,
            &[
                "customers complain",
                "lost a customer",
                "bad review",
                "customers wait",
                "missed appointment",
                "no-show",
                "refund",
                "customers leave",
            ],
            &[
                "How often does that reach your customers?",
                "What do customers say when it happens?",
            ],
        ),
        // Declared last so pattern-signal probes win the two-suggestion cap.
        SignalDefinition::min_words(
            names::VAGUE,
            8,
            &[
                "Could you tell me a bit more about that?",
                "What does that look like on a busy day?",
            ],
        ),
    ])
});

impl SignalBank {
    /// Creates a bank from an ordered list of definitions.
    pub fn new(signals: Vec<SignalDefinition>) -> Self {
        Self { signals }
    }

    /// The compiled-in default catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// A bank with no signals: nothing ever fires, every answer is a probe
    /// candidate. This is the safe default when configured data is unreadable.
    pub fn empty() -> Self {
        Self {
            signals: Vec::new(),
        }
    }

    /// Parses a bank from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, BankLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a bank from a YAML file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, BankLoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Definitions in declaration order.
    pub fn signals(&self) -> &[SignalDefinition] {
        &self.signals
    }

    /// Returns true when the bank holds no signals.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Default for SignalBank {
    fn default() -> Self {
        Self::builtin()
    }
}
