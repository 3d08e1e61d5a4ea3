//! Signal detection over raw answer text.
//!
//! A pure, total classification pass: one answer in, the set of fired
//! signals, per-signal confidence, and up to two candidate follow-up
//! questions out. No state, no I/O, no failure mode for text input; an
//! empty bank simply means nothing ever fires and every answer becomes a
//! probe candidate.

use std::collections::HashMap;

use super::signal_bank::{SignalBank, SignalRule};

/// Maximum number of follow-up suggestions returned per answer.
pub const MAX_SUGGESTIONS: usize = 2;

/// Confidence floor for a pattern signal that matched a single pattern.
const BASE_CONFIDENCE: f32 = 0.5;
/// Confidence added per additional matched pattern.
const PER_MATCH_CONFIDENCE: f32 = 0.2;

/// Outcome of scanning one answer against a signal bank.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Names of fired signals, in bank declaration order.
    pub signals: Vec<String>,
    /// Confidence per fired signal.
    pub confidence: HashMap<String, f32>,
    /// Deduplicated candidate follow-up questions, at most
    /// [`MAX_SUGGESTIONS`], in bank declaration order.
    pub follow_up_suggestions: Vec<String>,
    /// True when the answer warrants digging deeper: the length signal
    /// fired, or nothing fired at all.
    pub should_probe_deeper: bool,
}

impl DetectionResult {
    /// Returns true if the named signal fired.
    pub fn fired(&self, name: &str) -> bool {
        self.signals.iter().any(|s| s == name)
    }
}

/// Scans one answer against the bank.
///
/// Matching is case-insensitive substring search over the whole answer;
/// word counting is whitespace-delimited, so an empty or whitespace-only
/// answer counts zero words and always trips a length-based signal.
pub fn detect(answer_text: &str, bank: &SignalBank) -> DetectionResult {
    let lowered = answer_text.to_lowercase();
    let word_count = answer_text.split_whitespace().count();

    let mut signals = Vec::new();
    let mut confidence = HashMap::new();
    let mut follow_up_suggestions: Vec<String> = Vec::new();
    let mut length_signal_fired = false;

    for definition in bank.signals() {
        let fired_confidence = match &definition.rule {
            SignalRule::Patterns { patterns } => {
                let matched = patterns.iter().filter(|p| lowered.contains(p.as_str())).count();
                if matched == 0 {
                    continue;
                }
                pattern_confidence(matched)
            }
            SignalRule::MinWords { min_words } => {
                if word_count >= *min_words {
                    continue;
                }
                length_signal_fired = true;
                // Word count is exact, not a heuristic match.
                1.0
            }
        };

        signals.push(definition.name.clone());
        confidence.insert(definition.name.clone(), fired_confidence);

        if follow_up_suggestions.len() < MAX_SUGGESTIONS {
            if let Some(first) = definition.follow_ups.first() {
                if !follow_up_suggestions.contains(first) {
                    follow_up_suggestions.push(first.clone());
                }
            }
        }
    }

    let should_probe_deeper = length_signal_fired || signals.is_empty();

    DetectionResult {
        signals,
        confidence,
        follow_up_suggestions,
        should_probe_deeper,
    }
}

fn pattern_confidence(matched: usize) -> f32 {
    (BASE_CONFIDENCE + PER_MATCH_CONFIDENCE * matched as f32).min(1.0)
}
