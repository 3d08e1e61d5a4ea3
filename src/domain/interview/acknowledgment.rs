//! Acknowledgment text.
//!
//! A short, warm phrase shown before the next question, validating what the
//! owner just said. Anchor transitions try the external generative service
//! for an industry-flavored bridge; every other case (follow-up turns, and
//! any generative failure) uses the deterministic table below. Selection is
//! an explicit function over the detected signals, never an exception
//! handler.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::signal_bank::names;

/// Openers the generative service is instructed never to use.
pub const BANNED_OPENERS: [&str; 4] = [
    "thanks for sharing",
    "that's helpful",
    "i appreciate you sharing",
    "great, thanks",
];

/// System instructions sent with every acknowledgment request.
pub const SYSTEM_INSTRUCTIONS: &str = "You write one short, warm acknowledgment for a live \
     discovery interview with a small-business owner. Reply with 1-2 sentences only: validate \
     what they just said in plain language flavored to their industry, then lean naturally into \
     the next question without repeating it. Never open with a stock phrase such as \
     \"thanks for sharing\", \"that's helpful\", \"i appreciate you sharing\", or \
     \"great, thanks\". No greetings, no bullet points, no questions.";

/// Deterministic fallback, first match wins: pain intensity, then manual
/// work, then customer impact, then the generic line.
pub fn fallback_acknowledgment(detected_signals: &[String]) -> &'static str {
    const PRIORITY: [(&str, &str); 3] = [
        (
            names::PAIN_INTENSITY,
            "That sounds genuinely draining to deal with day after day.",
        ),
        (
            names::MANUAL_WORK,
            "Doing all of that by hand adds up faster than most people realize.",
        ),
        (
            names::CUSTOMER_IMPACT,
            "Once something like that starts reaching your customers, it really matters.",
        ),
    ];

    for (name, text) in PRIORITY {
        if detected_signals.iter().any(|s| s == name) {
            return text;
        }
    }
    "Got it, that gives me a clearer picture."
}

/// Everything the prompt builder needs for one acknowledgment request.
#[derive(Debug, Clone)]
pub struct AckContext<'a> {
    /// The answer being acknowledged.
    pub answer_text: &'a str,
    /// Signals detected in it.
    pub detected_signals: &'a [String],
    /// The owner's industry.
    pub industry: &'a str,
    /// The owner's name, for a personal touch.
    pub display_name: &'a str,
    /// The question the acknowledgment bridges into.
    pub next_question: &'a str,
}

/// Builds the generative prompt for one acknowledgment.
pub fn build_prompt(ctx: &AckContext<'_>, hints: &IndustryHints) -> String {
    let signals = if ctx.detected_signals.is_empty() {
        "none".to_string()
    } else {
        ctx.detected_signals.join(", ")
    };

    format!(
        "Business owner: {name} ({industry}).\n\
         Industry phrasing hint: {hint}\n\
         They just said: \"{answer}\"\n\
         Conversational cues detected: {signals}\n\
         The next question will be: \"{next}\"\n\
         Write the acknowledgment.",
        name = ctx.display_name,
        industry = ctx.industry,
        hint = hints.hint_for(ctx.industry),
        answer = ctx.answer_text,
        signals = signals,
        next = ctx.next_question,
    )
}

static BUILTIN_HINTS: Lazy<IndustryHints> = Lazy::new(|| {
    IndustryHints::new(BTreeMap::from([
        (
            "plumbing".to_string(),
            "speak in terms of jobs, callouts, and crews".to_string(),
        ),
        (
            "restaurant".to_string(),
            "speak in terms of covers, shifts, and the pass".to_string(),
        ),
        (
            "retail".to_string(),
            "speak in terms of stock, the floor, and foot traffic".to_string(),
        ),
        (
            "salon".to_string(),
            "speak in terms of appointments, chairs, and walk-ins".to_string(),
        ),
        (
            "landscaping".to_string(),
            "speak in terms of routes, crews, and seasons".to_string(),
        ),
    ]))
});

const NEUTRAL_HINT: &str = "plain everyday business language";

/// Per-industry phrasing hints folded into the generative prompt.
///
/// Matching is by case-insensitive substring so "Plumbing & Heating" picks
/// up the plumbing hint. Unknown industries get a neutral hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndustryHints {
    hints: BTreeMap<String, String>,
}

impl IndustryHints {
    /// Creates a hint map; keys are matched as lowercase substrings.
    pub fn new(hints: BTreeMap<String, String>) -> Self {
        Self {
            hints: hints
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        }
    }

    /// The compiled-in hint set.
    pub fn builtin() -> Self {
        BUILTIN_HINTS.clone()
    }

    /// Loads hints from a YAML map of industry keyword to hint text.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, super::signal_bank::BankLoadError> {
        let text = std::fs::read_to_string(path)?;
        let hints: BTreeMap<String, String> = serde_yaml::from_str(&text)?;
        Ok(Self::new(hints))
    }

    /// The hint for an industry, or the neutral default.
    pub fn hint_for(&self, industry: &str) -> &str {
        let lowered = industry.to_lowercase();
        self.hints
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, hint)| hint.as_str())
            .unwrap_or(NEUTRAL_HINT)
    }
}

impl Default for IndustryHints {
    fn default() -> Self {
        Self::builtin()
    }
}
