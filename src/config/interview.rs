//! Interview engine configuration

use serde::Deserialize;
use tracing::warn;

use crate::domain::interview::{EngineConfig, IndustryHints, SignalBank};

use super::error::ValidationError;

/// Bounds and data sources for the interview engine.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Hard ceiling on processed answers per interview
    #[serde(default = "default_max_total_questions")]
    pub max_total_questions: u8,

    /// Probing budget within a single anchor
    #[serde(default = "default_max_follow_ups")]
    pub max_follow_ups_per_anchor: u8,

    /// Optional YAML file overriding the compiled-in signal bank
    pub signal_bank_path: Option<String>,

    /// Optional YAML file overriding the compiled-in industry hints
    pub industry_hints_path: Option<String>,
}

impl InterviewConfig {
    /// Engine bounds derived from this configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_total_questions: self.max_total_questions,
            max_follow_ups_per_anchor: self.max_follow_ups_per_anchor,
        }
    }

    /// Resolves the signal bank.
    ///
    /// No path configured: the compiled-in catalog. A configured path that
    /// cannot be read or parsed degrades to the empty bank (no signals ever
    /// fire, every answer probes) with a warning; a broken file must not
    /// take the interview down, but partially-trusted data is worse than
    /// none.
    pub fn signal_bank(&self) -> SignalBank {
        match &self.signal_bank_path {
            None => SignalBank::builtin(),
            Some(path) => match SignalBank::load_from_path(path) {
                Ok(bank) => bank,
                Err(err) => {
                    warn!(path = %path, error = %err, "signal bank unreadable, using empty bank");
                    SignalBank::empty()
                }
            },
        }
    }

    /// Resolves the industry hints, falling back to the compiled-in set.
    pub fn industry_hints(&self) -> IndustryHints {
        match &self.industry_hints_path {
            None => IndustryHints::builtin(),
            Some(path) => match IndustryHints::load_from_path(path) {
                Ok(hints) => hints,
                Err(err) => {
                    warn!(path = %path, error = %err, "industry hints unreadable, using built-in hints");
                    IndustryHints::builtin()
                }
            },
        }
    }

    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_total_questions == 0 || self.max_follow_ups_per_anchor == 0 {
            return Err(ValidationError::InvalidInterviewBounds);
        }
        if self.max_follow_ups_per_anchor >= self.max_total_questions {
            return Err(ValidationError::FollowUpBudgetTooLarge);
        }
        Ok(())
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            max_total_questions: default_max_total_questions(),
            max_follow_ups_per_anchor: default_max_follow_ups(),
            signal_bank_path: None,
            industry_hints_path: None,
        }
    }
}

fn default_max_total_questions() -> u8 {
    8
}

fn default_max_follow_ups() -> u8 {
    2
}
