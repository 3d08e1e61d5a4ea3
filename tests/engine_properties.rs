//! Property-based tests for the detector and engine invariants.
//!
//! The detector is a pure function and the engine a pure transition, so
//! their contracts hold for arbitrary answer text, not just the curated
//! examples in the unit tests.

use proptest::prelude::*;

use discovery_intake::domain::interview::{
    detect, InterviewEngine, SignalBank, MAX_SUGGESTIONS,
};

/// Arbitrary printable answers, including empty ones.
fn any_answer() -> impl Strategy<Value = String> {
    "[ -~]{0,200}"
}

/// Answers guaranteed to have fewer than eight words.
fn short_answer() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,10}", 0..8).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn detection_is_idempotent(answer in any_answer()) {
        let bank = SignalBank::builtin();
        prop_assert_eq!(detect(&answer, &bank), detect(&answer, &bank));
    }

    #[test]
    fn suggestions_never_exceed_the_cap(answer in any_answer()) {
        let result = detect(&answer, &SignalBank::builtin());
        prop_assert!(result.follow_up_suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn confidence_stays_in_range(answer in any_answer()) {
        let result = detect(&answer, &SignalBank::builtin());
        for (name, confidence) in &result.confidence {
            prop_assert!(
                (0.5..=1.0).contains(confidence),
                "confidence for {} out of range: {}",
                name,
                confidence
            );
        }
    }

    #[test]
    fn every_fired_signal_has_a_confidence(answer in any_answer()) {
        let result = detect(&answer, &SignalBank::builtin());
        for name in &result.signals {
            prop_assert!(result.confidence.contains_key(name));
        }
    }

    #[test]
    fn answers_under_the_word_threshold_always_read_as_vague(answer in short_answer()) {
        let result = detect(&answer, &SignalBank::builtin());
        prop_assert!(result.fired("vague"));
        prop_assert!(result.should_probe_deeper);
    }

    #[test]
    fn empty_bank_never_fires_and_always_probes(answer in any_answer()) {
        let result = detect(&answer, &SignalBank::empty());
        prop_assert!(result.signals.is_empty());
        prop_assert!(result.should_probe_deeper);
    }

    #[test]
    fn interviews_terminate_within_bounds(answers in proptest::collection::vec(any_answer(), 1..12)) {
        let engine = InterviewEngine::with_defaults();
        let max = engine.config().max_total_questions;
        let mut state = engine.bootstrap("plumbing", "Sam").state;

        let mut previous_anchor = state.current_anchor().index();
        let mut previous_asked = state.questions_asked();
        let mut previous_follow_ups = state.follow_ups_for_current_anchor();

        for answer in &answers {
            if state.is_complete() {
                break;
            }
            state = engine.process_answer(&state, answer).state;

            let anchor = state.current_anchor().index();
            prop_assert!(anchor >= previous_anchor, "anchor must never decrease");
            prop_assert!(anchor - previous_anchor <= 1, "anchor advances one step at a time");

            prop_assert_eq!(state.questions_asked(), previous_asked + 1);

            if anchor != previous_anchor {
                prop_assert_eq!(state.follow_ups_for_current_anchor(), 0);
            } else {
                prop_assert!(
                    state.follow_ups_for_current_anchor() <= previous_follow_ups + 1
                );
            }

            previous_anchor = anchor;
            previous_asked = state.questions_asked();
            previous_follow_ups = state.follow_ups_for_current_anchor();
        }

        prop_assert!(state.questions_asked() <= max);
    }
}
