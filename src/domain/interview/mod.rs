//! The adaptive interview core.
//!
//! Pure domain logic: the anchor sequence, the signal bank, detection over
//! answer text, the per-conversation state snapshot, the turn-by-turn
//! decision engine, and the deterministic acknowledgment fallback. Nothing
//! in this module performs I/O; the generative acknowledgment call lives
//! behind a port and is orchestrated by the application layer.

pub mod acknowledgment;
pub mod anchor;
pub mod detector;
pub mod engine;
pub mod phase;
pub mod signal_bank;
pub mod state;

pub use acknowledgment::{
    build_prompt, fallback_acknowledgment, AckContext, IndustryHints, SYSTEM_INSTRUCTIONS,
};
pub use anchor::{Anchor, CLOSING_PROMPT};
pub use detector::{detect, DetectionResult, MAX_SUGGESTIONS};
pub use engine::{BootstrapOutcome, EngineConfig, InterviewEngine, TurnDecision, TurnOutcome};
pub use phase::{InterviewStatus, QuestionKind, TurnPhase};
pub use signal_bank::{BankLoadError, SignalBank, SignalDefinition, SignalRule};
pub use state::{AnswerRecord, InterviewState, Progress};
