//! Application command handlers.

mod bootstrap_interview;
mod submit_answer;

pub use bootstrap_interview::{BootstrapInterviewCommand, BootstrapInterviewHandler, BootstrapReply};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, TurnReply};
