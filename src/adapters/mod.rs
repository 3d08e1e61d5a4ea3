//! Adapters: infrastructure implementations of the ports, plus the HTTP
//! boundary.

pub mod ai;
pub mod http;

pub use ai::{AnthropicConfig, AnthropicGenerator, DisabledGenerator, MockGenerator};
