//! AI adapters: implementations of the TextGenerator port.

mod anthropic_generator;
mod disabled_generator;
mod mock_generator;

pub use anthropic_generator::{AnthropicConfig, AnthropicGenerator};
pub use disabled_generator::DisabledGenerator;
pub use mock_generator::MockGenerator;
