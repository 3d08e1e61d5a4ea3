//! Ports: interfaces the domain and application layers depend on,
//! implemented by adapters.

mod text_generator;

pub use text_generator::{GeneratedText, GenerationError, GenerationRequest, TextGenerator};
