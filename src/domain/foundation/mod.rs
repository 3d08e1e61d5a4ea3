//! Foundation value objects shared across the domain.

mod errors;
mod ids;

pub use errors::{require_non_empty, ValidationError};
pub use ids::InterviewId;
