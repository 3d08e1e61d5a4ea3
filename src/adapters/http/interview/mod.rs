//! Interview HTTP endpoints: DTOs, handlers, and routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InterviewAppState;
pub use routes::routes;
