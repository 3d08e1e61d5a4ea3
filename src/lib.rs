//! Discovery Intake - Adaptive Discovery Interview Engine
//!
//! This crate conducts a short, adaptive interview with a small-business
//! owner, deciding turn by turn whether to probe deeper or move on, and
//! degrading gracefully when the generative acknowledgment service is
//! unavailable.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
