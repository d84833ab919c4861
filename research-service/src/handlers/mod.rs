//! HTTP handlers for the research service.

pub mod health;
pub mod research;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use research::process_content;
