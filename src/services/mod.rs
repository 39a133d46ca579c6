//! Application service layer.
//!
//! The compose service holds the generation logic and knows nothing about
//! files or status. The run service wraps it with input reading, output
//! writing and status reporting.

mod compose_service;
mod run_service;

pub use compose_service::{generate_messages, MessageComposer};
pub use run_service::{RunOptions, RunService, RunSummary};
