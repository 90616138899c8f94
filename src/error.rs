//! Errors that reject a whole mission before any robot runs.

use thiserror::Error;

/// Top-level input failures. The `Display` text is the message returned to
/// callers of [`run_robot_commands`](crate::run_robot_commands).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// The input text was empty.
    #[error("Invalid commands")]
    EmptyInput,
    /// A grid dimension on the first line was negative.
    #[error("Invalid grid size")]
    InvalidGridSize { line: String },
}
