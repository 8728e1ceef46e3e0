use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("invalid disk count {disk_count}: {reason}")]
    InvalidConfiguration { disk_count: u32, reason: &'static str },
    #[error("peg index {index} out of range, expected 0, 1 or 2")]
    InvalidPeg { index: usize },
    #[error("puzzle invariant violated: {detail}")]
    InvariantViolated { detail: String },
}

/// Failure reported by a [`crate::PuzzleListener`]. The session logs it and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("listener failed: {message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
