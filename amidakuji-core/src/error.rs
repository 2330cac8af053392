//! Error kinds surfaced by generation and tracing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// Caller-supplied parameters are out of range. Raised before any
    /// random draw is made.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A ladder row breaks the rung invariants. The generator never builds
    /// one of these; they only arrive through deserialization.
    #[error("malformed ladder at row {row}: {reason}")]
    MalformedLadder { row: usize, reason: String },
}

impl LadderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLadder {
            row,
            reason: reason.into(),
        }
    }
}
