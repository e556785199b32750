//! Error types for trace construction and trace access
//!
//! This module defines [`TraceError`]. Both variants are local and
//! recoverable: invalid input is rejected before any step is produced, and
//! out-of-range access only happens when a caller ignores [`Trace::len`].
//!
//! [`Trace::len`]: crate::trace::Trace::len

use thiserror::Error;

/// Errors raised while building or reading a trace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// User supplied input violates a precondition (no trace is produced)
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Step index outside `[0, len - 1]`
    #[error("step index {index} out of range (trace has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl TraceError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TraceError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Whether this error should be shown to the user as a validation message
    pub fn is_user_facing(&self) -> bool {
        matches!(self, TraceError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, TraceError>;
