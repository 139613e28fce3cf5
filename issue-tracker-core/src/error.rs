use std::fmt;

use thiserror::Error;

/// The mutating operation that failed to resolve its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation and lookup failures. The `Display` form is the message sent to
/// clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("required field(s) missing")]
    MissingRequiredFields,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields,

    /// Raised the same way whether the project or only the issue is missing.
    #[error("could not {action}")]
    ProjectOrIssueNotFound { action: Action },
}

impl StoreError {
    /// Whether the error response carries the requested `_id`.
    pub fn echoes_id(&self) -> bool {
        matches!(
            self,
            Self::NoUpdateFields | Self::ProjectOrIssueNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
