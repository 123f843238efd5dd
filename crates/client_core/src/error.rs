use thiserror::Error;
use tracing::{error, warn};

use crate::operation::OperationKind;

/// A form value that could not be turned into a request. Nothing is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid age {value:?}; enter a valid integer for age")]
    InvalidAge { value: String },
    #[error("invalid id {value:?}; enter a valid positive integer for id")]
    InvalidId { value: String },
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{operation} error: {source}")]
    Remote {
        operation: OperationKind,
        source: anyhow::Error,
    },
}

impl RecordError {
    pub fn remote(operation: OperationKind, source: anyhow::Error) -> Self {
        Self::Remote { operation, source }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The operation whose request failed, if one was sent.
    pub fn operation(&self) -> Option<OperationKind> {
        match self {
            Self::Validation(_) => None,
            Self::Remote { operation, .. } => Some(*operation),
        }
    }

    /// Logs the failure. Reporting is terminal: callers do not retry.
    pub fn report(&self, attempted: OperationKind) {
        match self {
            Self::Validation(err) => {
                warn!(operation = %attempted, error = %err, "request not sent");
            }
            Self::Remote { operation, source } => {
                error!(
                    operation = %operation,
                    attempted = %attempted,
                    error = %source,
                    "remote call failed"
                );
            }
        }
    }
}
