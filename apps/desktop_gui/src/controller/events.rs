//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{OperationKind, RecordError};
use shared::domain::UserRecord;

#[derive(Debug)]
pub enum UiEvent {
    /// The collection fetched after `operation` completed.
    RecordsLoaded {
        operation: OperationKind,
        records: Vec<UserRecord>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Server,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    CommandQueue,
    Operation(OperationKind),
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("connection")
            || message_lower.contains("error sending request")
            || message_lower.contains("timed out")
            || message_lower.contains("dns")
            || message_lower.contains("disconnected")
            || message_lower.contains("queue is full")
        {
            UiErrorCategory::Transport
        } else if message_lower.contains(" answered ")
            || message_lower.contains("malformed")
            || message_lower.contains("decoding response")
        {
            UiErrorCategory::Server
        } else if message_lower.contains("invalid") {
            UiErrorCategory::Validation
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Local validation failures are classified without looking at the text.
    pub fn from_record_error(attempted: OperationKind, err: &RecordError) -> Self {
        if err.is_validation() {
            return Self {
                category: UiErrorCategory::Validation,
                context: UiErrorContext::Operation(attempted),
                message: err.to_string(),
            };
        }
        let operation = err.operation().unwrap_or(attempted);
        Self::from_message(UiErrorContext::Operation(operation), err.to_string())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Logs the error. Nothing is kept for display.
    pub fn report(&self) {
        match self.category {
            UiErrorCategory::Validation => tracing::warn!(
                category = ?self.category,
                context = ?self.context,
                "{}",
                self.message
            ),
            _ => tracing::error!(
                category = ?self.category,
                context = ?self.context,
                "{}",
                self.message
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
