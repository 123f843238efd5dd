//! Backend commands queued from UI to backend worker.

use client_core::{OperationKind, RecordOperation};

#[derive(Debug)]
pub enum BackendCommand {
    /// Send an already validated operation, then resynchronise the collection.
    Execute(RecordOperation),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Execute(operation) => match operation.kind() {
                OperationKind::Create => "create",
                OperationKind::Read => "read",
                OperationKind::Update => "update",
                OperationKind::Delete => "delete",
            },
        }
    }
}
