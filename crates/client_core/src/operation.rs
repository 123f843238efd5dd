use std::fmt;

use shared::{
    domain::{UserId, UserRecord},
    protocol::{NewUser, UserUpdate},
};
use tracing::{debug, info};

use crate::{
    directory::UserDirectory,
    error::{RecordError, ValidationError},
    form::FormState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Read,
    Update,
    Delete,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Create,
        OperationKind::Read,
        OperationKind::Update,
        OperationKind::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Create => "Create",
            OperationKind::Read => "Read",
            OperationKind::Update => "Update",
            OperationKind::Delete => "Delete",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated request, detached from the form it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOperation {
    Create(NewUser),
    Read,
    Update { id: UserId, update: UserUpdate },
    Delete { id: String },
}

impl RecordOperation {
    pub fn prepare(kind: OperationKind, form: &FormState) -> Result<Self, ValidationError> {
        Ok(match kind {
            OperationKind::Create => RecordOperation::Create(form.create_request()?),
            OperationKind::Read => RecordOperation::Read,
            OperationKind::Update => {
                let (id, update) = form.update_request()?;
                RecordOperation::Update { id, update }
            }
            OperationKind::Delete => RecordOperation::Delete {
                id: form.delete_target().to_string(),
            },
        })
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            RecordOperation::Create(_) => OperationKind::Create,
            RecordOperation::Read => OperationKind::Read,
            RecordOperation::Update { .. } => OperationKind::Update,
            RecordOperation::Delete { .. } => OperationKind::Delete,
        }
    }

    /// Sends the mutation, if any, then fetches the whole collection.
    ///
    /// A failed resync after a successful mutation surfaces as a `Read` error.
    pub async fn execute(
        self,
        directory: &dyn UserDirectory,
    ) -> Result<Vec<UserRecord>, RecordError> {
        let kind = self.kind();
        debug!(operation = %kind, "sending request");
        let mutation = match &self {
            RecordOperation::Create(user) => Some(directory.create_user(user).await),
            RecordOperation::Read => None,
            RecordOperation::Update { id, update } => {
                Some(directory.update_user(*id, update).await)
            }
            RecordOperation::Delete { id } => Some(directory.delete_user(id).await),
        };
        if let Some(result) = mutation {
            result.map_err(|source| RecordError::remote(kind, source))?;
            info!(operation = %kind, "mutation accepted");
        }

        let records = directory
            .list_users()
            .await
            .map_err(|source| RecordError::remote(OperationKind::Read, source))?;
        info!(operation = %kind, count = records.len(), "records loaded");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/operation_tests.rs"]
mod tests;
