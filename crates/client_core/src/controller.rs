//! The record controller: form state, the fetched collection, and the four
//! operations that connect them to the users service.

use std::sync::Arc;

use shared::domain::UserRecord;

use crate::{
    directory::UserDirectory,
    error::RecordError,
    form::{FormField, FormState},
    operation::{OperationKind, RecordOperation},
    table::RecordTable,
};

pub struct RecordController {
    form: FormState,
    records: Vec<UserRecord>,
    directory: Arc<dyn UserDirectory>,
}

impl RecordController {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self::with_form(directory, FormState::default())
    }

    pub fn with_form(directory: Arc<dyn UserDirectory>, form: FormState) -> Self {
        Self {
            form,
            records: Vec::new(),
            directory,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn table(&self) -> RecordTable {
        RecordTable::from_records(&self.records)
    }

    pub fn handle_input_change(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    pub async fn create(&mut self) -> Result<(), RecordError> {
        self.perform(OperationKind::Create).await
    }

    pub async fn read(&mut self) -> Result<(), RecordError> {
        self.perform(OperationKind::Read).await
    }

    pub async fn update(&mut self) -> Result<(), RecordError> {
        self.perform(OperationKind::Update).await
    }

    pub async fn delete(&mut self) -> Result<(), RecordError> {
        self.perform(OperationKind::Delete).await
    }

    /// Runs one operation against the current form. On failure the error is
    /// reported and both the form and the collection are left untouched.
    pub async fn perform(&mut self, kind: OperationKind) -> Result<(), RecordError> {
        let outcome = match RecordOperation::prepare(kind, &self.form) {
            Ok(operation) => operation.execute(self.directory.as_ref()).await,
            Err(invalid) => Err(invalid.into()),
        };
        match outcome {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(err) => {
                err.report(kind);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
