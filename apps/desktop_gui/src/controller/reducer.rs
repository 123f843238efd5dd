//! UI-thread state: the draft form, the last fetched collection, and how events change them.

use client_core::{FormField, FormState, OperationKind, RecordError, RecordOperation, RecordTable};
use crossbeam_channel::Sender;
use shared::domain::UserRecord;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Default)]
pub struct RecordViewState {
    form: FormState,
    records: Vec<UserRecord>,
    in_flight: usize,
}

impl RecordViewState {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn table(&self) -> RecordTable {
        RecordTable::from_records(&self.records)
    }

    /// Commands queued whose outcome has not arrived yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn handle_input_change(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Validates the form for `kind` and queues the request. Failures are
    /// reported here and nothing reaches the backend.
    pub fn submit(
        &mut self,
        kind: OperationKind,
        cmd_tx: &Sender<BackendCommand>,
    ) -> Result<(), UiError> {
        let operation = RecordOperation::prepare(kind, &self.form).map_err(|invalid| {
            let err = UiError::from_record_error(kind, &RecordError::from(invalid));
            err.report();
            err
        })?;
        dispatch_backend_command(cmd_tx, BackendCommand::Execute(operation)).map_err(|err| {
            err.report();
            err
        })?;
        self.in_flight += 1;
        Ok(())
    }

    pub fn apply(&mut self, event: UiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            UiEvent::RecordsLoaded { operation, records } => {
                tracing::info!(
                    operation = %operation,
                    count = records.len(),
                    "records table refreshed"
                );
                self.records = records;
            }
            UiEvent::Error(err) => err.report(),
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
