//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::UserDirectory;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the worker thread. It owns a tokio runtime and runs every command as
/// its own task, so slow requests never hold up later ones.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    directory: Arc<dyn UserDirectory>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                tokio::spawn(run_command(directory.clone(), ui_tx.clone(), cmd));
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    })
}

async fn run_command(
    directory: Arc<dyn UserDirectory>,
    ui_tx: Sender<UiEvent>,
    cmd: BackendCommand,
) {
    let event = match cmd {
        BackendCommand::Execute(operation) => {
            let kind = operation.kind();
            match operation.execute(directory.as_ref()).await {
                Ok(records) => UiEvent::RecordsLoaded {
                    operation: kind,
                    records,
                },
                Err(err) => UiEvent::Error(UiError::from_record_error(kind, &err)),
            }
        }
    };
    // Every command answers exactly once; a full queue waits for the UI thread.
    let event = match ui_tx.try_send(event) {
        Ok(()) => return,
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui event queue closed; dropping backend outcome");
            return;
        }
        Err(TrySendError::Full(event)) => event,
    };
    tracing::debug!("ui event queue is full; waiting for the ui thread");
    if tokio::task::block_in_place(|| ui_tx.send(event)).is_err() {
        tracing::debug!("ui event queue closed; dropping backend outcome");
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
