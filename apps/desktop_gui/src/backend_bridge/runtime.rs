//! Backend worker: owns the customer list controller and runs directory calls
//! on its own tokio runtime, one command at a time.

use std::{sync::Arc, thread};

use client_core::{CustomerListController, DeleteOutcome, HttpDirectoryClient};
use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::CustomerRecord;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    api_base_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                emit(
                    &ui_tx,
                    UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )),
                );
                return;
            }
        };

        let directory = match HttpDirectoryClient::new(&api_base_url) {
            Ok(directory) => directory,
            Err(err) => {
                tracing::error!("invalid directory url '{api_base_url}': {err}");
                emit(
                    &ui_tx,
                    UiEvent::Error(UiError::from_directory(UiErrorContext::BackendStartup, &err)),
                );
                return;
            }
        };
        tracing::info!(api_base_url = %directory.base_url(), "backend worker ready");
        let mut controller = CustomerListController::new(Arc::new(directory));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "processing backend command");
                let event = handle_command(&mut controller, cmd).await;
                emit(&ui_tx, event);
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    })
}

pub(crate) async fn handle_command(
    controller: &mut CustomerListController,
    cmd: BackendCommand,
) -> UiEvent {
    match cmd {
        BackendCommand::LoadCustomers => match controller.load().await {
            Ok(_) => UiEvent::CustomersLoaded {
                customers: snapshot(controller),
            },
            Err(err) => {
                UiEvent::Error(UiError::from_directory(UiErrorContext::LoadCustomers, &err))
            }
        },
        BackendCommand::CreateCustomer { request } => match controller.create(&request).await {
            Ok(customer) => UiEvent::CustomerCreated {
                customer,
                customers: snapshot(controller),
            },
            Err(err) => {
                tracing::warn!("failed to register customer: {err}");
                UiEvent::Error(UiError::from_directory(UiErrorContext::CreateCustomer, &err))
            }
        },
        BackendCommand::DeleteCustomer { id } => match controller.delete(&id).await {
            DeleteOutcome::Removed => UiEvent::CustomerDeleted {
                id,
                customers: snapshot(controller),
            },
            DeleteOutcome::Failed { error, resynced } => UiEvent::DeleteFailed {
                id,
                error: UiError::from_directory(UiErrorContext::DeleteCustomer, &error),
                customers: resynced.then(|| snapshot(controller)),
            },
        },
    }
}

fn snapshot(controller: &CustomerListController) -> Vec<CustomerRecord> {
    controller.customers().as_slice().to_vec()
}

fn emit(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => tracing::warn!("ui event queue is full; dropping event"),
        Err(TrySendError::Disconnected(_)) => tracing::debug!("ui event queue closed"),
    }
}
