//! Runtime bridge between UI command queue and backend event intake.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use client_core::{ClientesApi, HttpClientesApi};
use crossbeam_channel::{Receiver, Sender};
use shared::error::ClientesFailure;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    server_url: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    launch_with_api(Arc::new(HttpClientesApi::new(server_url)), cmd_rx, ui_tx)
}

/// Runs until the UI drops its command sender. Each command becomes its own task, so a slow
/// request never holds back the ones queued after it.
pub fn launch_with_api(
    api: Arc<dyn ClientesApi>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                tracing::debug!(command = cmd.name(), "backend received command");
                let api = Arc::clone(&api);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = match cmd {
                        BackendCommand::LoadClientes => UiEvent::ClientesLoaded(
                            api.list_clientes().await.map_err(ClientesFailure::from),
                        ),
                        BackendCommand::CreateCliente { draft } => UiEvent::ClienteCreated(
                            api.create_cliente(&draft)
                                .await
                                .map_err(ClientesFailure::from),
                        ),
                    };
                    if ui_tx.send(event).is_err() {
                        tracing::warn!("ui event queue closed before backend result was delivered");
                    }
                });
            }
        });
    })
}
