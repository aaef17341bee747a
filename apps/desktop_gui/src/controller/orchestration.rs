//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::{ClientesFailure, ErrorCode};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. A command that could not be queued will never
/// produce a result event, so the caller gets the failure back to fold into its state.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), ClientesFailure> {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(ClientesFailure::new(
                ErrorCode::Transport,
                "UI command queue is full; please retry",
            ))
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err(ClientesFailure::new(
                ErrorCode::Transport,
                "Backend command processor disconnected (possible startup/runtime failure)",
            ))
        }
    }
}
