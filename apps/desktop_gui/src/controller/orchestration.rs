//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::StatusBanner;

/// Queues `cmd` for the backend worker. Returns false and sets the banner when
/// the command could not be queued.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    banner: &mut Option<StatusBanner>,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *banner = Some(StatusBanner::error("UI command queue is full; please retry"));
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *banner = Some(StatusBanner::error(
                "Backend worker disconnected (possible startup failure); restart the app",
            ));
            false
        }
    }
}
