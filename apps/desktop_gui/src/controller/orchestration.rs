//! Command orchestration helpers from UI actions to the worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::AppCommand;

pub fn dispatch_app_command(cmd_tx: &Sender<AppCommand>, cmd: AppCommand, status: &mut String) {
    let cmd_name = match &cmd {
        AppCommand::ProcessPayment { .. } => "process_payment",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->worker command"),
        Err(TrySendError::Full(_)) => {
            *status = "Worker queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Payment worker disconnected; restart the app".to_string();
        }
    }
}
