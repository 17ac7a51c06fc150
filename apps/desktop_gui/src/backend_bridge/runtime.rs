//! Worker thread simulating payment settlement.
//!
//! The delay is deliberate latency, not work: every payment settles after a
//! fixed interval and always succeeds. There is nothing to cancel; a
//! settlement that arrives after the modal was closed is absorbed by the
//! idempotent enrollment operation.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use tracing::info;

use crate::backend_bridge::commands::AppCommand;
use crate::controller::events::UiEvent;

const SETTLEMENT_DELAY: Duration = Duration::from_secs(2);

pub fn launch(cmd_rx: Receiver<AppCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Payment worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                AppCommand::ProcessPayment { course_id } => {
                    info!(course = %course_id, "processing mock payment");
                    thread::sleep(SETTLEMENT_DELAY);
                    if ui_tx.send(UiEvent::PaymentSettled { course_id }).is_err() {
                        break;
                    }
                }
            }
        }

        info!("payment worker shutting down");
    });
}
