//! Command orchestration helpers from UI actions to the sink worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::sink_bridge::commands::SinkCommand;

pub fn dispatch_sink_command(
    cmd_tx: &Sender<SinkCommand>,
    cmd: SinkCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        SinkCommand::Deliver { .. } => "deliver_submission",
        SinkCommand::DeliverContact { .. } => "deliver_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->sink command"),
        Err(TrySendError::Full(_)) => {
            *status = "Delivery queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Delivery worker disconnected; restart the app and retry".to_string();
        }
    }
}
