//! Worker thread draining the delivery queue into the configured sink.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use intake_core::sink::{SubmissionSink, TraceSink};
use tracing::warn;

use crate::controller::events::UiEvent;
use crate::sink_bridge::commands::SinkCommand;

pub fn launch(cmd_rx: Receiver<SinkCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run(cmd_rx, ui_tx, TraceSink));
}

fn run(cmd_rx: Receiver<SinkCommand>, ui_tx: Sender<UiEvent>, sink: impl SubmissionSink) {
    while let Ok(cmd) = cmd_rx.recv() {
        let event = match cmd {
            SinkCommand::Deliver {
                payload,
                service_title,
            } => match sink.deliver(&payload) {
                Ok(()) => UiEvent::SubmissionAccepted { service_title },
                Err(err) => UiEvent::SubmissionFailed {
                    reason: err.to_string(),
                },
            },
            SinkCommand::DeliverContact { message } => match sink.deliver_contact(&message) {
                Ok(()) => UiEvent::ContactAccepted,
                Err(err) => UiEvent::ContactFailed {
                    reason: err.to_string(),
                },
            },
        };

        if ui_tx.send(event).is_err() {
            warn!("ui event channel closed; stopping sink worker");
            break;
        }
    }
}
