//! Delivery commands queued from UI to the sink worker.

use intake_core::contact::ContactMessage;
use shared::payload::SubmissionPayload;

pub enum SinkCommand {
    Deliver {
        payload: SubmissionPayload,
        service_title: String,
    },
    DeliverContact {
        message: ContactMessage,
    },
}
