use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::payload::SubmissionPayload;
use tracing::info;

use crate::contact::ContactMessage;

/// Delivery target for completed intake data. The desk currently only traces
/// submissions; a production deployment would swap in a sink that posts to a
/// booking backend.
pub trait SubmissionSink: Send {
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()>;
    fn deliver_contact(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
struct SubmissionRecord<'a> {
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    payload: &'a SubmissionPayload,
}

/// Developer-visible sink: serializes the submission and emits it through
/// `tracing`. Nothing is persisted or transmitted.
#[derive(Debug, Default)]
pub struct TraceSink;

impl SubmissionSink for TraceSink {
    fn deliver(&self, payload: &SubmissionPayload) -> anyhow::Result<()> {
        let record = SubmissionRecord {
            received_at: Utc::now(),
            payload,
        };
        let encoded = serde_json::to_string(&record)?;
        info!(service = %payload.service, submission = %encoded, "service request received");
        Ok(())
    }

    fn deliver_contact(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let encoded = serde_json::to_string(message)?;
        info!(contact = %encoded, "contact message received");
        Ok(())
    }
}

/// User-facing confirmation shown after a service request goes through.
pub fn acknowledgment_message(service_title: &str, response_hours: u32) -> String {
    format!(
        "Thank you for your {service_title} request! \
         We'll get back to you within {response_hours} hours with a detailed quote."
    )
}

/// Confirmation for the plain contact form.
pub fn contact_acknowledgment(response_hours: u32) -> String {
    format!("Thank you for your message! We'll get back to you within {response_hours} hours.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgment_names_the_service_and_commitment() {
        let message = acknowledgment_message("CV Creation Service", 24);
        assert!(message.contains("CV Creation Service"));
        assert!(message.contains("within 24 hours"));
    }

    #[test]
    fn trace_sink_accepts_an_empty_submission() {
        let payload = SubmissionPayload {
            service: "xyz".to_string(),
            client_info: Default::default(),
            responses: Default::default(),
        };
        TraceSink.deliver(&payload).expect("trace delivery");
    }
}
