//! Events flowing back from the sink worker to the UI.

pub enum UiEvent {
    SubmissionAccepted { service_title: String },
    SubmissionFailed { reason: String },
    ContactAccepted,
    ContactFailed { reason: String },
}
