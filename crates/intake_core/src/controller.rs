//! Reducer-style state machine behind the service request modal.
//!
//! The GUI layer owns the widgets; which service is open, the per-question
//! drafts, required-field gating, and payload assembly all live here so they
//! can be exercised without a window.

use std::collections::BTreeMap;

use shared::domain::{QuestionKind, ServiceDefinition};
use shared::payload::{ClientInfo, ResponseValue, SubmissionPayload};
use tracing::debug;

use crate::catalog::ServiceCatalog;
use crate::error::SubmitBlocked;

/// In-progress answer for one question. Variant tracks the question kind the
/// draft was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseDraft {
    /// Short or long text buffer.
    Text(String),
    /// Single-select; `None` while the placeholder is still showing.
    Choice(Option<String>),
    /// Multi-select; one flag per option, in definition order.
    Checks(Vec<bool>),
}

/// Editable buffers for the fixed client fields. All optional; blanks become
/// unset fields in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfoDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub timeline: String,
    pub budget: String,
    pub notes: String,
}

impl ClientInfoDraft {
    fn to_client_info(&self) -> ClientInfo {
        fn field(raw: &str) -> Option<String> {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        ClientInfo {
            name: field(&self.name),
            email: field(&self.email),
            phone: field(&self.phone),
            timeline: field(&self.timeline),
            budget: field(&self.budget),
            notes: field(&self.notes),
        }
    }
}

#[derive(Debug)]
pub struct OpenForm {
    slug: String,
    definition: ServiceDefinition,
    client_info: ClientInfoDraft,
    drafts: Vec<ResponseDraft>,
}

#[derive(Debug, Default)]
enum ModalState {
    #[default]
    Closed,
    Open(OpenForm),
}

/// Long-lived controller for the single shared request modal.
#[derive(Debug, Default)]
pub struct ModalFormController {
    state: ModalState,
}

impl ModalFormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for `slug`, rebuilding the question area from the
    /// catalog definition. Opening while already open behaves as
    /// close-then-open: previous drafts never leak into the new form.
    pub fn open(&mut self, catalog: &ServiceCatalog, slug: &str) {
        let definition = catalog.lookup(slug).clone();
        let drafts = definition
            .questions
            .iter()
            .map(|question| match question.kind {
                QuestionKind::ShortText | QuestionKind::LongText => {
                    ResponseDraft::Text(String::new())
                }
                QuestionKind::SingleSelect => ResponseDraft::Choice(None),
                QuestionKind::MultiSelect => {
                    ResponseDraft::Checks(vec![false; question.options.len()])
                }
            })
            .collect();

        debug!(service = slug, questions = definition.questions.len(), "request modal opened");
        self.state = ModalState::Open(OpenForm {
            slug: slug.to_string(),
            definition,
            client_info: ClientInfoDraft::default(),
            drafts,
        });
    }

    /// Discard all entered values and hide the modal. No-op while closed.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn service_slug(&self) -> Option<&str> {
        self.form().map(|form| form.slug.as_str())
    }

    pub fn title(&self) -> Option<&str> {
        self.form().map(|form| form.definition.title.as_str())
    }

    pub fn definition(&self) -> Option<&ServiceDefinition> {
        self.form().map(|form| &form.definition)
    }

    pub fn question_count(&self) -> usize {
        self.form().map_or(0, |form| form.drafts.len())
    }

    pub fn drafts(&self) -> &[ResponseDraft] {
        self.form().map_or(&[], |form| form.drafts.as_slice())
    }

    pub fn client_info_mut(&mut self) -> Option<&mut ClientInfoDraft> {
        self.form_mut().map(|form| &mut form.client_info)
    }

    /// Text buffer for a short/long-text question, for direct widget binding.
    pub fn text_mut(&mut self, question: usize) -> Option<&mut String> {
        match self.form_mut()?.drafts.get_mut(question)? {
            ResponseDraft::Text(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn selected(&self, question: usize) -> Option<&str> {
        match self.form()?.drafts.get(question)? {
            ResponseDraft::Choice(choice) => choice.as_deref(),
            _ => None,
        }
    }

    /// Pick an option of a single-select question.
    pub fn select(&mut self, question: usize, value: &str) {
        if let Some(ResponseDraft::Choice(choice)) =
            self.form_mut().and_then(|form| form.drafts.get_mut(question))
        {
            *choice = Some(value.to_string());
        }
    }

    pub fn is_checked(&self, question: usize, option: usize) -> bool {
        match self.form().and_then(|form| form.drafts.get(question)) {
            Some(ResponseDraft::Checks(checks)) => checks.get(option).copied().unwrap_or(false),
            _ => false,
        }
    }

    /// Flip one option of a multi-select question; every other option keeps
    /// its state.
    pub fn toggle_option(&mut self, question: usize, option: usize) {
        if let Some(ResponseDraft::Checks(checks)) =
            self.form_mut().and_then(|form| form.drafts.get_mut(question))
        {
            if let Some(flag) = checks.get_mut(option) {
                *flag = !*flag;
            }
        }
    }

    /// Read every control, build the payload, and close the modal. Refused
    /// with the first unmet required question; the form stays open and keeps
    /// its drafts in that case.
    pub fn submit(&mut self) -> Result<SubmissionPayload, SubmitBlocked> {
        let form = match &self.state {
            ModalState::Open(form) => form,
            ModalState::Closed => return Err(SubmitBlocked::NotOpen),
        };

        if let Some((index, question)) = form
            .definition
            .questions
            .iter()
            .enumerate()
            .find(|(index, question)| question.required && draft_is_empty(&form.drafts[*index]))
        {
            return Err(SubmitBlocked::MissingRequired {
                index,
                prompt: question.prompt.clone(),
            });
        }

        let mut responses = BTreeMap::new();
        for (index, question) in form.definition.questions.iter().enumerate() {
            let value = match (&form.drafts[index], question.kind) {
                (ResponseDraft::Text(buffer), QuestionKind::ShortText) => {
                    ResponseValue::Text(buffer.trim().to_string())
                }
                (ResponseDraft::Text(buffer), _) => ResponseValue::Text(buffer.clone()),
                (ResponseDraft::Choice(choice), _) => {
                    ResponseValue::Text(choice.clone().unwrap_or_default())
                }
                (ResponseDraft::Checks(checks), _) => ResponseValue::Selections(
                    question
                        .options
                        .iter()
                        .zip(checks)
                        .filter(|(_, checked)| **checked)
                        .map(|(option, _)| option.value.clone())
                        .collect(),
                ),
            };
            responses.insert(index, value);
        }

        let payload = SubmissionPayload {
            service: form.slug.clone(),
            client_info: form.client_info.to_client_info(),
            responses,
        };

        debug!(service = %payload.service, "request modal submitted");
        self.state = ModalState::Closed;
        Ok(payload)
    }

    fn form(&self) -> Option<&OpenForm> {
        match &self.state {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut OpenForm> {
        match &mut self.state {
            ModalState::Open(form) => Some(form),
            ModalState::Closed => None,
        }
    }
}

fn draft_is_empty(draft: &ResponseDraft) -> bool {
    match draft {
        ResponseDraft::Text(buffer) => buffer.trim().is_empty(),
        ResponseDraft::Choice(choice) => {
            choice.as_deref().map_or(true, |value| value.is_empty())
        }
        ResponseDraft::Checks(checks) => !checks.iter().any(|checked| *checked),
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
