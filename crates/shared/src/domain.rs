use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    LongText,
    SingleSelect,
    MultiSelect,
}

impl QuestionKind {
    pub fn has_options(self) -> bool {
        matches!(self, Self::SingleSelect | Self::MultiSelect)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

impl QuestionOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub prompt: String,
    pub kind: QuestionKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Non-empty exactly when `kind.has_options()`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
}

impl QuestionDefinition {
    pub fn short_text(prompt: impl Into<String>) -> Self {
        Self::of_kind(prompt, QuestionKind::ShortText)
    }

    pub fn long_text(prompt: impl Into<String>) -> Self {
        Self::of_kind(prompt, QuestionKind::LongText)
    }

    pub fn single_select(prompt: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        let mut question = Self::of_kind(prompt, QuestionKind::SingleSelect);
        question.options = options;
        question
    }

    pub fn multi_select(prompt: impl Into<String>, options: Vec<QuestionOption>) -> Self {
        let mut question = Self::of_kind(prompt, QuestionKind::MultiSelect);
        question.options = options;
        question
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn of_kind(prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            prompt: prompt.into(),
            kind,
            required: false,
            placeholder: None,
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub title: String,
    pub questions: Vec<QuestionDefinition>,
}
