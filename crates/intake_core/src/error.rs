use thiserror::Error;

/// Why a submit attempt was refused. The modal stays open and no payload is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("no request form is open")]
    NotOpen,
    #[error("'{prompt}' is required")]
    MissingRequired { index: usize, prompt: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("please fill in all fields")]
pub struct ContactIncomplete;
