// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("Note title can't be empty!")]
    EmptyTitle,
    #[error("A note titled '{0}' already exists")]
    DuplicateTitle(String),
    #[error("Enter URL")]
    EmptyUrl,
    #[error("Enter valid URL: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    ImageLoad(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("No note is being edited")]
    NoDraft,
    #[error("Only saved notes can be deleted")]
    DeleteUnavailable,
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Preference error: {0}")]
    PreferenceError(String),
}
