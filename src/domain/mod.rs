// src/domain/mod.rs
pub mod color;
pub mod error;
pub mod language;
pub mod note;

pub use color::NoteColor;
pub use error::DomainError;
pub use language::Language;
pub use note::Note;
