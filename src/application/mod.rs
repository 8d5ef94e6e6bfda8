// src/application/mod.rs
pub mod note_store;
pub mod repository;
pub mod settings;
pub mod view_model;

pub use note_store::NoteStore;
pub use repository::{LiveNotes, NoteRepository};
pub use settings::{LanguageChoice, LanguageSettings, PreferenceStore};
pub use view_model::{EditingMode, NoteViewModel};
