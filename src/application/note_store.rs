// src/application/note_store.rs
use crate::domain::{DomainError, Note};

/// Persistence boundary for notes
pub trait NoteStore {
    /// Persist a new note and return the generated id.
    /// The id carried by `note` is ignored.
    fn insert_note(&mut self, note: &Note) -> Result<i64, DomainError>;

    /// Replace every field of the stored note with the same id
    fn update_note(&mut self, note: &Note) -> Result<(), DomainError>;

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError>;

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError>;

    /// All notes, most recent first
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Notes whose title or body contains `pattern`, ignoring case.
    /// An empty pattern matches every note.
    fn search_notes(&mut self, pattern: &str) -> Result<Vec<Note>, DomainError>;

    /// Notes whose title equals `title`, ignoring case
    fn find_by_title(&mut self, title: &str) -> Result<Vec<Note>, DomainError>;
}
