// src/util/testing.rs

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NoteColor};

/// Fixed instant test notes are dated from
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 0)
        .single()
        .expect("Valid fixed test timestamp")
}

/// Unsaved note titled `title`, dated `minutes` after [`base_time`]
pub fn note_titled(title: &str, minutes: i64) -> Note {
    Note {
        id: 0,
        title: title.to_string(),
        body: format!("Body of {title}"),
        timestamp: base_time() + Duration::minutes(minutes),
        color: NoteColor::default(),
        image: None,
        web_link: None,
    }
}

/// In-memory note store for testing use cases that depend on NoteStore
///
/// Mirrors the ordering and matching rules of the SQLite store so tests
/// of the repository and view-model can run without a database.
///
/// # Examples
///
/// ```
/// use notekeep::application::NoteStore;
/// use notekeep::util::testing::{note_titled, MockNoteStore};
///
/// let mut store = MockNoteStore::builder()
///     .with_note(note_titled("Groceries", 0))
///     .build();
/// assert_eq!(store.list_notes().unwrap().len(), 1);
/// ```
pub struct MockNoteStore {
    notes: BTreeMap<i64, Note>,
    next_id: i64,
    fail_writes: bool,
}

impl MockNoteStore {
    pub fn builder() -> MockNoteStoreBuilder {
        MockNoteStoreBuilder::new()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::StorageError("disk I/O error".to_string()));
        }
        Ok(())
    }

    fn sorted(mut notes: Vec<Note>) -> Vec<Note> {
        notes.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        notes
    }
}

impl NoteStore for MockNoteStore {
    fn insert_note(&mut self, note: &Note) -> Result<i64, DomainError> {
        self.check_writable()?;
        let id = self.next_id;
        self.next_id += 1;
        self.notes.insert(id, Note { id, ..note.clone() });
        Ok(id)
    }

    fn update_note(&mut self, note: &Note) -> Result<(), DomainError> {
        self.check_writable()?;
        match self.notes.get_mut(&note.id) {
            Some(stored) => {
                *stored = note.clone();
                Ok(())
            }
            None => Err(DomainError::NoteNotFound(note.id)),
        }
    }

    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        self.check_writable()?;
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.notes
            .get(&id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(Self::sorted(self.notes.values().cloned().collect()))
    }

    fn search_notes(&mut self, pattern: &str) -> Result<Vec<Note>, DomainError> {
        let needle = pattern.to_lowercase();
        Ok(Self::sorted(
            self.notes
                .values()
                .filter(|n| {
                    n.title.to_lowercase().contains(&needle)
                        || n.body.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect(),
        ))
    }

    fn find_by_title(&mut self, title: &str) -> Result<Vec<Note>, DomainError> {
        let wanted = title.to_lowercase();
        Ok(Self::sorted(
            self.notes
                .values()
                .filter(|n| n.title.to_lowercase() == wanted)
                .cloned()
                .collect(),
        ))
    }
}

/// Builder for MockNoteStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteStoreBuilder {
    notes: Vec<Note>,
    fail_writes: bool,
}

impl MockNoteStoreBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            fail_writes: false,
        }
    }

    /// Seed a note; it gets the next free id regardless of `note.id`
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every insert, update and delete fail with a storage error
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn build(self) -> MockNoteStore {
        let mut notes = BTreeMap::new();
        for (index, note) in self.notes.into_iter().enumerate() {
            let id = index as i64 + 1;
            notes.insert(id, Note { id, ..note });
        }
        MockNoteStore {
            next_id: notes.len() as i64 + 1,
            notes,
            fail_writes: self.fail_writes,
        }
    }
}

impl Default for MockNoteStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["rusqlite", "tokio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_seeded_notes_when_building_then_ids_assigned_in_order() {
        let mut mock = MockNoteStore::builder()
            .with_note(note_titled("First", 0))
            .with_note(note_titled("Second", 1))
            .build();

        assert_eq!(mock.get_note(1).unwrap().title, "First");
        assert_eq!(mock.get_note(2).unwrap().title, "Second");
        assert_eq!(mock.insert_note(&note_titled("Third", 2)).unwrap(), 3);
    }

    #[test]
    fn given_notes_when_listing_then_most_recent_first() {
        let mut mock = MockNoteStore::builder()
            .with_note(note_titled("Old", 0))
            .with_note(note_titled("New", 60))
            .build();

        let titles: Vec<_> = mock.list_notes().unwrap().into_iter().map(|n| n.title).collect();

        assert_eq!(titles, vec!["New", "Old"]);
    }

    #[test]
    fn given_failing_writes_when_inserting_then_returns_storage_error() {
        let mut mock = MockNoteStore::builder().with_failing_writes().build();

        let result = mock.insert_note(&note_titled("Doomed", 0));

        assert!(matches!(result, Err(DomainError::StorageError(_))));
    }

    #[test]
    fn given_no_note_when_deleting_then_returns_not_found() {
        let mut mock = MockNoteStore::builder().build();

        assert_eq!(mock.delete_note(7), Err(DomainError::NoteNotFound(7)));
    }
}
