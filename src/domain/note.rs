// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::NoteColor;

/// Id carried by a note that has not been persisted yet
pub const UNSAVED_ID: i64 = 0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub color: NoteColor,
    pub image: Option<String>,
    pub web_link: Option<String>,
}

impl Note {
    /// Fresh in-memory note for the "new note" screen
    pub fn draft() -> Self {
        Self {
            id: UNSAVED_ID,
            title: String::new(),
            body: String::new(),
            timestamp: Utc::now(),
            color: NoteColor::default(),
            image: None,
            web_link: None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_ID
    }
}
