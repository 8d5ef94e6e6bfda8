// src/infrastructure/sqlite.rs
use crate::application::NoteStore;
use crate::domain::{DomainError, Note, NoteColor};
use anyhow::{Context, Result};
use chrono::DateTime;
use rusqlite::functions::FunctionFlags;
use rusqlite::types::{FromSqlError, Type};
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS notes (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        title      TEXT    NOT NULL,
        body       TEXT    NOT NULL DEFAULT '',
        timestamp  INTEGER NOT NULL,
        color      INTEGER NOT NULL,
        image_path TEXT,
        web_link   TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_notes_timestamp ON notes (timestamp DESC);
";

const NOTE_COLUMNS: &str = "id, title, body, timestamp, color, image_path, web_link";

/// SQLite-backed note store
pub struct SqliteNoteStore {
    conn: Connection,
}

impl SqliteNoteStore {
    pub fn open<P: AsRef<Path>>(database_path: P) -> Result<Self> {
        let path = PathBuf::from(database_path.as_ref());
        debug!(?path, "Opening note database");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open note database {}", path.display()))?;
        Self::init(&conn).context("Failed to initialize note database schema")?;

        info!(?path, "Opened note database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::init(&conn).context("Failed to initialize note database schema")?;
        Ok(Self { conn })
    }

    fn init(conn: &Connection) -> rusqlite::Result<()> {
        // SQLite's own lower() and LIKE only fold ASCII
        conn.create_scalar_function(
            "casefold",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|t| t.to_lowercase()))
            },
        )?;
        conn.execute_batch(SCHEMA)
    }

    fn query_notes(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Note>, DomainError> {
        let mut stmt = self.conn.prepare(sql).map_err(storage_error)?;
        let notes = stmt
            .query_map(params, note_from_row)
            .map_err(storage_error)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(storage_error)?;
        Ok(notes)
    }
}

fn storage_error(e: rusqlite::Error) -> DomainError {
    DomainError::StorageError(e.to_string())
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    let millis: i64 = row.get(3)?;
    let timestamp = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Integer,
            Box::new(FromSqlError::OutOfRange(millis)),
        )
    })?;
    let color: i64 = row.get(4)?;
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        timestamp,
        color: NoteColor(color as u32),
        image: row.get(5)?,
        web_link: row.get(6)?,
    })
}

impl NoteStore for SqliteNoteStore {
    #[instrument(level = "debug", skip(self, note), fields(title = %note.title))]
    fn insert_note(&mut self, note: &Note) -> Result<i64, DomainError> {
        self.conn
            .execute(
                "INSERT INTO notes (title, body, timestamp, color, image_path, web_link)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    note.title,
                    note.body,
                    note.timestamp.timestamp_millis(),
                    i64::from(note.color.argb()),
                    note.image,
                    note.web_link,
                ],
            )
            .map_err(storage_error)?;

        let id = self.conn.last_insert_rowid();
        debug!(note_id = id, "Inserted note");
        Ok(id)
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = note.id))]
    fn update_note(&mut self, note: &Note) -> Result<(), DomainError> {
        let changed = self
            .conn
            .execute(
                "UPDATE notes
                 SET title = ?1, body = ?2, timestamp = ?3, color = ?4, image_path = ?5, web_link = ?6
                 WHERE id = ?7",
                params![
                    note.title,
                    note.body,
                    note.timestamp.timestamp_millis(),
                    i64::from(note.color.argb()),
                    note.image,
                    note.web_link,
                    note.id,
                ],
            )
            .map_err(storage_error)?;

        if changed == 0 {
            return Err(DomainError::NoteNotFound(note.id));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: i64) -> Result<(), DomainError> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id])
            .map_err(storage_error)?;

        if changed == 0 {
            debug!(note_id = id, "Note not found for deletion");
            return Err(DomainError::NoteNotFound(id));
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.query_notes(
            &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
            params![id],
        )?
        .into_iter()
        .next()
        .ok_or(DomainError::NoteNotFound(id))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        self.query_notes(
            &format!("SELECT {NOTE_COLUMNS} FROM notes ORDER BY timestamp DESC, id DESC"),
            [],
        )
    }

    #[instrument(level = "debug", skip(self))]
    fn search_notes(&mut self, pattern: &str) -> Result<Vec<Note>, DomainError> {
        // instr() keeps % and _ literal, unlike LIKE
        self.query_notes(
            &format!(
                "SELECT {NOTE_COLUMNS} FROM notes
                 WHERE instr(casefold(title), ?1) > 0 OR instr(casefold(body), ?1) > 0
                 ORDER BY timestamp DESC, id DESC"
            ),
            params![pattern.to_lowercase()],
        )
    }

    #[instrument(level = "debug", skip(self))]
    fn find_by_title(&mut self, title: &str) -> Result<Vec<Note>, DomainError> {
        self.query_notes(
            &format!(
                "SELECT {NOTE_COLUMNS} FROM notes
                 WHERE casefold(title) = ?1
                 ORDER BY timestamp DESC, id DESC"
            ),
            params![title.to_lowercase()],
        )
    }
}
