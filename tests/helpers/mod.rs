use anyhow::{Context, Result};
use chrono::{Duration, TimeZone, Utc};
use notekeep::domain::{Note, NoteColor};
use notekeep::infrastructure::SqliteNoteStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary note database and config
#[allow(dead_code)]
pub struct TestDatabase {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
    pub config_path: PathBuf,
    pub preferences_path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    /// Create an empty workspace with a config pointing at it
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;

        let database_path = temp_dir.path().join("data/notes.db");
        let preferences_path = temp_dir.path().join("config/preferences.toml");
        let config_path = temp_dir.path().join("config.toml");

        let config = format!(
            "[storage]\ndatabase = {:?}\npreferences = {:?}\n",
            database_path.display().to_string(),
            preferences_path.display().to_string()
        );
        std::fs::write(&config_path, config).context("Failed to write test config")?;

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
            config_path,
            preferences_path,
        })
    }

    /// Open a store on this database
    pub fn open_store(&self) -> Result<SqliteNoteStore> {
        SqliteNoteStore::open(&self.database_path)
    }

    /// Open a store seeded with the sample notes
    pub fn seeded_store(&self) -> Result<SqliteNoteStore> {
        use notekeep::application::NoteStore;

        let mut store = self.open_store()?;
        for note in sample_notes::all() {
            store.insert_note(&note)?;
        }
        Ok(store)
    }
}

/// Known notes for seeding, oldest first
#[allow(dead_code)]
pub mod sample_notes {
    use super::*;

    pub const GROCERIES: &str = "Groceries";
    pub const TRIP: &str = "Trip to Kazan";
    pub const RECIPE: &str = "Борщ";

    fn dated(title: &str, body: &str, minutes: i64) -> Note {
        let base = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
            .single()
            .expect("Valid fixed timestamp");
        Note {
            id: 0,
            title: title.to_string(),
            body: body.to_string(),
            timestamp: base + Duration::minutes(minutes),
            color: NoteColor::default(),
            image: None,
            web_link: None,
        }
    }

    pub fn all() -> Vec<Note> {
        vec![
            dated(GROCERIES, "milk, bread, eggs", 0),
            dated(TRIP, "Train tickets and hotel", 30),
            dated(RECIPE, "Свёкла, капуста, картофель", 60),
        ]
    }
}
