pub mod config;
pub mod preferences;
pub mod renderer;
pub mod sqlite;

pub use config::Config;
pub use preferences::TomlPreferences;
pub use renderer::ContentRenderer;
pub use sqlite::SqliteNoteStore;
