// src/constants.rs
//
// Application-wide constants.

/// Directory name used under the platform data and config directories.
pub const APP_DIR_NAME: &str = "notekeep";

/// File name of the note database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "notes.db";

/// File name of the TOML config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the key-value preference store inside the config directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.toml";

/// Preference key holding the selected UI language code.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Date format shown on the note card, e.g. "Monday, 14 October 2024 09:30".
///
/// Used in: `ports/html.rs`, `lib.rs`
pub const DEFAULT_DATETIME_FORMAT: &str = "%A, %d %B %Y %H:%M";

/// Delay in milliseconds after spawning the browser before the temp dir may go away.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
