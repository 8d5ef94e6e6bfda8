// src/infrastructure/preferences.rs
use crate::application::PreferenceStore;
use crate::domain::DomainError;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Flat string preferences kept in a TOML file
#[derive(Debug)]
pub struct TomlPreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl TomlPreferences {
    /// Load preferences from `path`; a missing file is an empty store
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences {}", path.display()))?
        } else {
            debug!(?path, "No preferences file yet");
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create preferences directory")?;
        }
        let content =
            toml::to_string_pretty(values).context("Failed to serialize preferences")?;
        fs::write(&self.path, content).context("Failed to write preferences file")?;
        Ok(())
    }
}

impl PreferenceStore for TomlPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
        // Memory only follows the file once the write went through
        let mut values = self.values.clone();
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
            .map_err(|e| DomainError::PreferenceError(format!("{e:#}")))?;
        self.values = values;
        Ok(())
    }
}
