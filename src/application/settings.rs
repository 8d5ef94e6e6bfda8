// src/application/settings.rs
use tracing::{debug, info, warn};

use crate::constants::LANGUAGE_PREFERENCE_KEY;
use crate::domain::{DomainError, Language};

/// Key-value store for user preferences
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn put_string(&mut self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// One row of the language picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageChoice {
    pub language: Language,
    pub selected: bool,
}

pub struct LanguageSettings<P: PreferenceStore> {
    preferences: P,
}

impl<P: PreferenceStore> LanguageSettings<P> {
    pub fn new(preferences: P) -> Self {
        Self { preferences }
    }

    /// Stored UI language, falling back to the default on missing or unknown codes
    pub fn current(&self) -> Language {
        match self.preferences.get_string(LANGUAGE_PREFERENCE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|_| {
                warn!(%code, "Ignoring unknown stored language");
                Language::default()
            }),
            None => Language::default(),
        }
    }

    pub fn choices(&self) -> Vec<LanguageChoice> {
        let current = self.current();
        Language::ALL
            .into_iter()
            .map(|language| LanguageChoice {
                language,
                selected: language == current,
            })
            .collect()
    }

    /// Persist a new UI language. Returns `false` when nothing changed.
    pub fn select(&mut self, code: &str) -> Result<bool, DomainError> {
        let language = Language::from_code(code)?;
        if language == self.current() {
            debug!(%language, "Language already selected");
            return Ok(false);
        }
        self.preferences
            .put_string(LANGUAGE_PREFERENCE_KEY, language.code())?;
        info!(%language, "Switched language");
        Ok(true)
    }

    pub fn into_inner(self) -> P {
        self.preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences {
        values: HashMap<String, String>,
        writes: usize,
    }

    impl PreferenceStore for MemoryPreferences {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn put_string(&mut self, key: &str, value: &str) -> Result<(), DomainError> {
            self.writes += 1;
            self.values.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn given_empty_store_when_reading_then_defaults_to_russian() {
        let settings = LanguageSettings::new(MemoryPreferences::default());

        assert_eq!(settings.current(), Language::Russian);
    }

    #[test]
    fn given_garbage_stored_when_reading_then_defaults_to_russian() {
        let mut prefs = MemoryPreferences::default();
        prefs
            .values
            .insert(LANGUAGE_PREFERENCE_KEY.to_string(), "klingon".to_string());
        let settings = LanguageSettings::new(prefs);

        assert_eq!(settings.current(), Language::Russian);
    }

    #[test]
    fn given_new_language_when_selecting_then_persists_code() {
        // Arrange
        let mut settings = LanguageSettings::new(MemoryPreferences::default());

        // Act
        let changed = settings.select("fr").expect("Select should succeed");

        // Assert
        assert!(changed);
        assert_eq!(settings.current(), Language::French);
        let prefs = settings.into_inner();
        assert_eq!(prefs.values.get(LANGUAGE_PREFERENCE_KEY).map(String::as_str), Some("fr"));
    }

    #[test]
    fn given_current_language_when_selecting_then_no_write() {
        let mut settings = LanguageSettings::new(MemoryPreferences::default());

        let changed = settings.select("ru").expect("Select should succeed");

        assert!(!changed);
        assert_eq!(settings.into_inner().writes, 0);
    }

    #[test]
    fn given_unknown_code_when_selecting_then_rejected() {
        let mut settings = LanguageSettings::new(MemoryPreferences::default());

        let result = settings.select("xx");

        assert_eq!(result, Err(DomainError::UnsupportedLanguage("xx".to_string())));
    }

    #[test]
    fn given_choices_when_listing_then_exactly_one_selected() {
        let mut settings = LanguageSettings::new(MemoryPreferences::default());
        settings.select("zh").unwrap();

        let choices = settings.choices();

        assert_eq!(choices.len(), Language::ALL.len());
        let selected: Vec<_> = choices.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].language, Language::Chinese);
    }
}
