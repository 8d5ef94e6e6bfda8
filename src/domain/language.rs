// src/domain/language.rs
use std::fmt;

use super::DomainError;

/// UI languages offered on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    English,
    #[default]
    Russian,
    Arabic,
    Spanish,
    French,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Russian,
        Language::Arabic,
        Language::Spanish,
        Language::French,
        Language::Chinese,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Arabic => "ar",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Chinese => "zh",
        }
    }

    /// Name of the language in the language itself
    pub fn title(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Русский",
            Language::Arabic => "العربية",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Chinese => "中文",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Arabic => "Arabic",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Chinese => "Chinese",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DomainError::UnsupportedLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", Language::English)]
    #[case("ru", Language::Russian)]
    #[case("ar", Language::Arabic)]
    #[case("es", Language::Spanish)]
    #[case("FR", Language::French)]
    #[case(" zh ", Language::Chinese)]
    fn given_known_code_when_parsing_then_returns_language(
        #[case] code: &str,
        #[case] expected: Language,
    ) {
        assert_eq!(Language::from_code(code), Ok(expected));
    }

    #[test]
    fn given_unknown_code_when_parsing_then_returns_error() {
        assert_eq!(
            Language::from_code("de"),
            Err(DomainError::UnsupportedLanguage("de".to_string()))
        );
    }

    #[test]
    fn given_no_preference_when_defaulting_then_is_russian() {
        assert_eq!(Language::default().code(), "ru");
    }
}
