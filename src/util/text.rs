// src/util/text.rs
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::DEFAULT_DATETIME_FORMAT;

lazy_static! {
    // Optional scheme, optional user info, then a dotted host name, IPv4 or localhost,
    // optional port and an optional path/query/fragment tail.
    static ref WEB_URL_REGEX: Regex = Regex::new(
        r"(?ix)^
        (?:(?:https?|ftp|rtsp)://)?
        (?:[^\s:@/]+(?::[^\s@/]*)?@)?
        (?:
            (?:[a-z0-9\x{00A1}-\x{FFFF}](?:[a-z0-9\x{00A1}-\x{FFFF}-]{0,61}[a-z0-9\x{00A1}-\x{FFFF}])?\.)+
            [a-z\x{00A1}-\x{FFFF}]{2,63}
            | (?:\d{1,3}\.){3}\d{1,3}
            | localhost
        )
        (?::\d{1,5})?
        (?:[/?\#]\S*)?
        $"
    )
    .expect("Failed to compile web URL regex");
}

/// Check whether `url` looks like a web address a browser could open.
///
/// # Examples
///
/// ```
/// use notekeep::util::text::is_valid_web_url;
///
/// assert!(is_valid_web_url("https://example.com/a?b=c"));
/// assert!(!is_valid_web_url("not a url"));
/// ```
pub fn is_valid_web_url(url: &str) -> bool {
    WEB_URL_REGEX.is_match(url)
}

/// Extract the first non-empty line of a note body, trimmed.
///
/// # Examples
///
/// ```
/// use notekeep::util::text::extract_first_line;
///
/// assert_eq!(extract_first_line("\n  Buy milk \nand bread"), "Buy milk");
/// ```
pub fn extract_first_line(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Render `timestamp` in local time with a strftime pattern.
///
/// Patterns chrono cannot parse fall back to [`DEFAULT_DATETIME_FORMAT`].
pub fn format_local_datetime(timestamp: &DateTime<Utc>, pattern: &str) -> String {
    let pattern = if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        DEFAULT_DATETIME_FORMAT
    } else {
        pattern
    };
    timestamp.with_timezone(&Local).format(pattern).to_string()
}
