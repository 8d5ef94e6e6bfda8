// src/domain/color.rs
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::DomainError;

/// ARGB color of the note's indicator stripe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteColor(pub u32);

impl NoteColor {
    pub const BLUE: NoteColor = NoteColor(0xFF21_96F3);

    pub fn argb(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// `#RRGGBB` without alpha, as used in CSS
    pub fn to_rgb_hex(self) -> String {
        format!("#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl Default for NoteColor {
    fn default() -> Self {
        Self::BLUE
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "{}", self.to_rgb_hex())
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

impl FromStr for NoteColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || DomainError::InvalidColor(s.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(NoteColor(0xFF00_0000 | value)),
            8 => Ok(NoteColor(value)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for NoteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
