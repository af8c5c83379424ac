//! Key-string parsing.

use super::constants::SEMITONE_MAP;

/// A parsed key: root pitch class (0..=11) plus mode.
///
/// Derived once per generation and reused by every pitch computation in a
/// pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// Root pitch class, 0 = C .. 11 = B.
    pub root_semitone: u8,
    /// True for minor (the default mode).
    pub is_minor: bool,
}

impl KeyDescriptor {
    /// C minor, the fallback when a key string cannot be parsed.
    pub const C_MINOR: KeyDescriptor = KeyDescriptor {
        root_semitone: 0,
        is_minor: true,
    };
}

/// Parse a key string like "F minor", "A major", "Bb", or "c# min".
///
/// The root is a note letter with an optional accidental. The mode word is
/// matched case-insensitively; anything that does not start with "maj"
/// (including a missing mode word) is minor. A string without a leading
/// note letter falls back to C minor.
///
/// # Examples
/// ```
/// use clipsmith_midi::theory::{parse_key, KeyDescriptor};
///
/// assert_eq!(parse_key("A major"), KeyDescriptor { root_semitone: 9, is_minor: false });
/// assert_eq!(parse_key("Bb"), KeyDescriptor { root_semitone: 10, is_minor: true });
/// assert_eq!(parse_key(""), KeyDescriptor::C_MINOR);
/// ```
pub fn parse_key(text: &str) -> KeyDescriptor {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();

    let Some(&first) = bytes.first() else {
        return KeyDescriptor::C_MINOR;
    };
    let letter = (first as char).to_ascii_uppercase();
    let Some(semitone) = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s as i32)
    else {
        return KeyDescriptor::C_MINOR;
    };

    let mut idx = 1;
    let mut accidental = 0;
    if idx < bytes.len() {
        match bytes[idx] as char {
            '#' => {
                accidental = 1;
                idx += 1;
            }
            'b' | 'B' => {
                accidental = -1;
                idx += 1;
            }
            _ => {}
        }
    }

    let root_semitone = (semitone + accidental).rem_euclid(12) as u8;
    let mode = trimmed[idx..].trim().to_ascii_lowercase();
    let is_minor = !mode.starts_with("maj");

    KeyDescriptor {
        root_semitone,
        is_minor,
    }
}
