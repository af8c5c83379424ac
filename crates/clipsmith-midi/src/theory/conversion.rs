//! Note-name parsing and formatting.

use super::constants::{DEFAULT_PITCH, NOTE_NAMES, SEMITONE_MAP};

/// Convert a note name (e.g. "C3", "F#2", "Bb-1") to a numeric pitch.
///
/// The pitch is `(octave + 2) * 12 + semitone`, clamped into 0..=127, so
/// "C3" is 60. Anything that does not parse returns [`DEFAULT_PITCH`]
/// instead of an error.
///
/// # Examples
/// ```
/// use clipsmith_midi::theory::name_to_pitch;
///
/// assert_eq!(name_to_pitch("C3"), 60);
/// assert_eq!(name_to_pitch("A2"), 57);
/// assert_eq!(name_to_pitch("not a note"), 60);
/// ```
pub fn name_to_pitch(name: &str) -> u8 {
    parse_note_name(name.trim())
        .map(|(semitone, octave)| ((octave + 2) * 12 + semitone).clamp(0, 127) as u8)
        .unwrap_or(DEFAULT_PITCH)
}

/// Parse a note name into semitone offset and octave.
fn parse_note_name(name: &str) -> Option<(i32, i32)> {
    let chars: Vec<char> = name.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let letter = chars[0].to_ascii_uppercase();
    let semitone = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|(_, s)| *s as i32)?;

    let mut idx = 1;

    // Accidental: '#' always, 'b'/'B' only when an octave digit (or a
    // negative octave) follows, so "B2" stays the letter B.
    let semitone = if idx < chars.len() {
        match chars[idx] {
            '#' => {
                idx += 1;
                semitone + 1
            }
            'b' | 'B'
                if idx + 1 < chars.len()
                    && (chars[idx + 1].is_ascii_digit() || chars[idx + 1] == '-') =>
            {
                idx += 1;
                semitone - 1
            }
            _ => semitone,
        }
    } else {
        semitone
    };

    let octave_str: String = chars[idx..].iter().collect();
    let octave: i32 = octave_str.parse().ok()?;

    Some((semitone, octave))
}

/// Format a numeric pitch as a note name using the sharp spelling, with
/// octave `pitch / 12 - 2` (the inverse of [`name_to_pitch`]).
///
/// Round-trips are pitch-preserving but not spelling-preserving: "Db2"
/// comes back as "C#2".
pub fn pitch_to_name(pitch: u8) -> String {
    let pitch = pitch.min(127);
    let octave = (pitch / 12) as i32 - 2;
    format!("{}{}", NOTE_NAMES[(pitch % 12) as usize], octave)
}
