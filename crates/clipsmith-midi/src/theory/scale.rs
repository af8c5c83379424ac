//! Diatonic scale-degree lookup.

use super::constants::{MAJOR_INTERVALS, MINOR_INTERVALS};

/// Resolve a zero-indexed scale degree to a numeric pitch.
///
/// The interval table is indexed by `degree % 7`; degrees of 7 and above
/// walk into higher registers, adding `degree / 7` octaves on top of
/// `octave_base`. `octave_base` uses the same convention as
/// [`super::name_to_pitch`]: the pitch of degree 0 at octave 1 in C is
/// `(1 + 2) * 12 = 36`.
///
/// # Examples
/// ```
/// use clipsmith_midi::theory::scale_degree;
///
/// // C minor, root, octave 1
/// assert_eq!(scale_degree(0, true, 0, 1), 36);
/// // C minor third (Eb)
/// assert_eq!(scale_degree(0, true, 2, 1), 39);
/// // degree 7 is the root one octave up
/// assert_eq!(scale_degree(0, true, 7, 1), 48);
/// ```
pub fn scale_degree(root_semitone: u8, is_minor: bool, degree: i32, octave_base: i32) -> u8 {
    let intervals = if is_minor {
        &MINOR_INTERVALS
    } else {
        &MAJOR_INTERVALS
    };
    let degree = degree.max(0);
    let interval = intervals[(degree % 7) as usize];
    let octave = octave_base + degree / 7;
    let pitch = (octave + 2) * 12 + root_semitone as i32 + interval;
    pitch.clamp(0, 127) as u8
}
