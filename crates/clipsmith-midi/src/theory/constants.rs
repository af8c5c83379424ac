//! Constants for the music-theory utilities.

/// Pitch returned when a note name cannot be parsed (the octave-3 root).
pub const DEFAULT_PITCH: u8 = 60;

/// Sharp-spelled names for the 12 pitch classes. Flat inputs normalize to
/// these on the way back out.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offsets for note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(super) const SEMITONE_MAP: [(char, i8); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Scale intervals for the major mode.
pub const MAJOR_INTERVALS: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Scale intervals for the natural minor mode.
pub const MINOR_INTERVALS: [i32; 7] = [0, 2, 3, 5, 7, 8, 10];
