//! Tests for note conversion, key parsing, and scale degrees.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_name_to_pitch_basic() {
    assert_eq!(name_to_pitch("C3"), 60);
    assert_eq!(name_to_pitch("C#3"), 61);
    assert_eq!(name_to_pitch("D3"), 62);
    assert_eq!(name_to_pitch("A2"), 57);
    assert_eq!(name_to_pitch("C-2"), 0);
    assert_eq!(name_to_pitch("G8"), 127);
}

#[test]
fn test_name_to_pitch_flats_are_enharmonic() {
    assert_eq!(name_to_pitch("Bb2"), name_to_pitch("A#2"));
    assert_eq!(name_to_pitch("Db3"), name_to_pitch("C#3"));
    assert_eq!(name_to_pitch("Eb1"), name_to_pitch("D#1"));
}

#[test]
fn test_name_to_pitch_case_and_whitespace() {
    assert_eq!(name_to_pitch(" c3 "), 60);
    assert_eq!(name_to_pitch("f#2"), name_to_pitch("F#2"));
}

#[test]
fn test_name_to_pitch_defaults_on_garbage() {
    assert_eq!(name_to_pitch(""), DEFAULT_PITCH);
    assert_eq!(name_to_pitch("H4"), DEFAULT_PITCH);
    assert_eq!(name_to_pitch("C"), DEFAULT_PITCH);
    assert_eq!(name_to_pitch("#3"), DEFAULT_PITCH);
    assert_eq!(name_to_pitch("Cx3"), DEFAULT_PITCH);
}

#[test]
fn test_name_to_pitch_clamps_extremes() {
    assert_eq!(name_to_pitch("C-5"), 0);
    assert_eq!(name_to_pitch("B9"), 127);
}

#[test]
fn test_pitch_to_name() {
    assert_eq!(pitch_to_name(60), "C3");
    assert_eq!(pitch_to_name(61), "C#3");
    assert_eq!(pitch_to_name(0), "C-2");
    assert_eq!(pitch_to_name(127), "G8");
}

#[test]
fn test_pitch_round_trip_full_range() {
    for pitch in 0..=127u8 {
        assert_eq!(name_to_pitch(&pitch_to_name(pitch)), pitch, "pitch {}", pitch);
    }
}

#[test]
fn test_parse_key_modes() {
    assert_eq!(
        parse_key("A major"),
        KeyDescriptor {
            root_semitone: 9,
            is_minor: false
        }
    );
    assert_eq!(
        parse_key("F minor"),
        KeyDescriptor {
            root_semitone: 5,
            is_minor: true
        }
    );
    assert_eq!(parse_key("C maj").is_minor, false);
    assert_eq!(parse_key("C MAJOR").is_minor, false);
    assert_eq!(parse_key("C min").is_minor, true);
    // A mode word that is not "maj"-ish means minor.
    assert_eq!(parse_key("C mixolydian").is_minor, true);
}

#[test]
fn test_parse_key_accidentals() {
    assert_eq!(parse_key("Bb").root_semitone, 10);
    assert_eq!(parse_key("F#").root_semitone, 6);
    assert_eq!(parse_key("Cb").root_semitone, 11);
    assert_eq!(parse_key("B# major").root_semitone, 0);
}

#[test]
fn test_parse_key_defaults() {
    assert_eq!(parse_key(""), KeyDescriptor::C_MINOR);
    assert_eq!(parse_key("   "), KeyDescriptor::C_MINOR);
    assert_eq!(parse_key("7th street"), KeyDescriptor::C_MINOR);
}

#[test]
fn test_parse_key_missing_mode_is_minor() {
    assert!(parse_key("G").is_minor);
    assert!(parse_key("Eb").is_minor);
}

#[test]
fn test_scale_degree_minor() {
    // C minor at octave 1: C, D, Eb, F, G, Ab, Bb
    let pitches: Vec<u8> = (0..7).map(|d| scale_degree(0, true, d, 1)).collect();
    assert_eq!(pitches, vec![36, 38, 39, 41, 43, 44, 46]);
}

#[test]
fn test_scale_degree_major() {
    // C major at octave 1: C, D, E, F, G, A, B
    let pitches: Vec<u8> = (0..7).map(|d| scale_degree(0, false, d, 1)).collect();
    assert_eq!(pitches, vec![36, 38, 40, 41, 43, 45, 47]);
}

#[test]
fn test_scale_degree_octave_walking() {
    assert_eq!(scale_degree(0, true, 7, 1), 48);
    assert_eq!(scale_degree(0, true, 9, 1), scale_degree(0, true, 2, 2));
    assert_eq!(scale_degree(0, true, 14, 1), 60);
}

#[test]
fn test_scale_degree_root_offset() {
    // F minor: degree 0 at octave 1 is F1.
    assert_eq!(scale_degree(5, true, 0, 1), 41);
    // Fifth of F minor is C.
    assert_eq!(scale_degree(5, true, 4, 1), 48);
}

#[test]
fn test_scale_degree_clamps_high_registers() {
    assert_eq!(scale_degree(11, false, 48, 8), 127);
}
