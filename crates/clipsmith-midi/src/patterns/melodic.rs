//! Melodic and harmonic stem generators: pads, leads, arps, fx, textures.

use super::velocity;
use crate::clip::Note;
use crate::theory::{scale_degree, KeyDescriptor};

/// Triad roots for the pad progression, the degree equivalents of
/// I–IV–V–vi.
const PAD_PROGRESSION: [i32; 4] = [0, 3, 4, 5];

/// One sustained triad per bar across four bars, odd bars slightly
/// quieter.
pub(crate) fn pad(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    let mut notes = Vec::new();
    for (bar, &degree) in PAD_PROGRESSION.iter().enumerate() {
        let base = bar as f64 * 4.0;
        let vel = velocity(intensity, 58, 92) - if bar % 2 == 1 { 8 } else { 0 };
        for chord_tone in 0..3 {
            let pitch =
                scale_degree(key.root_semitone, key.is_minor, degree + 2 * chord_tone, 2) as i32;
            notes.push(Note::new(pitch, base, 3.9, vel));
        }
    }
    notes
}

/// Two-bar phrase: a stepwise climb to the octave, then a fall back to
/// the root. (offset, degree, duration) per note.
const LEAD_PHRASE: [(f64, i32, f64); 11] = [
    (0.0, 0, 0.5),
    (0.5, 2, 0.5),
    (1.0, 4, 0.5),
    (1.5, 5, 0.5),
    (2.0, 7, 1.0),
    (3.0, 6, 0.75),
    (4.0, 7, 0.5),
    (4.5, 5, 0.5),
    (5.0, 4, 1.0),
    (6.0, 2, 0.75),
    (7.0, 0, 1.0),
];

/// Fixed melodic phrase with the two phrase peaks accented.
pub(crate) fn lead(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    LEAD_PHRASE
        .iter()
        .map(|&(off, degree, dur)| {
            let pitch = scale_degree(key.root_semitone, key.is_minor, degree, 3) as i32;
            let accent = if degree == 7 { 8 } else { 0 };
            Note::new(pitch, off, dur, velocity(intensity, 66, 104) + accent)
        })
        .collect()
}

/// Chord-tone cycle for the arpeggio: root, 3rd, 5th, octave.
const ARP_CYCLE: [i32; 4] = [0, 2, 4, 7];

/// 32-step 16th-note arpeggio with the root step accented.
pub(crate) fn arp(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    (0..32usize)
        .map(|step| {
            let degree = ARP_CYCLE[step % ARP_CYCLE.len()];
            let accent = if step % ARP_CYCLE.len() == 0 { 14 } else { 0 };
            let pitch = scale_degree(key.root_semitone, key.is_minor, degree, 2) as i32;
            Note::new(
                pitch,
                step as f64 * 0.25,
                0.22,
                velocity(intensity, 54, 92) + accent,
            )
        })
        .collect()
}

/// Sparse long hits at irregular offsets: (offset, degree, duration).
const FX_HITS: [(f64, i32, f64); 4] = [
    (0.0, 0, 2.5),
    (2.5, 4, 2.0),
    (4.25, 0, 2.0),
    (6.5, 4, 1.5),
];

/// Root and fifth an octave up, fading across the clip.
pub(crate) fn fx(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    FX_HITS
        .iter()
        .enumerate()
        .map(|(i, &(off, degree, dur))| {
            let pitch = scale_degree(key.root_semitone, key.is_minor, degree, 4) as i32;
            Note::new(pitch, off, dur, velocity(intensity, 64, 98) - 10 * i as i32)
        })
        .collect()
}

/// Root-and-fifth drone sustained across nearly the whole four bars.
pub(crate) fn texture(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    let vel = velocity(intensity, 44, 76);
    vec![
        Note::new(
            scale_degree(key.root_semitone, key.is_minor, 0, 2) as i32,
            0.0,
            15.5,
            vel,
        ),
        Note::new(
            scale_degree(key.root_semitone, key.is_minor, 4, 2) as i32,
            0.0,
            15.5,
            vel - 6,
        ),
    ]
}
