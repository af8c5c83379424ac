//! Bass-stem generators: sub bass, mid bass, bassline.

use super::velocity;
use crate::clip::Note;
use crate::theory::{scale_degree, KeyDescriptor};

/// One sustained root per bar, starting a hair after the downbeat so a
/// sidechained mix still breathes, and nearly filling the bar.
pub(crate) fn sub_bass(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    let root = scale_degree(key.root_semitone, key.is_minor, 0, 0) as i32;
    (0..2u32)
        .map(|bar| {
            Note::new(
                root,
                bar as f64 * 4.0 + 0.25,
                3.7,
                velocity(intensity, 82, 112),
            )
        })
        .collect()
}

/// Per-bar step table for the mid bass: (offset, degree, duration).
const MID_BASS_STEPS: [(f64, i32, f64); 4] =
    [(0.0, 0, 1.0), (1.5, 4, 0.75), (2.5, 0, 0.75), (3.5, 4, 0.4)];

/// Root-then-fifth figure per bar with decreasing velocity.
pub(crate) fn mid_bass(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    let mut notes = Vec::new();
    for bar in 0..2u32 {
        let base = bar as f64 * 4.0;
        for (i, &(off, degree, dur)) in MID_BASS_STEPS.iter().enumerate() {
            let pitch = scale_degree(key.root_semitone, key.is_minor, degree, 1) as i32;
            notes.push(Note::new(
                pitch,
                base + off,
                dur,
                velocity(intensity, 76, 110) - 8 * i as i32,
            ));
        }
    }
    notes
}

/// Six-note groove per bar over root/3rd/4th/5th/7th degrees.
const BASS_GROOVE: [(f64, i32, f64); 6] = [
    (0.0, 0, 0.5),
    (0.75, 0, 0.5),
    (1.5, 2, 0.25),
    (2.0, 3, 0.5),
    (2.75, 4, 0.5),
    (3.5, 6, 0.375),
];

/// Three-note walk per bar with longer values, for low intensities.
const BASS_SIMPLE: [(f64, i32, f64); 3] = [(0.0, 0, 1.25), (1.5, 4, 1.25), (3.0, 2, 0.875)];

/// Groove bassline above intensity 60, simple walk below.
pub(crate) fn bassline(intensity: u8, key: &KeyDescriptor) -> Vec<Note> {
    let steps: &[(f64, i32, f64)] = if intensity >= 60 {
        &BASS_GROOVE
    } else {
        &BASS_SIMPLE
    };

    let mut notes = Vec::new();
    for bar in 0..2u32 {
        let base = bar as f64 * 4.0;
        for (i, &(off, degree, dur)) in steps.iter().enumerate() {
            let pitch = scale_degree(key.root_semitone, key.is_minor, degree, 1) as i32;
            let off_accent = if i % 2 == 1 { -10 } else { 0 };
            notes.push(Note::new(
                pitch,
                base + off,
                dur,
                velocity(intensity, 72, 108) + off_accent,
            ));
        }
    }
    notes
}
