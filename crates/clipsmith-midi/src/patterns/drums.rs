//! Drum-stem generators: kick, snare/clap, hats, cymbals, percussion,
//! fills.

use rand::Rng;
use rand_pcg::Pcg32;

use super::{drum_map, stem_bars, velocity};
use crate::clip::Note;
use crate::stem::StemType;

/// Four-on-the-floor above intensity 60 (with 16th pickups from 85),
/// half-time kicks in the middle band, one sparse kick per bar below 30.
pub(crate) fn kick(intensity: u8) -> Vec<Note> {
    let bars = stem_bars(StemType::Kick, intensity);
    let mut notes = Vec::new();
    for bar in 0..bars {
        let base = bar as f64 * 4.0;
        if intensity >= 60 {
            for beat in 0..4 {
                let vel = if beat % 2 == 0 {
                    velocity(intensity, 100, 127)
                } else {
                    velocity(intensity, 88, 115)
                };
                notes.push(Note::new(
                    drum_map::KICK as i32,
                    base + beat as f64,
                    0.25,
                    vel,
                ));
            }
            if intensity >= 85 {
                // 16th pickups driving into the next downbeats.
                for &off in &[1.75, 3.75] {
                    notes.push(Note::new(
                        drum_map::KICK as i32,
                        base + off,
                        0.25,
                        velocity(intensity, 60, 84),
                    ));
                }
            }
        } else if intensity >= 30 {
            for &beat in &[0.0, 2.0] {
                notes.push(Note::new(
                    drum_map::KICK as i32,
                    base + beat,
                    0.25,
                    velocity(intensity, 84, 112),
                ));
            }
        } else {
            notes.push(Note::new(
                drum_map::KICK as i32,
                base,
                0.5,
                velocity(intensity, 72, 100),
            ));
        }
    }
    notes
}

/// Backbeat snare (or clap, when the label says so) with ghost 16ths
/// folding in as intensity rises.
pub(crate) fn snare_clap(intensity: u8, label: &str) -> Vec<Note> {
    let pitch = i32::from(if label.to_lowercase().contains("clap") {
        drum_map::CLAP
    } else {
        drum_map::SNARE
    });

    let mut notes = Vec::new();
    for bar in 0..2u32 {
        let base = bar as f64 * 4.0;
        for &beat in &[1.0, 3.0] {
            notes.push(Note::new(
                pitch,
                base + beat,
                0.25,
                velocity(intensity, 92, 120),
            ));
        }
        if intensity >= 60 {
            for &off in &[0.75, 2.75] {
                notes.push(Note::new(pitch, base + off, 0.125, velocity(intensity, 28, 48)));
            }
        }
        if intensity >= 80 {
            for &off in &[1.5, 3.5] {
                notes.push(Note::new(pitch, base + off, 0.125, velocity(intensity, 22, 40)));
            }
        }
    }
    notes
}

/// 16-step accent cycle for the dense hat grid.
const HAT_ACCENTS_16: [i32; 16] = [12, 0, 4, 0, 10, 0, 4, 0, 12, 0, 4, 2, 10, 0, 6, 0];

/// 8-step accent cycle for the sparse hat grid.
const HAT_ACCENTS_8: [i32; 8] = [10, 0, 8, 0, 10, 2, 8, 0];

/// 16th-note hat grid above intensity 60, 8th-note grid below; one step
/// opens the hat at the 3.5 position either way.
pub(crate) fn hihat(intensity: u8) -> Vec<Note> {
    let mut notes = Vec::new();
    if intensity >= 60 {
        for (step, accent) in HAT_ACCENTS_16.iter().enumerate() {
            let open = step == 14;
            let pitch = if open {
                drum_map::OPEN_HAT
            } else {
                drum_map::CLOSED_HAT
            };
            notes.push(Note::new(
                pitch as i32,
                step as f64 * 0.25,
                if open { 0.45 } else { 0.22 },
                velocity(intensity, 52, 88) + accent,
            ));
        }
    } else {
        for (step, accent) in HAT_ACCENTS_8.iter().enumerate() {
            let open = step == 7;
            let pitch = if open {
                drum_map::OPEN_HAT
            } else {
                drum_map::CLOSED_HAT
            };
            notes.push(Note::new(
                pitch as i32,
                step as f64 * 0.5,
                if open { 0.45 } else { 0.25 },
                velocity(intensity, 46, 80) + accent,
            ));
        }
    }
    notes
}

/// Ride eighths when the label asks for a ride, otherwise one crash per
/// bar.
pub(crate) fn cymbal(intensity: u8, label: &str) -> Vec<Note> {
    let mut notes = Vec::new();
    if label.to_lowercase().contains("ride") {
        for bar in 0..2u32 {
            let base = bar as f64 * 4.0;
            for step in 0..8 {
                let accent = if step % 2 == 0 { 18 } else { 0 };
                notes.push(Note::new(
                    drum_map::RIDE as i32,
                    base + step as f64 * 0.5,
                    0.3,
                    velocity(intensity, 50, 80) + accent,
                ));
            }
        }
    } else {
        for bar in 0..2u32 {
            notes.push(Note::new(
                drum_map::CRASH as i32,
                bar as f64 * 4.0,
                2.0,
                velocity(intensity, 80, 118),
            ));
        }
    }
    notes
}

/// The four rotating hand-percussion voices.
const PERC_VOICES: [u8; 4] = [
    drum_map::HI_BONGO,
    drum_map::LOW_BONGO,
    drum_map::OPEN_CONGA,
    drum_map::LOW_CONGA,
];

/// Fixed syncopated figure across the two bars.
const PERC_OFFSETS: [f64; 8] = [0.5, 1.25, 2.5, 3.75, 4.5, 5.25, 6.5, 7.25];

/// Two-bar syncopated figure over four rotating voices; above intensity
/// 60 a shaker fills the off-grid 16ths with velocities drawn from a
/// bounded window around the intensity-scaled base.
pub(crate) fn percussion(intensity: u8, rng: &mut Pcg32) -> Vec<Note> {
    let mut notes = Vec::new();
    for (i, &off) in PERC_OFFSETS.iter().enumerate() {
        notes.push(Note::new(
            PERC_VOICES[i % PERC_VOICES.len()] as i32,
            off,
            0.25,
            velocity(intensity, 58, 96),
        ));
    }

    if intensity >= 60 {
        let base = velocity(intensity, 30, 54);
        for step in 0..32 {
            if step % 4 == 0 {
                // Leave the quarter grid to the main voices.
                continue;
            }
            notes.push(Note::new(
                drum_map::SHAKER as i32,
                step as f64 * 0.25,
                0.2,
                base + rng.gen_range(-8..=8),
            ));
        }
    }
    notes
}

/// One-bar 16th roll climbing low tom, mid tom, high tom, snare, with the
/// velocity ramping up across the roll and a crash on the final step.
pub(crate) fn fill(intensity: u8) -> Vec<Note> {
    let mut notes = Vec::new();
    let lo = velocity(intensity, 40, 64);
    let hi = velocity(intensity, 88, 120);
    for step in 0..16i32 {
        let start = step as f64 * 0.25;
        if step == 15 {
            notes.push(Note::new(
                drum_map::CRASH as i32,
                start,
                1.0,
                velocity(intensity, 96, 124),
            ));
            continue;
        }
        let pitch = match step / 4 {
            0 => drum_map::LOW_TOM,
            1 => drum_map::MID_TOM,
            2 => drum_map::HIGH_TOM,
            _ => drum_map::SNARE,
        };
        notes.push(Note::new(
            pitch as i32,
            start,
            0.25,
            lo + (hi - lo) * step / 15,
        ));
    }
    notes
}
