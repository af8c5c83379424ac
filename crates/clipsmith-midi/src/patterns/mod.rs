//! Per-stem pattern generators.
//!
//! Each generator is a deterministic function of intensity, key, and
//! label, producing notes on a 4/4 beat grid with a fixed authored bar
//! count. Intensity thresholds switch between qualitatively different
//! figures; velocities are linear functions of intensity clamped into
//! MIDI range. The percussion generator is the only consumer of the
//! seeded RNG (shaker velocity humanization).

mod bass;
mod drums;
mod melodic;

pub mod drum_map;


pub(crate) use bass::{bassline, mid_bass, sub_bass};
pub(crate) use drums::{cymbal, fill, hihat, kick, percussion, snare_clap};
pub(crate) use melodic::{arp, fx, lead, pad, texture};

use crate::stem::StemType;

/// Authored clip length in bars for each stem archetype.
///
/// The kick switches to a single dense bar at high intensity; everything
/// else has a fixed authored length.
pub fn stem_bars(stem: StemType, intensity: u8) -> u32 {
    match stem {
        StemType::Kick => {
            if intensity >= 70 {
                1
            } else {
                2
            }
        }
        StemType::HiHat | StemType::Fill => 1,
        StemType::Pad | StemType::Texture => 4,
        _ => 2,
    }
}

/// Map intensity (0..=100) linearly into `lo..=hi`, clamped to MIDI
/// velocity range. Generators layer small accent offsets on top; the
/// final clamp happens in [`crate::clip::Note::new`].
pub(crate) fn velocity(intensity: u8, lo: i32, hi: i32) -> i32 {
    let t = intensity.min(100) as f64 / 100.0;
    let v = lo as f64 + (hi - lo) as f64 * t;
    (v.round() as i32).clamp(1, 127)
}
