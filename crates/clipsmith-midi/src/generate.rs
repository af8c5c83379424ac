//! Clip assembly: classify the stem, dispatch to its generator, and
//! bundle the notes with tempo and meter.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clip::Clip;
use crate::context::GenerationContext;
use crate::patterns;
use crate::smf::SmfFile;
use crate::stem::{classify_stem, StemType};
use crate::theory::parse_key;

/// BPM used when the context does not carry a usable one.
pub const DEFAULT_BPM: f64 = 128.0;

/// Time signature used when the context does not carry one.
pub const DEFAULT_TIME_SIGNATURE: &str = "4/4";

/// Create the PCG32 used for the few randomized velocities.
///
/// The 32-bit seed is widened into both halves of the 64-bit state so
/// distinct seeds stay distinct.
fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Build a clip from a generation context.
///
/// This never fails. Malformed inputs degrade to documented defaults:
/// unparseable key becomes C minor, missing or non-positive bpm becomes
/// 128, an unclassifiable label falls through the category to the pad
/// generator. The same context and seed always produce the same clip.
pub fn build_clip(ctx: &GenerationContext, seed: u32) -> Clip {
    let stem = classify_stem(&ctx.element_label, &ctx.category);
    let intensity = ctx.intensity.min(100);
    let key = parse_key(ctx.key.as_deref().unwrap_or(""));
    let mut rng = create_rng(seed);

    let mut notes = match stem {
        StemType::Kick => patterns::kick(intensity),
        StemType::SnareClap => patterns::snare_clap(intensity, &ctx.element_label),
        StemType::HiHat => patterns::hihat(intensity),
        StemType::Cymbal => patterns::cymbal(intensity, &ctx.element_label),
        StemType::Percussion => patterns::percussion(intensity, &mut rng),
        StemType::Fill => patterns::fill(intensity),
        StemType::SubBass => patterns::sub_bass(intensity, &key),
        StemType::MidBass => patterns::mid_bass(intensity, &key),
        StemType::Bassline => patterns::bassline(intensity, &key),
        StemType::Pad => patterns::pad(intensity, &key),
        StemType::Lead => patterns::lead(intensity, &key),
        StemType::Arp => patterns::arp(intensity, &key),
        StemType::Fx => patterns::fx(intensity, &key),
        StemType::Texture => patterns::texture(intensity, &key),
    };
    notes.sort_by(|a, b| {
        a.start_beat
            .total_cmp(&b.start_beat)
            .then(a.pitch.cmp(&b.pitch))
    });

    let stem_label = if ctx.element_label.trim().is_empty() {
        stem.as_str().to_string()
    } else {
        ctx.element_label.clone()
    };
    let bpm = ctx
        .bpm
        .filter(|b| b.is_finite() && *b > 0.0)
        .unwrap_or(DEFAULT_BPM);
    let time_signature = ctx
        .time_signature
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TIME_SIGNATURE.to_string());

    Clip {
        stem_label,
        bpm,
        time_signature,
        bars: patterns::stem_bars(stem, intensity),
        notes,
    }
}

/// Build a clip and encode it as a single-track SMF buffer in one call.
pub fn generate_clip_smf(
    ctx: &GenerationContext,
    seed: u32,
) -> std::io::Result<(Clip, Vec<u8>)> {
    let clip = build_clip(ctx, seed);
    let bytes = SmfFile::from_clip(&clip).to_bytes()?;
    Ok((clip, bytes))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kick_context() -> GenerationContext {
        GenerationContext {
            element_label: "Kick".to_string(),
            category: "Drums".to_string(),
            intensity: 80,
            bpm: Some(128.0),
            key: Some("F minor".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_clip_kick_scenario() {
        let clip = build_clip(&kick_context(), 7);
        assert_eq!(clip.stem_label, "Kick");
        assert_eq!(clip.bars, 1);
        assert_eq!(clip.bpm, 128.0);
        assert_eq!(clip.time_signature, "4/4");
        let starts: Vec<f64> = clip.notes.iter().map(|n| n.start_beat).collect();
        assert_eq!(starts, vec![0.0, 1.0, 2.0, 3.0]);
        assert!(clip.notes[0].velocity > clip.notes[1].velocity);
    }

    #[test]
    fn test_build_clip_defaults() {
        let clip = build_clip(&GenerationContext::default(), 0);
        // Empty label and category fall through to the pad generator.
        assert_eq!(clip.stem_label, "pad");
        assert_eq!(clip.bars, 4);
        assert_eq!(clip.bpm, DEFAULT_BPM);
        assert_eq!(clip.time_signature, DEFAULT_TIME_SIGNATURE);
        assert!(!clip.notes.is_empty());
    }

    #[test]
    fn test_build_clip_rejects_bad_bpm() {
        let mut ctx = kick_context();
        ctx.bpm = Some(0.0);
        assert_eq!(build_clip(&ctx, 0).bpm, DEFAULT_BPM);
        ctx.bpm = Some(f64::NAN);
        assert_eq!(build_clip(&ctx, 0).bpm, DEFAULT_BPM);
        ctx.bpm = Some(-10.0);
        assert_eq!(build_clip(&ctx, 0).bpm, DEFAULT_BPM);
    }

    #[test]
    fn test_build_clip_notes_are_sorted() {
        let ctx = GenerationContext {
            element_label: "Kick".to_string(),
            category: "Drums".to_string(),
            intensity: 90,
            ..Default::default()
        };
        let clip = build_clip(&ctx, 0);
        for pair in clip.notes.windows(2) {
            assert!(pair[0].start_beat <= pair[1].start_beat);
        }
    }

    #[test]
    fn test_build_clip_is_deterministic() {
        let ctx = GenerationContext {
            element_label: "Percussion".to_string(),
            category: "Drums".to_string(),
            intensity: 90,
            ..Default::default()
        };
        let a = build_clip(&ctx, 1234);
        let b = build_clip(&ctx, 1234);
        assert_eq!(a.notes, b.notes);
    }

    #[test]
    fn test_intensity_is_clamped() {
        let mut ctx = kick_context();
        ctx.intensity = 255;
        let clip = build_clip(&ctx, 0);
        assert!(clip.notes.iter().all(|n| n.velocity <= 127));
    }
}
