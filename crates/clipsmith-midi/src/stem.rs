//! Stem classification: mapping free-text instrument labels to one of the
//! fixed pattern archetypes.

use serde::Serialize;

/// Instrument archetype driving which pattern generator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StemType {
    Kick,
    SnareClap,
    HiHat,
    Cymbal,
    Percussion,
    Fill,
    SubBass,
    MidBass,
    Bassline,
    Pad,
    Lead,
    Arp,
    Fx,
    Texture,
}

impl StemType {
    /// Stable lower-case name, used in file names and log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StemType::Kick => "kick",
            StemType::SnareClap => "snare_clap",
            StemType::HiHat => "hihat",
            StemType::Cymbal => "cymbal",
            StemType::Percussion => "percussion",
            StemType::Fill => "fill",
            StemType::SubBass => "sub_bass",
            StemType::MidBass => "mid_bass",
            StemType::Bassline => "bassline",
            StemType::Pad => "pad",
            StemType::Lead => "lead",
            StemType::Arp => "arp",
            StemType::Fx => "fx",
            StemType::Texture => "texture",
        }
    }
}

/// Ordered keyword rules. The first rule with a keyword that is a
/// substring of the lower-cased label wins, so the order is a contract:
/// a label containing both "kick" and "fill" classifies as a kick because
/// kick is tested first, and "sub bass" lands on sub-bass before the
/// plain "bass" rule can see it.
const KEYWORD_RULES: &[(&[&str], StemType)] = &[
    (&["kick"], StemType::Kick),
    (&["snare", "clap"], StemType::SnareClap),
    (&["hat"], StemType::HiHat),
    (&["cymbal", "ride", "crash"], StemType::Cymbal),
    (&["fill", "transition"], StemType::Fill),
    (
        &["perc", "shaker", "tambourine", "conga", "bongo"],
        StemType::Percussion,
    ),
    (&["sub"], StemType::SubBass),
    (&["mid bass", "mid-bass", "midbass", "reese"], StemType::MidBass),
    (&["bass"], StemType::Bassline),
    (&["pad", "chord", "drone"], StemType::Pad),
    (&["lead", "melody", "hook", "pluck"], StemType::Lead),
    (&["arp"], StemType::Arp),
    (&["fx", "riser", "sweep", "impact"], StemType::Fx),
    (&["texture", "atmos", "ambien", "noise"], StemType::Texture),
];

/// Classify an element label plus category into a stem type.
///
/// The label is matched against [`KEYWORD_RULES`] top to bottom; when
/// nothing matches, the category decides ("drums" and "bass" have obvious
/// homes, everything else becomes a pad).
pub fn classify_stem(element_label: &str, category: &str) -> StemType {
    let label = element_label.to_lowercase();
    for (keywords, stem) in KEYWORD_RULES {
        if keywords.iter().any(|kw| label.contains(kw)) {
            return *stem;
        }
    }

    if category.eq_ignore_ascii_case("drums") {
        StemType::Percussion
    } else if category.eq_ignore_ascii_case("bass") {
        StemType::Bassline
    } else {
        StemType::Pad
    }
}
