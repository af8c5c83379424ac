//! Generation context: the sole input to the pipeline.

use serde::Deserialize;

/// Descriptor for a single stem generation request.
///
/// Immutable once constructed; the pipeline is a pure function of this
/// value (plus a seed). Every field degrades to a documented default
/// rather than failing: an unclassifiable label falls back through the
/// category, a missing bpm becomes 128, a missing key becomes C minor,
/// and a missing time signature becomes 4/4.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerationContext {
    /// Free-text instrument label, e.g. "Kick" or "Acid Bassline".
    pub element_label: String,
    /// Element category, e.g. "Drums", "Bass", "Synths".
    pub category: String,
    /// Free-text role descriptor, carried through for collaborators; not
    /// consulted by classification.
    pub role: String,
    /// Pattern intensity, 0..=100 (clamped on use).
    pub intensity: u8,
    /// Tempo in beats per minute.
    pub bpm: Option<f64>,
    /// Key string, e.g. "F minor".
    pub key: Option<String>,
    /// Genre hint, carried through for collaborators.
    pub genre: Option<String>,
    /// Time signature as "N/D" text.
    pub time_signature: Option<String>,
}

impl GenerationContext {
    /// Convenience constructor for the common label + category case.
    pub fn new(element_label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            element_label: element_label.into(),
            category: category.into(),
            ..Default::default()
        }
    }
}
