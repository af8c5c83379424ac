//! JSON projection of a clip for export collaborators (clipboard, UI).
//!
//! The projection is a convenience view, not a file format: pitches are
//! rendered as human-readable note names while every numeric field is a
//! lossless copy of the clip's value.

use serde::Serialize;

use crate::clip::Clip;
use crate::theory::pitch_to_name;

/// Top-level interchange document: `{"midi_clip": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ClipDocument {
    pub midi_clip: ClipProjection,
}

/// The clip payload.
#[derive(Debug, Clone, Serialize)]
pub struct ClipProjection {
    pub stem: String,
    pub bpm: f64,
    pub time_signature: String,
    pub bars: u32,
    pub notes: Vec<NoteProjection>,
}

/// One note with its pitch rendered as a name.
#[derive(Debug, Clone, Serialize)]
pub struct NoteProjection {
    pub note: String,
    pub start_beat: f64,
    pub duration_beats: f64,
    pub velocity: u8,
}

impl ClipDocument {
    /// Project a clip into the interchange shape.
    pub fn from_clip(clip: &Clip) -> Self {
        Self {
            midi_clip: ClipProjection {
                stem: clip.stem_label.clone(),
                bpm: clip.bpm,
                time_signature: clip.time_signature.clone(),
                bars: clip.bars,
                notes: clip
                    .notes
                    .iter()
                    .map(|n| NoteProjection {
                        note: pitch_to_name(n.pitch),
                        start_beat: n.start_beat,
                        duration_beats: n.duration_beats,
                        velocity: n.velocity,
                    })
                    .collect(),
            },
        }
    }
}

/// Serialize a clip to the interchange JSON text.
pub fn to_json_string(clip: &Clip) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ClipDocument::from_clip(clip))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clip::Note;

    #[test]
    fn test_projection_shape() {
        let clip = Clip {
            stem_label: "Kick".to_string(),
            bpm: 128.0,
            time_signature: "4/4".to_string(),
            bars: 1,
            notes: vec![Note::new(36, 0.0, 0.25, 120)],
        };
        let json = to_json_string(&clip).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["midi_clip"]["stem"], "Kick");
        assert_eq!(value["midi_clip"]["bpm"], 128.0);
        assert_eq!(value["midi_clip"]["time_signature"], "4/4");
        assert_eq!(value["midi_clip"]["bars"], 1);
        assert_eq!(value["midi_clip"]["notes"][0]["note"], "C1");
        assert_eq!(value["midi_clip"]["notes"][0]["start_beat"], 0.0);
        assert_eq!(value["midi_clip"]["notes"][0]["duration_beats"], 0.25);
        assert_eq!(value["midi_clip"]["notes"][0]["velocity"], 120);
    }

    #[test]
    fn test_numeric_fields_are_lossless() {
        let clip = Clip {
            stem_label: "Hat".to_string(),
            bpm: 173.33,
            time_signature: "7/8".to_string(),
            bars: 2,
            notes: vec![Note::new(42, 1.75, 0.22, 91)],
        };
        let doc = ClipDocument::from_clip(&clip);
        assert_eq!(doc.midi_clip.bpm, clip.bpm);
        assert_eq!(doc.midi_clip.notes[0].start_beat, 1.75);
        assert_eq!(doc.midi_clip.notes[0].duration_beats, 0.22);
        assert_eq!(doc.midi_clip.notes[0].velocity, 91);
    }
}
