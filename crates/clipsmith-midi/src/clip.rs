//! Clip and note values produced by the pattern generators.

/// Smallest representable note duration: one writer tick at 480 PPQ.
pub const MIN_DURATION_BEATS: f64 = 1.0 / 480.0;

/// A single timed note on the beat grid.
///
/// Values are clamped at construction so the binary writer never sees an
/// out-of-range pitch or velocity, and no zero-length note can exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// MIDI pitch, 0..=127.
    pub pitch: u8,
    /// Start position in beats from the clip start.
    pub start_beat: f64,
    /// Length in beats; at least one tick.
    pub duration_beats: f64,
    /// MIDI velocity, 1..=127.
    pub velocity: u8,
}

impl Note {
    /// Build a note, clamping pitch and velocity into MIDI range and
    /// flooring the duration at one tick.
    pub fn new(pitch: i32, start_beat: f64, duration_beats: f64, velocity: i32) -> Self {
        Self {
            pitch: pitch.clamp(0, 127) as u8,
            start_beat: start_beat.max(0.0),
            duration_beats: duration_beats.max(MIN_DURATION_BEATS),
            velocity: velocity.clamp(1, 127) as u8,
        }
    }

    /// Beat position where the note ends.
    pub fn end_beat(&self) -> f64 {
        self.start_beat + self.duration_beats
    }
}

/// A generated clip: notes plus the tempo and meter they live in.
///
/// Notes are allowed to run past `bars * beats_per_bar` (sustains bleed
/// over the nominal boundary); the writer still places end-of-track at the
/// nominal end.
#[derive(Debug, Clone)]
pub struct Clip {
    /// Label of the stem this clip was generated for.
    pub stem_label: String,
    /// Tempo in beats per minute, always > 0.
    pub bpm: f64,
    /// Time signature as "N/D" text.
    pub time_signature: String,
    /// Nominal clip length in bars, >= 1.
    pub bars: u32,
    /// Notes ordered by start beat.
    pub notes: Vec<Note>,
}

impl Clip {
    /// Parse the clip's time signature, falling back to 4/4.
    pub fn time_signature_parts(&self) -> (u8, u8) {
        parse_time_signature(&self.time_signature)
    }

    /// Beats per bar (the time signature numerator).
    pub fn beats_per_bar(&self) -> u32 {
        self.time_signature_parts().0 as u32
    }

    /// Nominal clip length in beats.
    pub fn total_beats(&self) -> u32 {
        self.bars * self.beats_per_bar()
    }
}

/// Parse "N/D" into numerator and denominator. Anything unparseable, or a
/// zero field, is 4/4.
pub fn parse_time_signature(text: &str) -> (u8, u8) {
    let mut parts = text.trim().split('/');
    let numerator = parts.next().and_then(|p| p.trim().parse::<u8>().ok());
    let denominator = parts.next().and_then(|p| p.trim().parse::<u8>().ok());
    match (numerator, denominator) {
        (Some(n), Some(d)) if n > 0 && d > 0 => (n, d),
        _ => (4, 4),
    }
}
