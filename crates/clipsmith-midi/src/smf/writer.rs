//! SMF assembly: clip to timed events to a delta-encoded byte stream.

use std::io::{self, Write};

use byteorder::{BigEndian, WriteBytesExt};

use super::event::{sort_events, EventKind, TimedEvent};
use super::vlq::encode_vlq;
use super::{MTHD_MAGIC, MTRK_MAGIC, PPQ, TIME_SIG_32NDS, TIME_SIG_METRONOME};
use crate::clip::Clip;

/// A single-track (format 0) Standard MIDI File.
#[derive(Debug, Clone)]
pub struct SmfFile {
    events: Vec<TimedEvent>,
}

impl SmfFile {
    /// Build the event list for a clip.
    ///
    /// Tempo and time signature sit at tick 0; each note contributes a
    /// note-on/note-off pair; end-of-track lands at the nominal clip end
    /// (`bars * beats_per_bar * PPQ`) even when a sustained note runs
    /// past it.
    pub fn from_clip(clip: &Clip) -> Self {
        let (numerator, denominator) = clip.time_signature_parts();
        let micros_per_quarter = (60_000_000.0 / clip.bpm).round() as u32;
        let denominator_pow2 = (denominator as f64).log2().round() as u8;

        let mut events = Vec::with_capacity(clip.notes.len() * 2 + 3);
        events.push(TimedEvent {
            tick: 0,
            kind: EventKind::Tempo { micros_per_quarter },
        });
        events.push(TimedEvent {
            tick: 0,
            kind: EventKind::TimeSignature {
                numerator,
                denominator_pow2,
            },
        });

        for note in &clip.notes {
            let start = (note.start_beat * PPQ as f64).round() as u32;
            let duration = ((note.duration_beats * PPQ as f64).round() as u32).max(1);
            events.push(TimedEvent {
                tick: start,
                kind: EventKind::NoteOn {
                    pitch: note.pitch,
                    velocity: note.velocity,
                },
            });
            events.push(TimedEvent {
                tick: start + duration,
                kind: EventKind::NoteOff { pitch: note.pitch },
            });
        }

        sort_events(&mut events);

        // Appended after the sort so a sustain bleeding past the nominal
        // boundary cannot displace it; its delta saturates to zero in
        // that case.
        events.push(TimedEvent {
            tick: clip.bars * numerator as u32 * PPQ as u32,
            kind: EventKind::EndOfTrack,
        });

        Self { events }
    }

    /// The sorted event list.
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    /// Serialize the track body: delta time plus event bytes, in order.
    fn track_data(&self) -> Vec<u8> {
        let mut data = Vec::new();
        let mut prev_tick = 0u32;
        for event in &self.events {
            let delta = event.tick.saturating_sub(prev_tick);
            data.extend_from_slice(&encode_vlq(delta));
            match event.kind {
                EventKind::Tempo { micros_per_quarter } => {
                    let t = micros_per_quarter & 0x00FF_FFFF;
                    data.extend_from_slice(&[
                        0xFF,
                        0x51,
                        0x03,
                        (t >> 16) as u8,
                        (t >> 8) as u8,
                        t as u8,
                    ]);
                }
                EventKind::TimeSignature {
                    numerator,
                    denominator_pow2,
                } => {
                    data.extend_from_slice(&[
                        0xFF,
                        0x58,
                        0x04,
                        numerator,
                        denominator_pow2,
                        TIME_SIG_METRONOME,
                        TIME_SIG_32NDS,
                    ]);
                }
                EventKind::NoteOn { pitch, velocity } => {
                    data.extend_from_slice(&[0x90, pitch, velocity]);
                }
                EventKind::NoteOff { pitch } => {
                    data.extend_from_slice(&[0x80, pitch, 0x00]);
                }
                EventKind::EndOfTrack => {
                    data.extend_from_slice(&[0xFF, 0x2F, 0x00]);
                }
            }
            prev_tick = event.tick;
        }
        data
    }

    /// Write the complete file to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let track = self.track_data();

        writer.write_all(MTHD_MAGIC)?;
        writer.write_u32::<BigEndian>(6)?;
        writer.write_u16::<BigEndian>(0)?; // format 0
        writer.write_u16::<BigEndian>(1)?; // single track
        writer.write_u16::<BigEndian>(PPQ)?;

        writer.write_all(MTRK_MAGIC)?;
        writer.write_u32::<BigEndian>(track.len() as u32)?;
        writer.write_all(&track)?;

        Ok(())
    }

    /// Write the file to a byte vector.
    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Compute the BLAKE3 hash of the file bytes, for byte-level
    /// regression checks.
    pub fn compute_hash(&self) -> io::Result<String> {
        let bytes = self.to_bytes()?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
