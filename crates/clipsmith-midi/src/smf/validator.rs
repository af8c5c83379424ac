//! Structural validation and decoding of produced SMF buffers.
//!
//! Mirrors the writer: checks the chunk framing first, then walks the
//! event stream so tests can reconstruct exactly what a consumer would
//! read back.

use thiserror::Error;

use super::vlq::decode_vlq;
use super::{MTHD_MAGIC, MTRK_MAGIC, PPQ};

/// Offset of the first track event (14-byte header chunk + 8-byte track
/// chunk header).
const TRACK_DATA_OFFSET: usize = 22;

/// Validation or decoding error for an SMF buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmfFormatError {
    /// Buffer is too small to hold both chunk headers.
    #[error("file too small: {0} bytes")]
    FileTooSmall(usize),

    /// Header chunk magic is not "MThd".
    #[error("invalid header magic")]
    BadHeaderMagic,

    /// Header chunk length is not 6.
    #[error("unexpected header length {0}")]
    BadHeaderLength(u32),

    /// Format field is not 0 (single track).
    #[error("unsupported format {0}")]
    UnsupportedFormat(u16),

    /// Track count is not 1.
    #[error("expected a single track, found {0}")]
    BadTrackCount(u16),

    /// Division field does not match the fixed PPQ.
    #[error("unexpected division {0}")]
    BadDivision(u16),

    /// Track chunk magic is not "MTrk".
    #[error("invalid track magic")]
    BadTrackMagic,

    /// Declared track length disagrees with the bytes that follow.
    #[error("declared track length {declared} but {actual} bytes follow")]
    TrackLengthMismatch { declared: u32, actual: usize },

    /// Event stream ended in the middle of an event.
    #[error("truncated event at offset {0}")]
    TruncatedEvent(usize),

    /// Status byte the decoder does not understand.
    #[error("unsupported status byte 0x{0:02X} at offset {1}")]
    UnsupportedStatus(u8, usize),

    /// End-of-track is present but not the final event.
    #[error("end-of-track is not the final event")]
    MisplacedEndOfTrack,

    /// Track has no end-of-track event.
    #[error("missing end-of-track")]
    MissingEndOfTrack,
}

/// A decoded track event at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedEvent {
    /// Tempo meta event.
    Tempo { micros_per_quarter: u32 },
    /// Time-signature meta event with its fixed trailer bytes.
    TimeSignature {
        numerator: u8,
        denominator_pow2: u8,
        metronome: u8,
        thirty_seconds: u8,
    },
    /// Channel-0 note on.
    NoteOn { pitch: u8, velocity: u8 },
    /// Channel-0 note off.
    NoteOff { pitch: u8, velocity: u8 },
    /// End-of-track meta event.
    EndOfTrack,
}

/// Validate the fixed header fields, the track framing, and the event
/// stream of a produced buffer.
pub fn validate_smf_bytes(data: &[u8]) -> Result<(), SmfFormatError> {
    check_framing(data)?;

    let events = decode_events(data)?;
    match events.split_last() {
        Some(((_, DecodedEvent::EndOfTrack), rest)) => {
            if rest
                .iter()
                .any(|(_, e)| matches!(e, DecodedEvent::EndOfTrack))
            {
                return Err(SmfFormatError::MisplacedEndOfTrack);
            }
        }
        Some((_, rest)) => {
            if rest
                .iter()
                .any(|(_, e)| matches!(e, DecodedEvent::EndOfTrack))
            {
                return Err(SmfFormatError::MisplacedEndOfTrack);
            }
            return Err(SmfFormatError::MissingEndOfTrack);
        }
        None => return Err(SmfFormatError::MissingEndOfTrack),
    }

    Ok(())
}

/// Decode the track's event stream into `(absolute tick, event)` pairs.
///
/// Performs the same framing checks as [`validate_smf_bytes`] before
/// walking the stream. Meta event types the writer never emits are
/// skipped rather than rejected; unknown channel statuses are errors.
pub fn decode_events(data: &[u8]) -> Result<Vec<(u32, DecodedEvent)>, SmfFormatError> {
    check_framing(data)?;

    let mut events = Vec::new();
    let mut offset = TRACK_DATA_OFFSET;
    let mut tick = 0u32;

    while offset < data.len() {
        let (delta, used) = decode_vlq(&data[offset..])
            .ok_or(SmfFormatError::TruncatedEvent(offset))?;
        offset += used;
        tick = tick.saturating_add(delta);

        let &status = data
            .get(offset)
            .ok_or(SmfFormatError::TruncatedEvent(offset))?;
        match status {
            0xFF => {
                let &meta_type = data
                    .get(offset + 1)
                    .ok_or(SmfFormatError::TruncatedEvent(offset))?;
                let (length, len_used) = decode_vlq(&data[(offset + 2).min(data.len())..])
                    .ok_or(SmfFormatError::TruncatedEvent(offset))?;
                let payload_start = offset + 2 + len_used;
                let payload_end = payload_start + length as usize;
                if payload_end > data.len() {
                    return Err(SmfFormatError::TruncatedEvent(offset));
                }
                let payload = &data[payload_start..payload_end];

                match (meta_type, payload) {
                    (0x51, [a, b, c]) => events.push((
                        tick,
                        DecodedEvent::Tempo {
                            micros_per_quarter: u32::from(*a) << 16
                                | u32::from(*b) << 8
                                | u32::from(*c),
                        },
                    )),
                    (0x58, [num, den, metro, thirty]) => events.push((
                        tick,
                        DecodedEvent::TimeSignature {
                            numerator: *num,
                            denominator_pow2: *den,
                            metronome: *metro,
                            thirty_seconds: *thirty,
                        },
                    )),
                    (0x2F, []) => events.push((tick, DecodedEvent::EndOfTrack)),
                    // Other meta events are legal SMF; just skip them.
                    _ => {}
                }
                offset = payload_end;
            }
            0x90 => {
                let (pitch, velocity) = read_channel_pair(data, offset)?;
                events.push((tick, DecodedEvent::NoteOn { pitch, velocity }));
                offset += 3;
            }
            0x80 => {
                let (pitch, velocity) = read_channel_pair(data, offset)?;
                events.push((tick, DecodedEvent::NoteOff { pitch, velocity }));
                offset += 3;
            }
            _ => return Err(SmfFormatError::UnsupportedStatus(status, offset)),
        }
    }

    Ok(events)
}

/// Check the header chunk and track chunk framing.
fn check_framing(data: &[u8]) -> Result<(), SmfFormatError> {
    if data.len() < TRACK_DATA_OFFSET {
        return Err(SmfFormatError::FileTooSmall(data.len()));
    }
    if &data[0..4] != MTHD_MAGIC {
        return Err(SmfFormatError::BadHeaderMagic);
    }
    let header_len = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
    if header_len != 6 {
        return Err(SmfFormatError::BadHeaderLength(header_len));
    }
    let format = u16::from_be_bytes([data[8], data[9]]);
    if format != 0 {
        return Err(SmfFormatError::UnsupportedFormat(format));
    }
    let tracks = u16::from_be_bytes([data[10], data[11]]);
    if tracks != 1 {
        return Err(SmfFormatError::BadTrackCount(tracks));
    }
    let division = u16::from_be_bytes([data[12], data[13]]);
    if division != PPQ {
        return Err(SmfFormatError::BadDivision(division));
    }
    if &data[14..18] != MTRK_MAGIC {
        return Err(SmfFormatError::BadTrackMagic);
    }
    let declared = u32::from_be_bytes([data[18], data[19], data[20], data[21]]);
    let actual = data.len() - TRACK_DATA_OFFSET;
    if declared as usize != actual {
        return Err(SmfFormatError::TrackLengthMismatch { declared, actual });
    }
    Ok(())
}

/// Read the two data bytes of a channel event.
fn read_channel_pair(data: &[u8], offset: usize) -> Result<(u8, u8), SmfFormatError> {
    match data.get(offset + 1..offset + 3) {
        Some([a, b]) => Ok((*a, *b)),
        _ => Err(SmfFormatError::TruncatedEvent(offset)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clip::{Clip, Note};
    use crate::smf::SmfFile;

    fn sample_clip() -> Clip {
        Clip {
            stem_label: "test".to_string(),
            bpm: 120.0,
            time_signature: "4/4".to_string(),
            bars: 1,
            notes: vec![Note::new(60, 0.0, 1.0, 100), Note::new(67, 1.0, 0.5, 90)],
        }
    }

    #[test]
    fn test_produced_file_validates() {
        let bytes = SmfFile::from_clip(&sample_clip()).to_bytes().unwrap();
        assert_eq!(validate_smf_bytes(&bytes), Ok(()));
    }

    #[test]
    fn test_decode_reads_back_events() {
        let bytes = SmfFile::from_clip(&sample_clip()).to_bytes().unwrap();
        let events = decode_events(&bytes).unwrap();

        assert_eq!(
            events[0],
            (0, DecodedEvent::Tempo { micros_per_quarter: 500_000 })
        );
        assert_eq!(
            events[1],
            (
                0,
                DecodedEvent::TimeSignature {
                    numerator: 4,
                    denominator_pow2: 2,
                    metronome: 0x18,
                    thirty_seconds: 0x08,
                }
            )
        );
        assert!(events.contains(&(0, DecodedEvent::NoteOn { pitch: 60, velocity: 100 })));
        assert!(events.contains(&(480, DecodedEvent::NoteOff { pitch: 60, velocity: 0 })));
        assert_eq!(*events.last().unwrap(), (1920, DecodedEvent::EndOfTrack));
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut bytes = SmfFile::from_clip(&sample_clip()).to_bytes().unwrap();
        bytes[0] = b'X';
        assert_eq!(validate_smf_bytes(&bytes), Err(SmfFormatError::BadHeaderMagic));
    }

    #[test]
    fn test_rejects_truncated_track() {
        let bytes = SmfFile::from_clip(&sample_clip()).to_bytes().unwrap();
        let cut = &bytes[..bytes.len() - 3];
        assert_eq!(
            validate_smf_bytes(cut),
            Err(SmfFormatError::TrackLengthMismatch {
                declared: (bytes.len() - 22) as u32,
                actual: bytes.len() - 25,
            })
        );
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let mut bytes = SmfFile::from_clip(&sample_clip()).to_bytes().unwrap();
        bytes[21] = bytes[21].wrapping_add(1);
        assert!(matches!(
            validate_smf_bytes(&bytes),
            Err(SmfFormatError::TrackLengthMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_tiny_buffer() {
        assert_eq!(
            validate_smf_bytes(&[0x4D]),
            Err(SmfFormatError::FileTooSmall(1))
        );
    }

    #[test]
    fn test_rejects_missing_end_of_track() {
        // Hand-build a track with a single note-on and no end-of-track.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&PPQ.to_be_bytes());
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&4u32.to_be_bytes());
        bytes.extend_from_slice(&[0x00, 0x90, 60, 100]);
        assert_eq!(
            validate_smf_bytes(&bytes),
            Err(SmfFormatError::MissingEndOfTrack)
        );
    }
}
