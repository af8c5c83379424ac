//! Standard MIDI File (format 0) encoding and validation.
//!
//! The writer produces exactly one header chunk and one track chunk. All
//! events carry absolute ticks internally and are sorted by
//! `(tick, priority)` before being re-expressed as delta times, so meta
//! events always precede notes at tick 0 and a note-off sharing a tick
//! with a note-on is emitted first. Timing resolution is fixed at
//! [`PPQ`] ticks per quarter note.

mod event;
mod validator;
mod vlq;
mod writer;

pub use event::{sort_events, EventKind, TimedEvent};
pub use validator::{decode_events, validate_smf_bytes, DecodedEvent, SmfFormatError};
pub use vlq::{decode_vlq, encode_vlq};
pub use writer::SmfFile;

/// Pulses (ticks) per quarter note; the fixed time resolution of every
/// produced file.
pub const PPQ: u16 = 480;

/// Header chunk magic.
pub const MTHD_MAGIC: &[u8; 4] = b"MThd";

/// Track chunk magic.
pub const MTRK_MAGIC: &[u8; 4] = b"MTrk";

/// MIDI clocks per metronome click in the time-signature meta event.
pub const TIME_SIG_METRONOME: u8 = 0x18;

/// Notated 32nd notes per quarter in the time-signature meta event.
pub const TIME_SIG_32NDS: u8 = 0x08;
