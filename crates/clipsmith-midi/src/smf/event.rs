//! Absolute-tick track events and their deterministic ordering.

/// A track event positioned at an absolute tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEvent {
    /// Absolute position in ticks from the track start.
    pub tick: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payloads the writer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Tempo meta event (microseconds per quarter note).
    Tempo { micros_per_quarter: u32 },
    /// Time-signature meta event; the denominator is stored as its power
    /// of two, the way the file format wants it.
    TimeSignature { numerator: u8, denominator_pow2: u8 },
    /// Channel-0 note on.
    NoteOn { pitch: u8, velocity: u8 },
    /// Channel-0 note off.
    NoteOff { pitch: u8 },
    /// End-of-track meta event.
    EndOfTrack,
}

impl EventKind {
    /// Tie-break priority for events sharing a tick: meta events first, a
    /// note-off before any note-on at the same tick (so a re-struck pitch
    /// is released before it sounds again), end-of-track always last.
    pub fn priority(&self) -> u8 {
        match self {
            EventKind::Tempo { .. } => 0,
            EventKind::TimeSignature { .. } => 1,
            EventKind::NoteOff { .. } => 5,
            EventKind::NoteOn { .. } => 10,
            EventKind::EndOfTrack => 100,
        }
    }
}

/// Sort events by `(tick, priority)`. The sort is stable, so events of
/// the same kind at the same tick keep their insertion order.
pub fn sort_events(events: &mut [TimedEvent]) {
    events.sort_by_key(|e| (e.tick, e.kind.priority()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_before_notes_at_tick_zero() {
        let mut events = vec![
            TimedEvent {
                tick: 0,
                kind: EventKind::NoteOn {
                    pitch: 60,
                    velocity: 100,
                },
            },
            TimedEvent {
                tick: 0,
                kind: EventKind::TimeSignature {
                    numerator: 4,
                    denominator_pow2: 2,
                },
            },
            TimedEvent {
                tick: 0,
                kind: EventKind::Tempo {
                    micros_per_quarter: 500_000,
                },
            },
        ];
        sort_events(&mut events);
        assert!(matches!(events[0].kind, EventKind::Tempo { .. }));
        assert!(matches!(events[1].kind, EventKind::TimeSignature { .. }));
        assert!(matches!(events[2].kind, EventKind::NoteOn { .. }));
    }

    #[test]
    fn test_off_before_on_at_shared_tick() {
        let mut events = vec![
            TimedEvent {
                tick: 480,
                kind: EventKind::NoteOn {
                    pitch: 60,
                    velocity: 100,
                },
            },
            TimedEvent {
                tick: 480,
                kind: EventKind::NoteOff { pitch: 60 },
            },
        ];
        sort_events(&mut events);
        assert!(matches!(events[0].kind, EventKind::NoteOff { .. }));
        assert!(matches!(events[1].kind, EventKind::NoteOn { .. }));
    }

    #[test]
    fn test_end_of_track_sorts_last() {
        let mut events = vec![
            TimedEvent {
                tick: 1920,
                kind: EventKind::EndOfTrack,
            },
            TimedEvent {
                tick: 1920,
                kind: EventKind::NoteOff { pitch: 36 },
            },
        ];
        sort_events(&mut events);
        assert!(matches!(events.last().unwrap().kind, EventKind::EndOfTrack));
    }
}
