//! General MIDI percussion key map (channel-10 note numbers).
//!
//! Only the subset the drum generators actually play.

/// Bass Drum 1.
pub const KICK: u8 = 36;
/// Acoustic Snare.
pub const SNARE: u8 = 38;
/// Hand Clap.
pub const CLAP: u8 = 39;
/// Low Floor Tom.
pub const LOW_TOM: u8 = 41;
/// Closed Hi-Hat.
pub const CLOSED_HAT: u8 = 42;
/// Low Tom.
pub const MID_TOM: u8 = 45;
/// Open Hi-Hat.
pub const OPEN_HAT: u8 = 46;
/// Hi-Mid Tom.
pub const HIGH_TOM: u8 = 48;
/// Crash Cymbal 1.
pub const CRASH: u8 = 49;
/// Ride Cymbal 1.
pub const RIDE: u8 = 51;
/// Tambourine.
pub const TAMBOURINE: u8 = 54;
/// Hi Bongo.
pub const HI_BONGO: u8 = 60;
/// Low Bongo.
pub const LOW_BONGO: u8 = 61;
/// Open Hi Conga.
pub const OPEN_CONGA: u8 = 63;
/// Low Conga.
pub const LOW_CONGA: u8 = 64;
/// Maracas; doubles as the shaker voice.
pub const SHAKER: u8 = 70;
