//! Clipsmith MIDI backend - deterministic stem clip generation and SMF
//! encoding.
//!
//! This crate turns a short instrument descriptor (label, category,
//! intensity, tempo, key) into a sequence of timed notes and serializes
//! them as a byte-exact single-track Standard MIDI File.
//!
//! # Pipeline
//!
//! descriptor → stem classifier → pattern generator → clip → SMF bytes
//!
//! ```
//! use clipsmith_midi::{build_clip, GenerationContext, SmfFile};
//!
//! let mut ctx = GenerationContext::new("Kick", "Drums");
//! ctx.intensity = 80;
//! ctx.bpm = Some(128.0);
//! ctx.key = Some("F minor".to_string());
//!
//! let clip = build_clip(&ctx, 42);
//! let bytes = SmfFile::from_clip(&clip).to_bytes().unwrap();
//! assert_eq!(&bytes[0..4], b"MThd");
//! ```
//!
//! # Determinism
//!
//! The pipeline is a pure function of the context plus a 32-bit seed.
//! The seed feeds a PCG32 that only the percussion generator's shaker
//! velocities consume; every other pattern is fully determined by the
//! context. Same context + same seed = byte-identical output.
//!
//! # Degradation, not errors
//!
//! No input can make generation fail. Unparseable note names become the
//! octave-3 root, unparseable keys become C minor, a missing bpm becomes
//! 128, a missing time signature becomes 4/4, and an unclassifiable
//! label falls back to the pad generator. Pitches, velocities, and
//! durations are clamped before the binary writer ever sees them.
//!
//! # Module Structure
//!
//! - [`theory`]: note-name conversion, key parsing, scale degrees
//! - [`stem`]: label → archetype classification
//! - [`patterns`]: per-archetype pattern generators
//! - [`generate`]: clip assembly entry points
//! - [`smf`]: Standard MIDI File writer and validator
//! - [`interchange`]: JSON projection for export collaborators

pub mod clip;
pub mod context;
pub mod generate;
pub mod interchange;
pub mod patterns;
pub mod smf;
pub mod stem;
pub mod theory;

pub use clip::{Clip, Note};
pub use context::GenerationContext;
pub use generate::{build_clip, generate_clip_smf, DEFAULT_BPM, DEFAULT_TIME_SIGNATURE};
pub use smf::SmfFile;
pub use stem::{classify_stem, StemType};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
