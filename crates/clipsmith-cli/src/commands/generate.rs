//! The `generate` command: context in, .mid file (and optionally the
//! interchange JSON) out.

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use clipsmith_midi::{generate_clip_smf, interchange, GenerationContext};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to a generation-context JSON file; overrides the inline flags
    #[arg(short, long)]
    pub context: Option<String>,

    /// Instrument/element label (e.g. "Kick", "Acid Bassline")
    #[arg(short, long, default_value = "Pad")]
    pub label: String,

    /// Element category ("Drums", "Bass", "Synths", ...)
    #[arg(long, default_value = "")]
    pub category: String,

    /// Pattern intensity, 0-100
    #[arg(short, long, default_value_t = 60)]
    pub intensity: u8,

    /// Tempo in beats per minute (default 128)
    #[arg(long)]
    pub bpm: Option<f64>,

    /// Key, e.g. "F minor" (default C minor)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Time signature, e.g. "3/4" (default 4/4)
    #[arg(long)]
    pub time_signature: Option<String>,

    /// RNG seed; time-derived when omitted
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Output path (default: derived from the label)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the interchange JSON projection to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &GenerateArgs) -> Result<()> {
    let ctx = match &args.context {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read context file '{}'", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse context file '{}'", path))?
        }
        None => context_from_flags(args),
    };

    let seed = args.seed.unwrap_or_else(time_seed);
    let (clip, bytes) = generate_clip_smf(&ctx, seed)?;

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| format!("{}.mid", file_stem(&clip.stem_label)));
    fs::write(&path, &bytes).with_context(|| format!("failed to write '{}'", path))?;

    println!(
        "{} {} ({} bars, {} notes, {} bytes, seed {})",
        "Wrote".green().bold(),
        path,
        clip.bars,
        clip.notes.len(),
        bytes.len(),
        seed
    );

    if args.json {
        println!("{}", interchange::to_json_string(&clip)?);
    }

    Ok(())
}

/// Build a context from the inline flags.
fn context_from_flags(args: &GenerateArgs) -> GenerationContext {
    let mut ctx = GenerationContext::new(args.label.clone(), args.category.clone());
    ctx.intensity = args.intensity;
    ctx.bpm = args.bpm;
    ctx.key = args.key.clone();
    ctx.time_signature = args.time_signature.clone();
    ctx
}

/// Seed for callers that did not pin one. The core stays pure; only the
/// CLI reaches for the clock.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(0)
}

/// Turn a free-text label into a safe file stem.
fn file_stem(label: &str) -> String {
    let stem: String = label
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let stem = stem.trim_matches('-').to_string();
    if stem.is_empty() {
        "clip".to_string()
    } else {
        stem
    }
}
