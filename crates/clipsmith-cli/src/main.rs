//! Clipsmith CLI - generate stem MIDI clips from the command line.
//!
//! This binary is the file-save collaborator around the core library:
//! it feeds a generation context through `clipsmith-midi` and writes the
//! resulting SMF buffer verbatim to disk.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

mod commands;

/// Clipsmith - deterministic MIDI clip generation
#[derive(Parser)]
#[command(name = "clipsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a stem clip and write it as a .mid file
    Generate(commands::generate::GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
