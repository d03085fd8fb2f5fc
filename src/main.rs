//! Turtle-escape CLI.
//!
//! Loads a settings file and a moves file, validates both, then runs every
//! sequence in file order, printing one report line per sequence to stdout.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use turtle_escape::{load_sequences, load_settings, Game, SequencesValidator};

#[derive(Parser)]
#[command(
    name = "turtle-escape",
    version,
    about = "Run scripted turtle sequences against a mined board"
)]
struct Cli {
    /// Game settings JSON file.
    settings: PathBuf,

    /// Move sequences JSON file.
    moves: PathBuf,
}

fn main() {
    turtle_escape::logging::init();

    if let Err(err) = run() {
        eprintln!("Something went wrong when running Turtle Game. Errors:\n{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(sequences) = load_sequences(&cli.moves)? else {
        bail!("Sequences file is empty.");
    };
    let report = SequencesValidator::new().validate(&sequences);
    if !report.is_valid() {
        bail!("Sequences file is invalid:\n{report}");
    }
    debug!(count = sequences.len(), "sequences validated");

    let settings = load_settings(&cli.settings)?;
    let mut game = Game::new(settings)?;

    for sequence in &sequences {
        println!("{}", game.run(sequence));
    }

    Ok(())
}
