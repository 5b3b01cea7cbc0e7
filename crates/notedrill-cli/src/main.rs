//! Notedrill CLI - Random note prompts for ear training and sight reading
//!
//! This binary draws random note prompts from the candidate pool a key
//! signature and clef define, dumps whole pools, and manages the persisted
//! note-naming preference.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use notedrill_cli::commands;

/// Notedrill - Random Note Prompts for Practice
#[derive(Parser)]
#[command(name = "notedrill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw random note prompts for a key and clef
    Prompt {
        /// Key signature (C, G, D, A, E, F, Bb, Eb, Ab)
        #[arg(short, long)]
        key: String,

        /// Clef (treble, bass, alto, tenor)
        #[arg(short, long)]
        clef: String,

        /// Number of prompts to draw
        #[arg(long, default_value_t = 1)]
        count: u32,

        /// Seed for a reproducible prompt stream
        #[arg(long)]
        seed: Option<u64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the full candidate pool for a key and clef
    Pool {
        /// Key signature (C, G, D, A, E, F, Bb, Eb, Ab)
        #[arg(short, long)]
        key: String,

        /// Clef (treble, bass, alto, tenor)
        #[arg(short, long)]
        clef: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show or change the persisted note-naming preference
    Naming {
        /// Switch to this naming system (letters, solfege)
        #[arg(long)]
        set: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prompt {
            key,
            clef,
            count,
            seed,
            json,
        } => commands::prompt::run(&key, &clef, count, seed, json),
        Commands::Pool { key, clef, json } => commands::pool::run(&key, &clef, json),
        Commands::Naming { set, json } => commands::naming::run(set.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
