//! Pool command implementation
//!
//! Prints the full candidate pool for a key + clef in its deterministic
//! order, the same order a UI would use for an answer-choice list.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use notedrill_theory::{Clef, KeySignature, Pool};

use super::json_output::{NoteEntry, PoolOutput};

/// Run the pool command
///
/// # Arguments
/// * `key` - Key signature spelling (C, G, D, A, E, F, Bb, Eb, Ab)
/// * `clef` - Clef name (treble, bass, alto, tenor)
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(key: &str, clef: &str, json_output: bool) -> Result<ExitCode> {
    let key: KeySignature = key.parse()?;
    let clef: Clef = clef.parse()?;

    let pool = Pool::build(key, clef);
    let naming = super::current_naming();

    if json_output {
        let output = PoolOutput {
            key,
            clef,
            naming,
            notes: pool
                .iter()
                .map(|&spec| NoteEntry::new(spec, naming))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} major, {} clef ({} notes)",
        "Pool:".cyan().bold(),
        key,
        clef,
        pool.len()
    );
    let (low, high) = clef.octave_range();
    let (low_block, high_block) = pool.as_slice().split_at(pool.len() / 2);
    for (octave, block) in [(low, low_block), (high, high_block)] {
        println!("  {}", format!("octave {}", octave).dimmed());
        for spec in block {
            println!("    {}", notedrill_naming::spec_label(*spec, naming));
        }
    }
    Ok(ExitCode::SUCCESS)
}
