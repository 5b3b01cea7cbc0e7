//! Prompt command implementation
//!
//! Builds the candidate pool for a key + clef and draws uniform random
//! prompts from it.

use anyhow::Result;
use colored::Colorize;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::process::ExitCode;

use notedrill_theory::{Clef, KeySignature, NoteSpec, Pool};

use super::json_output::{NoteEntry, PromptOutput};

/// Run the prompt command
///
/// # Arguments
/// * `key` - Key signature spelling (C, G, D, A, E, F, Bb, Eb, Ab)
/// * `clef` - Clef name (treble, bass, alto, tenor)
/// * `count` - Number of prompts to draw
/// * `seed` - Optional seed for a reproducible draw stream
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    key: &str,
    clef: &str,
    count: u32,
    seed: Option<u64>,
    json_output: bool,
) -> Result<ExitCode> {
    let key: KeySignature = key.parse()?;
    let clef: Clef = clef.parse()?;

    let pool = Pool::build(key, clef);
    let prompts = draw(&pool, count, seed);
    let naming = super::current_naming();

    if json_output {
        let output = PromptOutput {
            key,
            clef,
            naming,
            seed,
            prompts: prompts
                .iter()
                .map(|&spec| NoteEntry::new(spec, naming))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} major, {} clef",
        "Drawing from:".cyan().bold(),
        key,
        clef
    );
    if let Some(seed) = seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }
    for (i, prompt) in prompts.iter().enumerate() {
        let label = notedrill_naming::spec_label(*prompt, naming);
        println!("  {:>3}. {}", i + 1, label.green().bold());
    }
    Ok(ExitCode::SUCCESS)
}

/// Draws `count` prompts, seeded when a seed is given, ambient otherwise.
fn draw(pool: &Pool, count: u32, seed: Option<u64>) -> Vec<NoteSpec> {
    match seed {
        Some(seed) => {
            let mut rng = Pcg32::seed_from_u64(seed);
            (0..count).map(|_| pool.pick(&mut rng)).collect()
        }
        None => {
            let mut rng = rand::thread_rng();
            (0..count).map(|_| pool.pick(&mut rng)).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_seeded_is_reproducible() {
        let pool = Pool::build(KeySignature::G, Clef::Treble);
        let a = draw(&pool, 20, Some(99));
        let b = draw(&pool, 20, Some(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_returns_requested_count() {
        let pool = Pool::build(KeySignature::F, Clef::Bass);
        assert_eq!(draw(&pool, 0, None).len(), 0);
        assert_eq!(draw(&pool, 5, None).len(), 5);
        assert_eq!(draw(&pool, 5, Some(1)).len(), 5);
    }

    #[test]
    fn test_draw_members_come_from_pool() {
        let pool = Pool::build(KeySignature::EFlat, Clef::Alto);
        for prompt in draw(&pool, 50, Some(3)) {
            assert!(pool.iter().any(|candidate| *candidate == prompt));
        }
    }
}
