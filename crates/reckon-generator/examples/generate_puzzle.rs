//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty tier
//! - Generate a puzzle from a random seed, a hex seed, or a phrase
//! - Display the puzzle, its shortest solution, and its seed
//! - Sample many puzzles to inspect the generator's behavior
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Select the difficulty and reproduce a puzzle from a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --phrase "monday"
//! ```
//!
//! Sample many puzzles and report solution lengths and fallback usage:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --samples 10000
//! ```

use std::{collections::BTreeMap, process};

use clap::Parser;
use reckon_core::Difficulty;
use reckon_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier (easy, medium, or hard).
    #[arg(short, long, value_name = "DIFFICULTY", default_value = "easy")]
    difficulty: Difficulty,

    /// Seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of random puzzles to sample for statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty);

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_stats(&generator, samples);
        return;
    }

    let seed = match (args.seed, args.phrase) {
        (Some(seed), _) => seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(&phrase),
        (None, None) => PuzzleSeed::random(),
    };
    print_puzzle(&generator.generate_with_seed(seed));
}

fn print_stats(generator: &PuzzleGenerator, samples: usize) {
    let puzzles = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect::<Vec<_>>();

    let mut lengths = BTreeMap::<usize, usize>::new();
    for puzzle in &puzzles {
        *lengths.entry(puzzle.solution.len()).or_default() += 1;
    }
    let relaxed = puzzles.iter().filter(|puzzle| puzzle.relaxed).count();
    let attempts: usize = puzzles.iter().map(|puzzle| puzzle.attempts).sum();

    println!("Difficulty: {}", generator.difficulty());
    println!("Samples: {samples}");
    println!();
    println!("Solution lengths:");
    for (len, count) in lengths {
        println!("  {len}: {count}");
    }
    println!();
    println!("Relaxed: {relaxed}");
    #[expect(clippy::cast_precision_loss)]
    let mean_attempts = attempts as f64 / samples as f64;
    println!("Mean attempts: {mean_attempts:.2}");
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Numbers:");
    println!("  {:?}", puzzle.numbers);
    println!();
    println!("Target:");
    println!("  {}", puzzle.target);
    println!();
    println!("Solution:");
    for step in &puzzle.solution {
        println!("  {step}");
    }
    println!();
    println!("Stats:");
    println!("  attempts: {}", puzzle.attempts);
    println!("  relaxed: {}", puzzle.relaxed);
}
