//! Command-line arguments.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use reckon_core::{Difficulty, Operation, ParseOperationError};
use reckon_game::GameMode;
use reckon_generator::PuzzleSeed;

/// Arithmetic target-number puzzles in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `reckon` binary.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a puzzle and print it.
    Generate {
        /// Difficulty tier (easy, medium, or hard).
        #[arg(short, long, value_name = "DIFFICULTY", default_value = "easy")]
        difficulty: Difficulty,

        /// How to seed the puzzle.
        #[command(flatten)]
        seed: SeedArgs,

        /// Print a shortest solution as well.
        #[arg(long)]
        show_solution: bool,
    },
    /// Find a shortest way to reach a target from the given numbers.
    Solve {
        /// Starting numbers.
        #[arg(required = true, value_name = "NUMBER")]
        numbers: Vec<i64>,

        /// Number to reach.
        #[arg(short, long, value_name = "NUMBER", allow_negative_numbers = true)]
        target: i64,

        /// Allowed operation symbols.
        #[arg(long, value_name = "SYMBOLS", default_value = "+-*/")]
        ops: OperationSet,
    },
    /// Play interactively.
    Play {
        /// Difficulty tier (easy, medium, or hard).
        #[arg(short, long, value_name = "DIFFICULTY", default_value = "easy")]
        difficulty: Difficulty,

        /// Game mode (classic, timer, or challenge).
        #[arg(short, long, value_name = "MODE", default_value = "classic")]
        mode: GameMode,

        /// How to seed the first puzzle.
        #[command(flatten)]
        seed: SeedArgs,
    },
}

/// Seed selection shared by subcommands that generate puzzles.
#[derive(Debug, Clone, clap::Args)]
pub struct SeedArgs {
    /// Seed as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    pub seed: Option<PuzzleSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    pub phrase: Option<String>,
}

impl SeedArgs {
    /// Returns the requested seed, if any.
    #[must_use]
    pub fn resolve(&self) -> Option<PuzzleSeed> {
        match (&self.seed, &self.phrase) {
            (Some(seed), _) => Some(*seed),
            (None, Some(phrase)) => Some(PuzzleSeed::from_phrase(phrase)),
            (None, None) => None,
        }
    }
}

/// A set of operations written as a run of symbols, such as `+-*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSet(Vec<Operation>);

impl OperationSet {
    /// Returns the operations in canonical order without duplicates.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.0
    }
}

impl FromStr for OperationSet {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut operations = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != ',')
            .map(|ch| ch.to_string().parse())
            .collect::<Result<Vec<Operation>, _>>()?;
        operations.sort_unstable();
        operations.dedup();
        Ok(Self(operations))
    }
}
