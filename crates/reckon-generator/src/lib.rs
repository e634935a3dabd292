//! Guaranteed-solvable puzzle generation.
//!
//! A puzzle is built forward from its starting numbers: a few random valid
//! moves are simulated and the target is picked among the resulting values, so
//! every target is reachable by construction. The breadth-first solver then
//! records a shortest solution from the starting numbers for player
//! assistance.
//!
//! Generation is driven by a [`PuzzleSeed`]. The same seed and difficulty
//! always produce the same puzzle.
//!
//! # Examples
//!
//! ```
//! use reckon_core::Difficulty;
//! use reckon_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let seed = PuzzleSeed::from_phrase("tuesday");
//! let puzzle = generator.generate_with_seed(seed);
//!
//! assert_eq!(puzzle.numbers.len(), 5);
//! assert!(!puzzle.initial_numbers.contains(&puzzle.target));
//! assert_eq!(puzzle, generator.generate_with_seed(seed));
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
