//! Core data structures for arithmetic target-number puzzles.
//!
//! This crate provides the vocabulary shared by the solver, the generator, and
//! the game session crates.
//!
//! # Overview
//!
//! 1. **Arithmetic** - The four binary operations and their validity rules
//!    - [`operation`]: [`Operation`] with integer-only, exact semantics
//!
//! 2. **Moves** - One pairwise reduction of the numbers in play
//!    - [`step`]: [`Step`], the shape shared by search moves, solution steps,
//!      and player history
//!    - [`numbers`]: [`Numbers`], the small multiset type used by the search
//!
//! 3. **Configuration** - Immutable difficulty tiers
//!    - [`difficulty`]: [`Difficulty`] and its [`DifficultyConfig`]
//!
//! # Examples
//!
//! ```
//! use reckon_core::{Operation, Step};
//!
//! assert_eq!(Operation::Subtract.apply(10, 3), Some(7));
//! assert_eq!(Operation::Subtract.apply(5, 5), None);
//! assert_eq!(Operation::Divide.apply(10, 3), None);
//!
//! let step = Step::new(Operation::Add, 5, 10).expect("addition is always valid");
//! let next = step.reduce(&[5, 10, 15]).expect("operands are present");
//! assert_eq!(next.as_slice(), &[15, 15]);
//! ```

pub mod difficulty;
pub mod numbers;
pub mod operation;
pub mod step;

pub use self::{
    difficulty::{Difficulty, DifficultyConfig, ParseDifficultyError},
    numbers::Numbers,
    operation::{Operation, ParseOperationError},
    step::Step,
};
