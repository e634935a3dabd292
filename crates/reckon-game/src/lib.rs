//! Game session management for target-number puzzles.
//!
//! A [`Game`] holds the live state of one puzzle: the numbers in play, the
//! player's selection and armed operation, the move history, and the
//! mode-specific timer and challenge counters. It is a plain value owned by the
//! caller; every operation runs to completion and reports what happened.
//!
//! # Examples
//!
//! ```
//! use reckon_core::{Difficulty, Operation};
//! use reckon_game::{Game, GameStatus};
//!
//! let mut game = Game::with_numbers(Difficulty::Easy, 25, vec![10, 15, 5]);
//!
//! game.toggle_number(0);
//! game.toggle_number(1);
//! let outcome = game.toggle_operation(Operation::Add);
//!
//! assert!(outcome.is_won());
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.numbers(), &[5, 25]);
//!
//! assert!(game.undo());
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.numbers(), &[10, 15, 5]);
//! ```

pub use self::{game::*, mode::*, selection::*, status::*};

mod game;
mod mode;
mod selection;
mod status;
