//! Terminal front end for Reckon puzzles.
//!
//! The `reckon` binary generates puzzles, solves arbitrary inputs, and runs an
//! interactive game on standard input. This library holds its argument
//! definitions and the play loop so they can be tested without a terminal.

pub mod args;
pub mod command;
pub mod play;

pub use self::error::CliError;

mod error;
