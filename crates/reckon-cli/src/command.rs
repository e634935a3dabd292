//! Commands typed at the `play` prompt.

use std::str::FromStr;

use reckon_core::Operation;

/// One line of input at the `play` prompt.
///
/// Number positions are 1-based as displayed; the parsed values are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Combine two numbers, e.g. `1 + 3`.
    Move {
        /// Position of the first operand.
        first: usize,
        /// Operation to apply.
        operation: Operation,
        /// Position of the second operand.
        second: usize,
    },
    /// Select or deselect one number, e.g. `2`.
    Pick(usize),
    /// Arm or disarm an operation, e.g. `*`.
    Arm(Operation),
    /// Take back the last move.
    Undo,
    /// Return to the starting numbers.
    Restart,
    /// Move on to a new puzzle.
    Next,
    /// Suggest a move.
    Hint,
    /// Show a shortest solution from the starting numbers.
    Solution,
    /// Show the available commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Error returned for input that is not a [`PlayCommand`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized command: {input:?} (type ? for help)")]
pub struct ParsePlayCommandError {
    input: String,
}

impl FromStr for PlayCommand {
    type Err = ParsePlayCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePlayCommandError {
            input: s.to_owned(),
        };
        let command = match s.trim() {
            "u" | "undo" => Self::Undo,
            "r" | "restart" => Self::Restart,
            "n" | "next" | "new" => Self::Next,
            "h" | "hint" => Self::Hint,
            "s" | "solution" => Self::Solution,
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => match tokenize(s).as_slice() {
                [token] => match parse_position(token) {
                    Some(index) => Self::Pick(index),
                    None => Self::Arm(token.parse().map_err(|_| err())?),
                },
                [first, operation, second] => Self::Move {
                    first: parse_position(first).ok_or_else(err)?,
                    operation: operation.parse().map_err(|_| err())?,
                    second: parse_position(second).ok_or_else(err)?,
                },
                _ => return Err(err()),
            },
        };
        Ok(command)
    }
}

/// Splits input into runs of digits, runs of letters, and single symbols, so
/// that `1+3`, `4x2` and `1 + 3` read alike.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = vec![];
    for word in s.split_whitespace() {
        let mut start = 0;
        let mut chars = word.char_indices().peekable();
        while let Some((_, ch)) = chars.next() {
            let end = chars.peek().map_or(word.len(), |&(pos, _)| pos);
            let joins_next = chars
                .peek()
                .is_some_and(|&(_, next)| CharClass::of(ch).joins(CharClass::of(next)));
            if !joins_next {
                tokens.push(&word[start..end]);
                start = end;
            }
        }
    }
    tokens
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit,
    Letter,
    Symbol,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            Self::Digit
        } else if ch.is_ascii_alphabetic() && ch != 'x' {
            Self::Letter
        } else {
            Self::Symbol
        }
    }

    fn joins(self, next: Self) -> bool {
        self == next && self != Self::Symbol
    }
}

fn parse_position(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}
