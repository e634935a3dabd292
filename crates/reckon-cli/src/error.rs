use std::io;

/// Errors reported by the `reckon` binary.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(io::Error),
    /// `solve` was asked for a target it cannot reach.
    #[display("no solution reaches {target} from {numbers:?}")]
    Unsolvable {
        /// Starting numbers.
        numbers: Vec<i64>,
        /// Requested target.
        target: i64,
    },
}
