//! Binary arithmetic operations.

use std::str::FromStr;

/// One of the four binary operations a player can apply to two numbers.
///
/// All results are exact integers. An operation that would leave the integers,
/// produce a non-positive difference, or overflow is *invalid*, which is
/// reported as `None` rather than as an error.
///
/// # Examples
///
/// ```
/// use reckon_core::Operation;
///
/// assert_eq!(Operation::Add.apply(5, 3), Some(8));
/// assert_eq!(Operation::Subtract.apply(3, 10), None);
/// assert_eq!(Operation::Multiply.apply(5, 0), Some(0));
/// assert_eq!(Operation::Divide.apply(0, 5), Some(0));
/// assert!(!Operation::Divide.is_valid(7, 2));
///
/// let op: Operation = "*".parse()?;
/// assert_eq!(op.to_string(), "*");
/// # Ok::<(), reckon_core::ParseOperationError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Operation {
    /// Addition, always valid.
    #[display("+")]
    Add,
    /// Subtraction, valid only when the first operand is strictly greater.
    #[display("-")]
    Subtract,
    /// Multiplication, always valid.
    #[display("*")]
    Multiply,
    /// Division, valid only when the divisor is non-zero and divides exactly.
    #[display("/")]
    Divide,
}

impl Operation {
    /// All operations, in the order difficulty tiers enable them.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns `true` if swapping the operands never changes the outcome.
    ///
    /// Non-commutative operations (subtraction and division) are the ones for
    /// which both operand orders are worth trying.
    #[must_use]
    pub const fn is_commutative(self) -> bool {
        matches!(self, Self::Add | Self::Multiply)
    }

    /// Applies the operation to `a` and `b`, in that order.
    ///
    /// Returns `None` if the operation is invalid for these operands:
    ///
    /// - subtraction requires `a > b` (no zero or negative results)
    /// - division requires `b != 0` and `a` to be an exact multiple of `b`
    /// - any result that does not fit in an `i64` is invalid
    #[must_use]
    pub const fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => {
                if a > b {
                    a.checked_sub(b)
                } else {
                    None
                }
            }
            Self::Multiply => a.checked_mul(b),
            Self::Divide => match a.checked_rem(b) {
                Some(0) => a.checked_div(b),
                _ => None,
            },
        }
    }

    /// Returns `true` if [`apply`](Self::apply) yields a result.
    #[must_use]
    pub const fn is_valid(self, a: i64, b: i64) -> bool {
        self.apply(a, b).is_some()
    }
}

/// Error returned when parsing an [`Operation`] from an unknown symbol.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown operation symbol: {input:?}")]
pub struct ParseOperationError {
    input: String,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "x" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(ParseOperationError {
                input: other.to_owned(),
            }),
        }
    }
}
