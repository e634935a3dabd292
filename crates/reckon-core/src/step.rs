//! A single pairwise reduction.

use crate::{Numbers, Operation, numbers::remove_first};

/// One application of an operation to two numbers, consuming both and
/// producing one result.
///
/// The operand order is the order the operation was actually applied in, which
/// for subtraction and division may be the reverse of the order the numbers
/// were picked in.
///
/// The same shape describes a candidate move found by the search, a step of a
/// solution, and a move recorded in a game's history.
///
/// # Examples
///
/// ```
/// use reckon_core::{Operation, Step};
///
/// let step = Step::new(Operation::Subtract, 10, 5).expect("10 - 5 is valid");
/// assert_eq!(step.result, 5);
/// assert_eq!(step.to_string(), "10 - 5 = 5");
/// assert!(Step::new(Operation::Subtract, 5, 10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{operand1} {operation} {operand2} = {result}")]
pub struct Step {
    /// The left-hand operand.
    pub operand1: i64,
    /// The right-hand operand.
    pub operand2: i64,
    /// The operation applied.
    pub operation: Operation,
    /// The result of `operand1 operation operand2`.
    pub result: i64,
}

impl Step {
    /// Creates a step if `operation` is valid for `operand1` and `operand2`.
    #[must_use]
    pub const fn new(operation: Operation, operand1: i64, operand2: i64) -> Option<Self> {
        match operation.apply(operand1, operand2) {
            Some(result) => Some(Self {
                operand1,
                operand2,
                operation,
                result,
            }),
            None => None,
        }
    }

    /// Returns the multiset left after applying this step to `numbers`.
    ///
    /// The first occurrence of `operand1` is removed, then the first remaining
    /// occurrence of `operand2`, and the result is appended. Duplicate values
    /// are interchangeable, so which physical duplicate is consumed does not
    /// matter.
    ///
    /// Returns `None` if either operand is missing.
    #[must_use]
    pub fn reduce(&self, numbers: &[i64]) -> Option<Numbers> {
        let mut next: Numbers = numbers.iter().copied().collect();
        if !remove_first(&mut next, self.operand1)
            || !remove_first(&mut next, self.operand2)
        {
            return None;
        }
        next.push(self.result);
        Some(next)
    }
}
