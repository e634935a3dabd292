use std::{
    fmt::{self, Display},
    slice,
};

use reckon_core::{Numbers, Step};

/// An ordered sequence of steps, each typically consuming the result of an
/// earlier one, ending at the step whose result is the target.
///
/// An empty solution means no move was needed because the target was already
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    /// Creates a solution from its steps.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Returns the steps in application order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no move is needed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the first step, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    /// Returns an iterator over the steps.
    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Applies every step to `numbers` in order and returns the final multiset.
    ///
    /// Returns `None` if some step's operands are not available at the point it
    /// is applied.
    #[must_use]
    pub fn replay(&self, numbers: &[i64]) -> Option<Numbers> {
        let mut current: Numbers = numbers.iter().copied().collect();
        for step in &self.steps {
            current = step.reduce(&current)?;
        }
        Some(current)
    }
}

impl From<Vec<Step>> for Solution {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(steps)
    }
}

impl From<Solution> for Vec<Step> {
    fn from(solution: Solution) -> Self {
        solution.steps
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use reckon_core::Operation;

    use super::*;

    fn step(operation: Operation, a: i64, b: i64) -> Step {
        Step::new(operation, a, b).unwrap()
    }

    #[test]
    fn test_replay_chains_results() {
        let solution = Solution::new(vec![
            step(Operation::Add, 3, 7),
            step(Operation::Multiply, 10, 4),
        ]);
        let last = solution.replay(&[4, 7, 3, 9]).unwrap();
        assert_eq!(last.as_slice(), &[9, 40]);
    }

    #[test]
    fn test_replay_fails_on_missing_operand() {
        let solution = Solution::new(vec![step(Operation::Add, 3, 7)]);
        assert!(solution.replay(&[3, 8]).is_none());
    }

    #[test]
    fn test_empty_solution() {
        let solution = Solution::default();
        assert!(solution.is_empty());
        assert_eq!(solution.first(), None);
        assert_eq!(solution.replay(&[1, 2]).unwrap().as_slice(), &[1, 2]);
        assert_eq!(solution.to_string(), "");
    }

    #[test]
    fn test_display_one_step_per_line() {
        let solution = Solution::new(vec![
            step(Operation::Add, 3, 7),
            step(Operation::Subtract, 12, 10),
        ]);
        assert_eq!(solution.to_string(), "3 + 7 = 10\n12 - 10 = 2");
    }
}
