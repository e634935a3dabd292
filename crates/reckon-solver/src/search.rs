use std::collections::{HashSet, VecDeque};

use reckon_core::{Difficulty, Numbers, Operation, Step, numbers::canonical};

use crate::{Solution, find_valid_moves};

/// Statistics collected during a search.
///
/// # Examples
///
/// ```
/// use reckon_core::Operation;
/// use reckon_solver::SearchSolver;
///
/// let solver = SearchSolver::new(&[Operation::Add]);
/// let mut stats = solver.new_stats();
/// let solution = solver.solve_with_stats(&[1, 2, 4], 7, &mut stats);
///
/// assert_eq!(solution.map(|s| s.len()), Some(2));
/// assert!(stats.expanded_states() >= 2);
/// assert!(stats.visited_states() >= stats.expanded_states());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    expanded_states: usize,
    visited_states: usize,
}

impl SearchStats {
    /// Returns how many states had their moves enumerated.
    #[must_use]
    pub fn expanded_states(&self) -> usize {
        self.expanded_states
    }

    /// Returns how many distinct states were recorded as visited.
    ///
    /// States are distinct when their sorted values differ.
    #[must_use]
    pub fn visited_states(&self) -> usize {
        self.visited_states
    }
}

#[derive(Debug)]
struct Node {
    numbers: Numbers,
    via: Option<(usize, Step)>,
}

/// A breadth-first solver over multiset states.
///
/// Starting from the given numbers, every valid move (see [`find_valid_moves`])
/// produces a successor multiset. States are deduplicated by their sorted
/// values, so reaching the same multiset through a different move order is
/// explored once. The first move found whose result equals the target ends the
/// search; since states are explored level by level, the solution has the
/// fewest possible moves.
///
/// # Examples
///
/// ```
/// use reckon_core::Difficulty;
/// use reckon_solver::SearchSolver;
///
/// let solver = SearchSolver::for_difficulty(Difficulty::Hard);
///
/// // Already solved: no move needed.
/// assert_eq!(solver.solve(&[4, 25, 9], 25).map(|s| s.len()), Some(0));
///
/// // 25 * 4 = 100, 100 + 9 = 109
/// let solution = solver.solve(&[4, 25, 9], 109).expect("reachable");
/// assert_eq!(solution.len(), 2);
///
/// // Unreachable targets are reported as `None`.
/// assert_eq!(solver.solve(&[2, 3], 100), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSolver {
    operations: Vec<Operation>,
}

impl SearchSolver {
    /// Creates a solver restricted to the given operations.
    ///
    /// The operation order determines the move enumeration order and thus which
    /// of several equally short solutions is returned.
    #[must_use]
    pub fn new(operations: &[Operation]) -> Self {
        Self {
            operations: operations.to_vec(),
        }
    }

    /// Creates a solver using the operations allowed by a difficulty tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config().operations)
    }

    /// Returns the allowed operations.
    #[must_use]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Creates an empty statistics object.
    #[must_use]
    pub fn new_stats(&self) -> SearchStats {
        SearchStats::default()
    }

    /// Finds a shortest solution from `numbers` to `target`.
    ///
    /// Returns `Some` with an empty solution if `target` is already present,
    /// and `None` if no sequence of moves produces it.
    #[must_use]
    pub fn solve(&self, numbers: &[i64], target: i64) -> Option<Solution> {
        let mut stats = self.new_stats();
        self.solve_with_stats(numbers, target, &mut stats)
    }

    /// Finds a shortest solution and accumulates search statistics.
    ///
    /// See [`solve`](Self::solve) for the meaning of the return value.
    pub fn solve_with_stats(
        &self,
        numbers: &[i64],
        target: i64,
        stats: &mut SearchStats,
    ) -> Option<Solution> {
        if numbers.contains(&target) {
            return Some(Solution::default());
        }

        let mut nodes = vec![Node {
            numbers: numbers.iter().copied().collect(),
            via: None,
        }];
        let mut visited = HashSet::from([canonical(numbers)]);
        let mut queue = VecDeque::from([0]);

        let found = 'search: {
            while let Some(index) = queue.pop_front() {
                stats.expanded_states += 1;
                let current = nodes[index].numbers.clone();
                for step in find_valid_moves(&current, &self.operations) {
                    if step.result == target {
                        break 'search Some(trace(&nodes, index, step));
                    }
                    let Some(next) = step.reduce(&current) else {
                        continue;
                    };
                    if visited.insert(canonical(&next)) {
                        nodes.push(Node {
                            numbers: next,
                            via: Some((index, step)),
                        });
                        queue.push_back(nodes.len() - 1);
                    }
                }
            }
            None
        };

        stats.visited_states += visited.len();
        found
    }
}

fn trace(nodes: &[Node], mut index: usize, last: Step) -> Solution {
    let mut steps = vec![last];
    while let Some((parent, step)) = nodes[index].via {
        steps.push(step);
        index = parent;
    }
    steps.reverse();
    Solution::new(steps)
}

/// Finds a shortest solution from `numbers` to `target` using `operations`.
///
/// The result is empty both when `target` is already present and when it is
/// unreachable; use [`SearchSolver::solve`] to tell the two apart.
#[must_use]
pub fn shortest_solution(numbers: &[i64], target: i64, operations: &[Operation]) -> Vec<Step> {
    SearchSolver::new(operations)
        .solve(numbers, target)
        .map(Vec::from)
        .unwrap_or_default()
}
