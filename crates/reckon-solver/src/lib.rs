//! Move enumeration and shortest-solution search for target-number puzzles.
//!
//! - [`find_valid_moves`] lists every valid pairwise move over a multiset of
//!   numbers, in a fixed, reproducible order.
//! - [`SearchSolver`] runs a breadth-first search over multiset states to find
//!   a shortest sequence of moves that produces a target number.
//!
//! # Examples
//!
//! ```
//! use reckon_core::Operation;
//! use reckon_solver::SearchSolver;
//!
//! let solver = SearchSolver::new(&[Operation::Add, Operation::Subtract]);
//! let solution = solver.solve(&[3, 7, 12], 22).expect("3 + 7 + 12 = 22");
//! assert_eq!(solution.len(), 2);
//!
//! let last = solution.replay(&[3, 7, 12]).expect("steps apply in order");
//! assert!(last.contains(&22));
//! ```

pub use self::{moves::*, search::*, solution::*};

mod moves;
mod search;
mod solution;
