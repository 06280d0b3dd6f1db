//! Constraint validation and backtracking search for the kaidoku engine.
//!
//! This crate provides the two halves of the constraint-satisfaction engine:
//!
//! - [`validator`]: legality checks, conflict enumeration, and candidate
//!   computation over a [`DigitGrid`](kaidoku_core::DigitGrid).
//! - [`backtrack`]: exhaustive depth-first search that fills a grid
//!   ([`solve`]), proves solvability ([`is_solvable`]), and counts solutions
//!   up to a cap ([`count_solutions`], [`has_unique_solution`]).
//! - [`hint`]: single-cell hint derivation built on the solver.
//!
//! Search failure is an ordinary boolean outcome, never an error: an
//! unsolvable or contradictory grid yields `false` (or a zero count), and the
//! caller decides what to do with it.
//!
//! # Examples
//!
//! ```
//! use kaidoku_core::DigitGrid;
//! use kaidoku_solver::{count_solutions, is_solved, solve};
//!
//! // The empty grid is massively under-constrained...
//! assert!(count_solutions(&DigitGrid::new(), 2) >= 2);
//!
//! // ...but still solvable.
//! let mut grid = DigitGrid::new();
//! assert!(solve(&mut grid));
//! assert!(is_solved(&grid));
//! ```

pub mod backtrack;
pub mod hint;
pub mod validator;

pub use self::{
    backtrack::{count_solutions, has_unique_solution, is_solvable, solve, solve_with_order},
    hint::{Hint, next_hint},
    validator::{
        ConflictList, ConflictMap, all_conflicts, candidates, conflicts_of, is_legal, is_solved,
        is_valid,
    },
};
