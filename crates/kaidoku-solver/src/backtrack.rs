//! Exhaustive backtracking search over a digit grid.
//!
//! The search scans cells in row-major order, places a tentative digit at the
//! first empty cell, recurses, and undoes the placement on failure. Depth is
//! bounded by the number of empty cells (at most 81), so native recursion is
//! sufficient.
//!
//! Callers that need the original grid preserved must operate on a copy:
//! [`solve`] mutates in place and leaves the grid partially mutated when it
//! fails.

use kaidoku_core::{Digit, DigitGrid, Position};

use crate::validator;

/// Solves the grid in place, trying digits in ascending order.
///
/// Returns `true` and leaves the grid fully populated when a solution exists.
/// Returns `false` when no completion satisfies the constraints; the grid is
/// then in an unspecified partially-mutated state.
///
/// A grid that already contains a conflict is rejected up front. Backtracking
/// alone would not notice a duplicate between two pre-filled cells, so the
/// validity check is explicit rather than assumed.
///
/// For a puzzle with a unique solution the result is that solution; for an
/// ambiguous grid the ascending digit order determines which solution is
/// found first.
///
/// # Examples
///
/// ```
/// use kaidoku_core::DigitGrid;
/// use kaidoku_solver::{is_solved, solve};
///
/// let mut grid = DigitGrid::new();
/// assert!(solve(&mut grid));
/// assert!(is_solved(&grid));
/// ```
pub fn solve(grid: &mut DigitGrid) -> bool {
    solve_with_order(grid, &mut || Digit::ALL)
}

/// Solves the grid in place with a caller-supplied candidate order.
///
/// `order` is invoked once per visited empty cell and returns the digit order
/// to try at that cell. The generator passes a shuffling closure here to
/// produce random complete grids; [`solve`] passes ascending order.
///
/// Returns `false` for an unsolvable or already-contradictory grid, leaving
/// the grid partially mutated.
pub fn solve_with_order<F>(grid: &mut DigitGrid, order: &mut F) -> bool
where
    F: FnMut() -> [Digit; 9],
{
    validator::is_valid(grid) && fill_from(grid, 0, order)
}

/// Returns `true` if the grid has at least one solution.
///
/// Operates on a copy; the input grid is never mutated.
#[must_use]
pub fn is_solvable(grid: &DigitGrid) -> bool {
    let mut copy = grid.clone();
    solve(&mut copy)
}

/// Counts the solutions of the grid, short-circuiting at `cap`.
///
/// Returns a value in `0..=cap`. A contradictory grid has zero solutions.
/// Operates on a copy; the input grid is never mutated.
///
/// # Examples
///
/// ```
/// use kaidoku_core::DigitGrid;
/// use kaidoku_solver::count_solutions;
///
/// // A blank grid trivially has many solutions.
/// assert_eq!(count_solutions(&DigitGrid::new(), 2), 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, cap: u32) -> u32 {
    if cap == 0 || !validator::is_valid(grid) {
        return 0;
    }
    let mut copy = grid.clone();
    count_from(&mut copy, 0, cap)
}

/// Returns `true` if the grid has exactly one solution.
#[must_use]
pub fn has_unique_solution(grid: &DigitGrid) -> bool {
    count_solutions(grid, 2) == 1
}

fn next_empty(grid: &DigitGrid, from: usize) -> Option<Position> {
    Position::ALL[from..]
        .iter()
        .copied()
        .find(|pos| grid.get(*pos).is_none())
}

fn fill_from<F>(grid: &mut DigitGrid, from: usize, order: &mut F) -> bool
where
    F: FnMut() -> [Digit; 9],
{
    let Some(pos) = next_empty(grid, from) else {
        return true;
    };
    for digit in order() {
        if validator::is_legal(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, pos.index() + 1, order) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

fn count_from(grid: &mut DigitGrid, from: usize, cap: u32) -> u32 {
    let Some(pos) = next_empty(grid, from) else {
        return 1;
    };
    let mut count = 0;
    for digit in Digit::ALL {
        if validator::is_legal(grid, pos, digit) {
            grid.set(pos, Some(digit));
            count += count_from(grid, pos.index() + 1, cap - count);
            grid.set(pos, None);
            if count >= cap {
                break;
            }
        }
    }
    count
}
