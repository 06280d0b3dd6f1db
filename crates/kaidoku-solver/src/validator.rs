//! Constraint checking over a digit grid.
//!
//! All functions here are pure queries: they never mutate the grid, and they
//! are cheap enough to re-run on every player edit (each cell has exactly 20
//! peers, so a full-board conflict scan touches at most 81 × 20 cells).

use std::collections::HashMap;

use kaidoku_core::{Digit, DigitGrid, DigitSet, Position};
use tinyvec::ArrayVec;

/// The conflicting peers of a single cell.
///
/// A cell has at most 20 peers, so the list is a fixed-capacity vector.
pub type ConflictList = ArrayVec<[Position; 20]>;

/// All conflicts on a board, keyed by the occupied cell that participates.
///
/// Conflict detection is symmetric: if `a` appears in `map[b]`, then `b`
/// appears in `map[a]`. Cells without conflicts are absent from the map.
pub type ConflictMap = HashMap<Position, ConflictList>;

/// Returns `true` if no *other* cell in the same row, column, or box holds
/// `digit`.
///
/// The cell at `pos` is excluded from the comparison, so a cell is always
/// legally holding the value it currently shows. The cell need not be empty.
///
/// # Examples
///
/// ```
/// use kaidoku_core::{Digit, DigitGrid, Position};
/// use kaidoku_solver::is_legal;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// assert!(!is_legal(&grid, Position::new(0, 8), Digit::D5)); // same row
/// assert!(!is_legal(&grid, Position::new(8, 0), Digit::D5)); // same column
/// assert!(!is_legal(&grid, Position::new(2, 2), Digit::D5)); // same box
/// assert!(is_legal(&grid, Position::new(4, 4), Digit::D5));
/// assert!(is_legal(&grid, Position::new(0, 0), Digit::D5)); // self excluded
/// ```
#[must_use]
pub fn is_legal(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.peers()
        .into_iter()
        .all(|peer| grid.get(peer) != Some(digit))
}

/// Returns every peer of `pos` holding the same digit as `pos`.
///
/// An empty cell has no conflicts. All equal-valued peers are listed, not
/// just the first found.
#[must_use]
pub fn conflicts_of(grid: &DigitGrid, pos: Position) -> ConflictList {
    let mut conflicts = ConflictList::new();
    let Some(digit) = grid.get(pos) else {
        return conflicts;
    };
    for peer in pos.peers() {
        if grid.get(peer) == Some(digit) {
            conflicts.push(peer);
        }
    }
    conflicts
}

/// Returns the conflicts of every occupied cell that has at least one.
///
/// The result drives live feedback in a UI layer and the [`is_valid`] check.
#[must_use]
pub fn all_conflicts(grid: &DigitGrid) -> ConflictMap {
    let mut map = ConflictMap::new();
    for pos in Position::ALL {
        let conflicts = conflicts_of(grid, pos);
        if !conflicts.is_empty() {
            map.insert(pos, conflicts);
        }
    }
    map
}

/// Returns `true` if every occupied cell has zero conflicts.
///
/// Empty cells never invalidate a grid.
#[must_use]
pub fn is_valid(grid: &DigitGrid) -> bool {
    Position::ALL
        .into_iter()
        .all(|pos| conflicts_of(grid, pos).is_empty())
}

/// Returns `true` if the grid is fully populated and valid.
#[must_use]
pub fn is_solved(grid: &DigitGrid) -> bool {
    grid.is_full() && is_valid(grid)
}

/// Returns the digits that are currently legal at an empty cell.
///
/// Occupied cells have no candidates; the result is [`DigitSet::EMPTY`].
///
/// # Examples
///
/// ```
/// use kaidoku_core::{Digit, DigitGrid, DigitSet, Position};
/// use kaidoku_solver::candidates;
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 1), Some(Digit::D2));
/// grid.set(Position::new(1, 1), Some(Digit::D7));
///
/// let set = candidates(&grid, Position::new(0, 0));
/// assert!(!set.contains(Digit::D2)); // row peer
/// assert!(!set.contains(Digit::D7)); // box peer
/// assert_eq!(set.len(), 7);
///
/// assert_eq!(candidates(&grid, Position::new(0, 1)), DigitSet::EMPTY);
/// ```
#[must_use]
pub fn candidates(grid: &DigitGrid, pos: Position) -> DigitSet {
    if grid.get(pos).is_some() {
        return DigitSet::EMPTY;
    }
    let mut set = DigitSet::FULL;
    for peer in pos.peers() {
        if let Some(digit) = grid.get(peer) {
            set.remove(digit);
        }
    }
    set
}
