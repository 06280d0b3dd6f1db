//! Single-cell hint derivation.

use derive_more::{Display, IsVariant};
use kaidoku_core::{Digit, DigitGrid, Position};

use crate::{backtrack, validator};

/// Outcome of a hint request.
///
/// The three variants disambiguate the cases a caller needs to present
/// differently: a board with nothing left to reveal, a board that cannot be
/// completed, and an actual placement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Hint {
    /// The board is fully populated and valid; there is nothing to reveal.
    #[display("already solved")]
    AlreadySolved,
    /// The board has no completion under the current entries.
    #[display("unsolvable")]
    Unsolvable,
    /// Reveal `digit` at `pos`.
    #[display("place {digit} at {pos}")]
    Placement {
        /// The first empty cell in row-major order.
        pos: Position,
        /// The digit a solution puts there.
        digit: Digit,
    },
}

/// Derives a hint for the grid.
///
/// Solves a copy of the grid; on success the hint reveals the solved value of
/// the first empty cell (row-major order) of the *original* grid. The grid
/// itself is never mutated.
///
/// # Examples
///
/// ```
/// use kaidoku_core::{Digit, DigitGrid, Position};
/// use kaidoku_solver::{Hint, next_hint};
///
/// let grid = DigitGrid::new();
/// let hint = next_hint(&grid);
/// assert!(matches!(hint, Hint::Placement { pos, .. } if pos == Position::new(0, 0)));
/// ```
#[must_use]
pub fn next_hint(grid: &DigitGrid) -> Hint {
    let Some(pos) = grid.empty_positions().next() else {
        return if validator::is_valid(grid) {
            Hint::AlreadySolved
        } else {
            Hint::Unsolvable
        };
    };

    let mut solved = grid.clone();
    if !backtrack::solve(&mut solved) {
        return Hint::Unsolvable;
    }
    match solved.get(pos) {
        Some(digit) => Hint::Placement { pos, digit },
        None => Hint::Unsolvable,
    }
}
