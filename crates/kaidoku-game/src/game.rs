use kaidoku_core::{Digit, DigitGrid, DigitSet, Position};
use kaidoku_generator::GeneratedPuzzle;
use kaidoku_solver::{ConflictMap, Hint, all_conflicts, candidates, is_solved, next_hint, solve};

use crate::{CellState, GameError};

/// A Sudoku game session.
///
/// Tracks given (generated) cells and player input separately. Player edits
/// are permissive: a conflicting digit is accepted and surfaced through
/// [`conflicts`](Self::conflicts) rather than rejected, matching a
/// live-feedback UI. Only edits to given cells are refused.
///
/// # Examples
///
/// ```
/// use kaidoku_game::Game;
/// use kaidoku_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let game = Game::new(puzzle);
///
/// assert!(!game.is_solved());
/// assert!(game.conflicts().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
}

impl Game {
    /// Creates a game from a generated puzzle.
    ///
    /// Every occupied cell of the problem grid becomes a given; the rest
    /// start empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem, solution, ..
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the solution grid the puzzle was carved from.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns a snapshot of the board as a plain digit grid.
    ///
    /// Givens and player-filled digits are indistinguishable in the result;
    /// this is the form the validator and solver operate on.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cell(pos).digit());
        }
        grid
    }

    /// Enters a digit at `pos`, replacing any previous player digit there.
    ///
    /// Conflicting digits are accepted; use [`conflicts`](Self::conflicts)
    /// for feedback.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        Ok(())
    }

    /// Clears the player digit at `pos`. Clearing an empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.cell(pos).is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.cells[pos.index()] = CellState::Empty;
        Ok(())
    }

    /// Clears every player-entered digit, restoring the initial puzzle.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns all conflicts on the current board.
    ///
    /// Intended to run after every edit; the scan is bounded by 81 cells
    /// with 20 peers each.
    #[must_use]
    pub fn conflicts(&self) -> ConflictMap {
        all_conflicts(&self.to_digit_grid())
    }

    /// Returns `true` if the board is fully populated without conflicts.
    ///
    /// Any valid completion counts, not just the generator's solution, so
    /// puzzles with multiple solutions are handled correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_solved(&self.to_digit_grid())
    }

    /// Returns the digits currently legal at an empty cell.
    ///
    /// Occupied cells (given or filled) have no candidates.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        candidates(&self.to_digit_grid(), pos)
    }

    /// Derives a hint for the current board.
    ///
    /// The hint respects player entries: it reveals a value consistent with a
    /// completion of the board as it stands, or reports the board solved or
    /// unsolvable.
    #[must_use]
    pub fn hint(&self) -> Hint {
        next_hint(&self.to_digit_grid())
    }

    /// Fills every free cell from a solution of the current board.
    ///
    /// Returns `false` and leaves the session untouched when the board (with
    /// the player's entries) has no completion.
    pub fn solve(&mut self) -> bool {
        let mut grid = self.to_digit_grid();
        if !solve(&mut grid) {
            return false;
        }
        for pos in Position::ALL {
            if !self.cell(pos).is_given()
                && let Some(digit) = grid.get(pos)
            {
                self.cells[pos.index()] = CellState::Filled(digit);
            }
        }
        true
    }
}
