//! The 81-cell Sudoku grid.

use std::{
    error::Error,
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of optional digits.
///
/// Cells are either empty (`None`) or hold a [`Digit`]. The grid itself does
/// not enforce Sudoku constraints; validation lives in the solver crate.
///
/// Grids can be parsed from and formatted as an 81-character string in
/// row-major order, where `.` (or `0`) denotes an empty cell:
///
/// ```
/// use kaidoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = format!("53..7{}", ".".repeat(76)).parse().unwrap();
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// assert_eq!(grid.clue_count(), 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.clue_count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_none())
    }

    /// Returns the number of occupied cells in box `box_index`.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in `0..9`.
    #[must_use]
    pub fn box_clue_count(&self, box_index: u8) -> usize {
        Position::box_positions(box_index)
            .iter()
            .filter(|pos| self.get(**pos).is_some())
            .count()
    }

    /// Formats the grid as a human-readable block with box separators.
    ///
    /// Intended for terminal output; the [`Display`] impl produces the compact
    /// 81-character form instead.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        for row in 0..9 {
            if row == 3 || row == 6 {
                out.push_str("------+-------+------\n");
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    out.push_str("| ");
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => out.push((b'0' + digit.value()) as char),
                    None => out.push('.'),
                }
                out.push(if col == 8 { '\n' } else { ' ' });
            }
        }
        out
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl fmt::Debug for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitGrid(\"{self}\")")
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// The input does not contain exactly 81 characters.
    InvalidLength(usize),
    /// The input contains a character other than `1`-`9`, `0`, or `.`.
    InvalidCharacter(char),
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected 81 grid characters, found {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid grid character: {ch:?}")
            }
        }
    }
}

impl Error for ParseGridError {}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 81 {
            return Err(ParseGridError::InvalidLength(count));
        }
        let mut grid = Self::new();
        for (pos, ch) in Position::ALL.into_iter().zip(s.chars()) {
            let cell = match ch {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter(ch)),
            };
            grid.set(pos, cell);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = DigitGrid::new();
        assert_eq!(grid.clue_count(), 0);
        assert_eq!(grid.empty_count(), 81);
        assert!(!grid.is_full());
        assert_eq!(grid.empty_positions().count(), 81);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(2, 7);
        grid.set(pos, Some(Digit::D3));
        assert_eq!(grid[pos], Some(Digit::D3));
        assert_eq!(grid.clue_count(), 1);

        grid.set(pos, None);
        assert_eq!(grid[pos], None);
        assert_eq!(grid.clue_count(), 0);
    }

    #[test]
    fn test_parse_accepts_dots_and_zeros() {
        let dotted: DigitGrid = format!("12{}", ".".repeat(79)).parse().unwrap();
        let zeroed: DigitGrid = format!("12{}", "0".repeat(79)).parse().unwrap();
        assert_eq!(dotted, zeroed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::InvalidLength(3))
        );
        assert_eq!(
            format!("x{}", ".".repeat(80)).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_box_clue_count() {
        let mut grid = DigitGrid::new();
        for pos in Position::box_positions(4) {
            grid.set(pos, Some(Digit::D1));
        }
        assert_eq!(grid.box_clue_count(4), 9);
        assert_eq!(grid.box_clue_count(0), 0);
    }

    #[test]
    fn test_pretty_string_shape() {
        let grid = DigitGrid::new();
        let pretty = grid.to_pretty_string();
        assert_eq!(pretty.lines().count(), 11);
        assert!(pretty.contains("------+-------+------"));
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(cells in prop::collection::vec(0u8..=9, 81)) {
            let mut grid = DigitGrid::new();
            for (pos, value) in Position::ALL.into_iter().zip(&cells) {
                grid.set(pos, Digit::try_from_value(*value));
            }
            let parsed: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
