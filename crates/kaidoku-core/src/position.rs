//! Cell addressing on the 9×9 board.

use std::fmt::{self, Display};

/// A cell position on the board, addressed by `(row, col)` in `0..9`.
///
/// Rows run top to bottom and columns left to right. Boxes are the nine
/// non-overlapping 3×3 sub-grids, numbered left to right, top to bottom, so
/// box `b` covers rows `3 * (b / 3)..3 * (b / 3) + 3` and columns
/// `3 * (b % 3)..3 * (b % 3) + 3`.
///
/// # Examples
///
/// ```
/// use kaidoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.mirror(), Position::new(4, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..9`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a row-major cell index in `0..81`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..81`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            row: index / 9,
            col: index % 9,
        }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the position obtained by rotating the board 180°.
    ///
    /// The board center `(4, 4)` is its own mirror.
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self {
            row: 8 - self.row,
            col: 8 - self.col,
        }
    }

    /// Returns the nine positions of box `box_index`, row-major within the box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in `0..9`.
    #[must_use]
    pub const fn box_positions(box_index: u8) -> [Self; 9] {
        assert!(box_index < 9);
        let row0 = (box_index / 3) * 3;
        let col0 = (box_index % 3) * 3;
        let mut cells = [Self { row: 0, col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            cells[i] = Self {
                row: row0 + (i / 3) as u8,
                col: col0 + (i % 3) as u8,
            };
            i += 1;
        }
        cells
    }

    /// Returns the 20 peers of this position: the other cells in its row,
    /// column, and box.
    ///
    /// Order is row peers, column peers, then the four box peers outside the
    /// row and column.
    #[must_use]
    pub fn peers(self) -> [Self; 20] {
        let mut peers = [Self::default(); 20];
        let mut k = 0;
        for col in 0..9 {
            if col != self.col {
                peers[k] = Self { row: self.row, col };
                k += 1;
            }
        }
        for row in 0..9 {
            if row != self.row {
                peers[k] = Self { row, col: self.col };
                k += 1;
            }
        }
        for pos in Self::box_positions(self.box_index()) {
            if pos.row != self.row && pos.col != self.col {
                peers[k] = pos;
                k += 1;
            }
        }
        debug_assert_eq!(k, 20);
        peers
    }

    /// Returns `true` if `other` shares a row, column, or box with `self`.
    ///
    /// A position does not see itself.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row || self.col == other.col || self.box_index() == other.box_index()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            #[expect(clippy::cast_possible_truncation)]
            let round_trip = Position::from_index(i as u8);
            assert_eq!(round_trip, *pos);
        }
    }

    #[test]
    fn test_box_index_corners() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_positions_cover_box() {
        for box_index in 0..9 {
            for pos in Position::box_positions(box_index) {
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_peers_are_distinct_and_seen() {
        for pos in Position::ALL {
            let peers = pos.peers();
            for (i, peer) in peers.iter().enumerate() {
                assert_ne!(*peer, pos);
                assert!(pos.sees(*peer));
                assert!(peer.sees(pos));
                for later in &peers[i + 1..] {
                    assert_ne!(peer, later);
                }
            }
        }
    }

    #[test]
    fn test_mirror_center_is_fixed() {
        assert_eq!(Position::new(4, 4).mirror(), Position::new(4, 4));
        assert_eq!(Position::new(0, 0).mirror(), Position::new(8, 8));
    }

    proptest! {
        #[test]
        fn prop_mirror_is_involutive(index in 0u8..81) {
            let pos = Position::from_index(index);
            prop_assert_eq!(pos.mirror().mirror(), pos);
        }

        #[test]
        fn prop_sees_is_symmetric(a in 0u8..81, b in 0u8..81) {
            let a = Position::from_index(a);
            let b = Position::from_index(b);
            prop_assert_eq!(a.sees(b), b.sees(a));
        }
    }
}
