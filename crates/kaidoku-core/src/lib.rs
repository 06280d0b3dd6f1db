//! Core data structures for the kaidoku Sudoku engine.
//!
//! This crate provides the board model shared by the solver, generator, and
//! game crates:
//!
//! - [`Digit`]: type-safe representation of the digits 1-9
//! - [`DigitSet`]: a 9-bit set of digits, used for candidate enumeration
//! - [`Position`]: a `(row, col)` cell address with box and peer helpers
//! - [`DigitGrid`]: the 81-cell grid of optional digits
//!
//! # Examples
//!
//! ```
//! use kaidoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(4, 4);
//! grid.set(pos, Some(Digit::D5));
//!
//! assert_eq!(grid[pos], Some(Digit::D5));
//! assert_eq!(grid.clue_count(), 1);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
};
