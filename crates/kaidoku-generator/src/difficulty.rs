//! Difficulty policy: clue-count ranges per level.

use std::{fmt, ops::RangeInclusive};

/// A named difficulty level.
///
/// Each level maps deterministically to two policy constants: a global
/// clue-count range (out of 81 cells) and a per-box clue-count range (out of
/// 9 cells per 3×3 box). Generation picks a clue target from the global range
/// and keeps every box inside the per-box range.
///
/// The exact values are behavioral policy, not derived quantities:
///
/// | Level  | Clues    | Clues per box |
/// |--------|----------|---------------|
/// | Easy   | 36..=41  | 3..=6         |
/// | Medium | 27..=32  | 2..=5         |
/// | Hard   | 22..=27  | 1..=4         |
/// | Expert | 17..=22  | 0..=3         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 36-41 clues, 3-6 per box.
    Easy,
    /// 27-32 clues, 2-5 per box.
    Medium,
    /// 22-27 clues, 1-4 per box.
    Hard,
    /// 17-22 clues, 0-3 per box.
    Expert,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the inclusive range of total clues a generated puzzle keeps.
    #[must_use]
    pub const fn clue_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 36..=41,
            Self::Medium => 27..=32,
            Self::Hard => 22..=27,
            Self::Expert => 17..=22,
        }
    }

    /// Returns the inclusive range of clues each 3×3 box keeps.
    #[must_use]
    pub const fn box_clue_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 3..=6,
            Self::Medium => 2..=5,
            Self::Hard => 1..=4,
            Self::Expert => 0..=3,
        }
    }

    /// Returns the level name in lowercase.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
