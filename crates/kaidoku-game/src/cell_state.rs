use derive_more::IsVariant;
use kaidoku_core::Digit;

/// The state of a single cell in a game session.
///
/// The given/free distinction is session state, not a property of the digit:
/// givens are fixed when the session is created and only a full reset
/// replaces them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// No digit entered.
    #[default]
    Empty,
    /// A clue from the generated puzzle; immutable to the player.
    Given(Digit),
    /// A digit entered by the player.
    Filled(Digit),
}

impl CellState {
    /// Returns the digit shown in this cell, if any.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Empty => None,
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_accessor() {
        assert_eq!(CellState::Empty.digit(), None);
        assert_eq!(CellState::Given(Digit::D4).digit(), Some(Digit::D4));
        assert_eq!(CellState::Filled(Digit::D8).digit(), Some(Digit::D8));
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Empty.is_empty());
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(!CellState::Filled(Digit::D1).is_given());
    }
}
