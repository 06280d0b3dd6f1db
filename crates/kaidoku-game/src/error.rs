use derive_more::{Display, Error};

/// Errors produced by game-session operations.
///
/// Search exhaustion is never an error; only caller-precondition violations
/// are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The targeted cell is a given clue and cannot be edited.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
}
