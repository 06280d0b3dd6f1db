//! Game session state for the kaidoku engine.
//!
//! A [`Game`] wraps a generated puzzle for consumption by a UI layer: the
//! generated clues become immutable givens, the player fills and clears the
//! remaining cells, and every edit can be followed by cheap validation
//! queries ([`Game::conflicts`], [`Game::is_solved`],
//! [`Game::candidates_at`]) to drive live feedback. On-demand solving and
//! hints delegate to the solver crate.
//!
//! Rendering, input handling, and presentation state (selection, counters,
//! animations) are the caller's concern.

mod cell_state;
mod error;
mod game;

pub use self::{cell_state::CellState, error::GameError, game::Game};
