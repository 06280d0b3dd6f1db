//! Seeded Sudoku puzzle generation for the kaidoku engine.
//!
//! A [`PuzzleGenerator`] builds a random complete grid by backtracking with a
//! shuffled candidate order, then removes clues under the distribution
//! constraints of a [`Difficulty`]. Two removal strategies are provided:
//! box-balanced (a guaranteed per-box sparsity floor, then global
//! competition) and 180°-symmetric (blank cells removed in rotational
//! pairs).
//!
//! Generation is deterministic per [`PuzzleSeed`]: the seed is recorded in
//! every [`GeneratedPuzzle`] so a puzzle can be reproduced from its printed
//! seed. Uniqueness of the solution is *not* enforced by the strategies;
//! callers that require it check [`has_unique_solution`] and retry with a
//! fresh seed.
//!
//! # Examples
//!
//! ```
//! use kaidoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new(Difficulty::Hard);
//! let seed = PuzzleSeed::from_phrase("doc example");
//! let puzzle = generator.generate_with_seed(seed);
//!
//! // Reproducible: the same seed yields the same puzzle.
//! assert_eq!(puzzle, generator.generate_with_seed(seed));
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

pub use kaidoku_solver::has_unique_solution;

pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
