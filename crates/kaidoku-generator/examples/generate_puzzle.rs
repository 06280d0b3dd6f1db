//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty level
//! - Pick a removal strategy (balanced or symmetric)
//! - Reproduce a puzzle from a printed seed
//! - Retry generation until the puzzle has a unique solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Require a unique solution (bounded retries with fresh seeds):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert --require-unique
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use kaidoku_generator::{
    Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed, has_unique_solution,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Expert => Self::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Box-balanced removal with the full-box retry check.
    Balanced,
    /// 180°-symmetric removal.
    Symmetric,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level.
    #[arg(long, value_name = "LEVEL", default_value = "medium")]
    difficulty: DifficultyArg,

    /// Removal strategy.
    #[arg(long, value_name = "STRATEGY", default_value = "balanced")]
    strategy: Strategy,

    /// Seed to reproduce a puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Regenerate with fresh seeds until the puzzle has a unique solution.
    #[arg(long)]
    require_unique: bool,

    /// Maximum attempts when --require-unique is set.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    let seed = args.seed.as_deref().map(|text| match text.parse() {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("Invalid seed: {err}");
            process::exit(2);
        }
    });

    if args.require_unique && seed.is_some() {
        eprintln!("--require-unique cannot be combined with --seed (a seed fixes the puzzle).");
        process::exit(2);
    }

    let puzzle = if args.require_unique {
        match generate_unique(&generator, args.strategy, args.max_tries) {
            Some(puzzle) => puzzle,
            None => {
                eprintln!(
                    "No unique puzzle found within {} attempts.",
                    args.max_tries
                );
                process::exit(1);
            }
        }
    } else {
        generate(&generator, args.strategy, seed)
    };

    print_puzzle(&puzzle);
}

fn generate(
    generator: &PuzzleGenerator,
    strategy: Strategy,
    seed: Option<PuzzleSeed>,
) -> GeneratedPuzzle {
    let seed = seed.unwrap_or_else(PuzzleSeed::random);
    match strategy {
        Strategy::Balanced => generator.generate_balanced_with_seed(seed),
        Strategy::Symmetric => generator.generate_symmetric_with_seed(seed),
    }
}

fn generate_unique(
    generator: &PuzzleGenerator,
    strategy: Strategy,
    max_tries: usize,
) -> Option<GeneratedPuzzle> {
    (0..max_tries)
        .map(|_| generate(generator, strategy, None))
        .find(|puzzle| has_unique_solution(&puzzle.problem))
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty: {}", puzzle.difficulty);
    println!(
        "Clues: {} ({} empty)",
        puzzle.problem.clue_count(),
        puzzle.problem.empty_count()
    );
    println!("Unique solution: {}", has_unique_solution(&puzzle.problem));
    println!();
    println!("Problem:");
    println!("{}", puzzle.problem.to_pretty_string());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
