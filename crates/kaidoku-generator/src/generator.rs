//! Puzzle generation: solved-grid construction and clue removal.

use kaidoku_core::{Digit, DigitGrid, Position};
use kaidoku_solver::solve_with_order;
use rand::{RngExt, seq::SliceRandom as _};

use crate::{Difficulty, PuzzleSeed};

/// Upper bound on balanced-removal retries before accepting the last result.
const MAX_BALANCED_ATTEMPTS: usize = 10;

/// A generated puzzle together with its solution and provenance.
///
/// `problem` is `solution` with cells removed; every occupied cell of
/// `problem` is a clue the player cannot edit. The seed reproduces the
/// puzzle exactly when passed back to the same generation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid handed to the player.
    pub problem: DigitGrid,
    /// The complete grid the problem was carved from.
    pub solution: DigitGrid,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty the generator was asked for.
    pub difficulty: Difficulty,
}

/// Generates Sudoku puzzles of a fixed difficulty.
///
/// Every strategy starts from a freshly backtracked complete grid (random
/// digit order at each cell) and then removes clues:
///
/// - [`generate`](Self::generate): box-balanced removal — a per-box floor of
///   removals first, then a global shuffled pass up to the clue target.
/// - [`generate_symmetric`](Self::generate_symmetric): removes cells in
///   180°-rotational pairs, giving a point-symmetric blank pattern.
/// - [`generate_balanced`](Self::generate_balanced): box-balanced removal
///   with a bounded retry that rejects puzzles containing an untouched box.
///
/// Generation always produces *some* puzzle; none of the strategies verify
/// uniqueness. Callers that need a guaranteed unique solution check
/// [`has_unique_solution`](kaidoku_solver::has_unique_solution) on the
/// problem and retry with a fresh seed.
///
/// # Examples
///
/// ```
/// use kaidoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate();
/// let clues = puzzle.problem.clue_count();
/// assert!((36..=41).contains(&clues));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty this generator produces.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle via box-balanced removal with a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle via box-balanced removal from a fixed seed.
    ///
    /// The same seed and difficulty always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);
        let problem = remove_balanced(&solution, self.difficulty, &mut rng);
        self.assemble(problem, solution, seed)
    }

    /// Generates a point-symmetric puzzle with a fresh random seed.
    #[must_use]
    pub fn generate_symmetric(&self) -> GeneratedPuzzle {
        self.generate_symmetric_with_seed(PuzzleSeed::random())
    }

    /// Generates a point-symmetric puzzle from a fixed seed.
    ///
    /// The blank pattern is invariant under 180° rotation of the board. The
    /// empty-cell target is rounded down to an even number since removals
    /// happen in mirror pairs; the exact board center is never removed.
    #[must_use]
    pub fn generate_symmetric_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);
        let problem = remove_symmetric(&solution, self.difficulty, &mut rng);
        self.assemble(problem, solution, seed)
    }

    /// Generates a puzzle via box-balanced removal, retrying when a 3×3 box
    /// keeps all nine clues.
    #[must_use]
    pub fn generate_balanced(&self) -> GeneratedPuzzle {
        self.generate_balanced_with_seed(PuzzleSeed::random())
    }

    /// Seeded variant of [`generate_balanced`](Self::generate_balanced).
    ///
    /// A fully-populated box reveals nothing to solve, so removal is retried
    /// up to a bounded number of attempts; the last attempt is returned as-is
    /// if every attempt failed the check.
    #[must_use]
    pub fn generate_balanced_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();
        let solution = random_solution(&mut rng);
        let mut problem = remove_balanced(&solution, self.difficulty, &mut rng);
        for _ in 1..MAX_BALANCED_ATTEMPTS {
            if !has_full_box(&problem) {
                break;
            }
            problem = remove_balanced(&solution, self.difficulty, &mut rng);
        }
        self.assemble(problem, solution, seed)
    }

    fn assemble(
        &self,
        problem: DigitGrid,
        solution: DigitGrid,
        seed: PuzzleSeed,
    ) -> GeneratedPuzzle {
        GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty: self.difficulty,
        }
    }
}

/// Fills an empty grid by backtracking with a shuffled digit order per cell.
fn random_solution<R: RngExt + ?Sized>(rng: &mut R) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let filled = solve_with_order(&mut grid, &mut || {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        digits
    });
    debug_assert!(filled, "an empty grid always has a completion");
    grid
}

/// Box-balanced removal: per-box floor first, then global competition.
fn remove_balanced<R: RngExt + ?Sized>(
    solution: &DigitGrid,
    difficulty: Difficulty,
    rng: &mut R,
) -> DigitGrid {
    let mut problem = solution.clone();
    let target_empty = 81 - usize::from(rng.random_range(difficulty.clue_range()));
    let box_clues = difficulty.box_clue_range();
    let min_removed_per_box = 9 - usize::from(*box_clues.end());
    let max_removed_per_box = 9 - usize::from(*box_clues.start());
    let mut removed_per_box = [0usize; 9];

    // Phase 1: every box unconditionally loses its minimum, guaranteeing the
    // per-box sparsity floor before any global removal competes.
    for box_index in 0..9u8 {
        let mut cells = Position::box_positions(box_index);
        cells.shuffle(rng);
        for pos in cells.into_iter().take(min_removed_per_box) {
            problem.set(pos, None);
        }
        removed_per_box[usize::from(box_index)] = min_removed_per_box;
    }

    // Phase 2: the surviving cells compete for the remaining removals, capped
    // per box so no box drops below its clue minimum.
    let mut pool: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| problem.get(*pos).is_some())
        .collect();
    pool.shuffle(rng);
    let mut empty = 81 - pool.len();
    for pos in pool {
        if empty >= target_empty {
            break;
        }
        let box_index = usize::from(pos.box_index());
        if removed_per_box[box_index] >= max_removed_per_box {
            continue;
        }
        problem.set(pos, None);
        removed_per_box[box_index] += 1;
        empty += 1;
    }
    problem
}

/// Symmetric removal: mirror pairs from the upper half of the board.
fn remove_symmetric<R: RngExt + ?Sized>(
    solution: &DigitGrid,
    difficulty: Difficulty,
    rng: &mut R,
) -> DigitGrid {
    let mut problem = solution.clone();
    // Pairs require an even target.
    let target_empty = (81 - usize::from(rng.random_range(difficulty.clue_range()))) & !1;
    let max_removed_per_box = 9 - usize::from(*difficulty.box_clue_range().start());
    let mut removed_per_box = [0usize; 9];

    // The first 40 cells in row-major order are exactly the upper half of the
    // board with the center excluded; the center mirrors onto itself and
    // cannot form a pair.
    let mut candidates: Vec<Position> = Position::ALL[..40].to_vec();
    candidates.shuffle(rng);

    let mut empty = 0;
    for pos in candidates {
        if empty >= target_empty {
            break;
        }
        let mirror = pos.mirror();
        let box_a = usize::from(pos.box_index());
        let box_b = usize::from(mirror.box_index());
        let fits = if box_a == box_b {
            removed_per_box[box_a] + 2 <= max_removed_per_box
        } else {
            removed_per_box[box_a] < max_removed_per_box
                && removed_per_box[box_b] < max_removed_per_box
        };
        if !fits {
            continue;
        }
        problem.set(pos, None);
        problem.set(mirror, None);
        removed_per_box[box_a] += 1;
        removed_per_box[box_b] += 1;
        empty += 2;
    }
    problem
}

fn has_full_box(grid: &DigitGrid) -> bool {
    (0..9).any(|box_index| grid.box_clue_count(box_index) == 9)
}

#[cfg(test)]
mod tests {
    use kaidoku_solver::{has_unique_solution, is_solved, solve};
    use proptest::prelude::*;

    use super::*;

    fn seeds(count: usize) -> impl Iterator<Item = PuzzleSeed> {
        (0..count).map(|i| PuzzleSeed::from_phrase(&format!("generator test seed {i}")))
    }

    fn assert_problem_is_cut_from_solution(puzzle: &GeneratedPuzzle) {
        assert!(is_solved(&puzzle.solution));
        for pos in Position::ALL {
            if let Some(digit) = puzzle.problem.get(pos) {
                assert_eq!(puzzle.solution.get(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let generator = PuzzleGenerator::new(Difficulty::Medium);
        let seed = PuzzleSeed::from_phrase("determinism");
        assert_eq!(generator.generate_with_seed(seed), generator.generate_with_seed(seed));
        assert_eq!(
            generator.generate_symmetric_with_seed(seed),
            generator.generate_symmetric_with_seed(seed)
        );
    }

    #[test]
    fn test_balanced_respects_clue_ranges_for_all_difficulties() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::new(difficulty);
            let clues = difficulty.clue_range();
            let box_clues = difficulty.box_clue_range();
            for seed in seeds(10) {
                let puzzle = generator.generate_with_seed(seed);
                assert_problem_is_cut_from_solution(&puzzle);

                let total = u8::try_from(puzzle.problem.clue_count()).unwrap();
                assert!(
                    clues.contains(&total),
                    "{difficulty}: {total} clues outside {clues:?}"
                );
                for box_index in 0..9 {
                    let count =
                        u8::try_from(puzzle.problem.box_clue_count(box_index)).unwrap();
                    assert!(
                        box_clues.contains(&count),
                        "{difficulty}: box {box_index} has {count} clues outside {box_clues:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_expert_generation_repeatedly_stays_in_range() {
        let generator = PuzzleGenerator::new(Difficulty::Expert);
        for i in 0..100 {
            let seed = PuzzleSeed::from_phrase(&format!("expert run {i}"));
            let puzzle = generator.generate_with_seed(seed);
            let clues = puzzle.problem.clue_count();
            assert!((17..=22).contains(&clues), "run {i}: {clues} clues");
            for box_index in 0..9 {
                assert!(puzzle.problem.box_clue_count(box_index) <= 3, "run {i}");
            }
        }
    }

    #[test]
    fn test_generated_problem_is_solvable() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::new(difficulty);
            for seed in seeds(5) {
                let mut grid = generator.generate_with_seed(seed).problem;
                assert!(solve(&mut grid));
                assert!(is_solved(&grid));
            }
        }
    }

    #[test]
    fn test_unique_problem_solves_back_to_its_solution() {
        // Easy puzzles keep 36+ clues; across several seeds at least one is
        // unique, and for that one the solver must reproduce the exact
        // solution it was carved from.
        let generator = PuzzleGenerator::new(Difficulty::Easy);
        let mut verified = 0;
        for seed in seeds(8) {
            let puzzle = generator.generate_with_seed(seed);
            if has_unique_solution(&puzzle.problem) {
                let mut grid = puzzle.problem.clone();
                assert!(solve(&mut grid));
                assert_eq!(grid, puzzle.solution);
                verified += 1;
            }
        }
        assert!(verified > 0, "no unique Easy puzzle among tested seeds");
    }

    #[test]
    fn test_symmetric_blank_pattern_is_point_symmetric() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::new(difficulty);
            for seed in seeds(10) {
                let puzzle = generator.generate_symmetric_with_seed(seed);
                assert_problem_is_cut_from_solution(&puzzle);
                for pos in Position::ALL {
                    assert_eq!(
                        puzzle.problem.get(pos).is_none(),
                        puzzle.problem.get(pos.mirror()).is_none(),
                        "{difficulty}: asymmetric blank at {pos}"
                    );
                }
                // Pair removal never overshoots the target, so the clue count
                // stays at or above the difficulty floor.
                let total = u8::try_from(puzzle.problem.clue_count()).unwrap();
                assert!(total >= *difficulty.clue_range().start());
                // The center cell is never part of a pair.
                assert!(puzzle.problem.get(Position::new(4, 4)).is_some());
            }
        }
    }

    #[test]
    fn test_balanced_retry_leaves_no_full_box() {
        for difficulty in Difficulty::ALL {
            let generator = PuzzleGenerator::new(difficulty);
            for seed in seeds(5) {
                let puzzle = generator.generate_balanced_with_seed(seed);
                assert!(!has_full_box(&puzzle.problem));
                assert_problem_is_cut_from_solution(&puzzle);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_balanced_clue_counts_hold_for_arbitrary_seeds(
            bytes in any::<[u8; 32]>(),
            level in 0usize..4,
        ) {
            let difficulty = Difficulty::ALL[level];
            let generator = PuzzleGenerator::new(difficulty);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(bytes));

            let total = u8::try_from(puzzle.problem.clue_count()).unwrap();
            prop_assert!(difficulty.clue_range().contains(&total));
            for box_index in 0..9 {
                let count = u8::try_from(puzzle.problem.box_clue_count(box_index)).unwrap();
                prop_assert!(difficulty.box_clue_range().contains(&count));
            }
        }
    }
}
