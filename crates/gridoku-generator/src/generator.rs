//! Solved-board construction and puzzle carving.

use gridoku_core::{Board, GridSize, Position};
use gridoku_solver::{BacktrackSolver, SolverError};
use log::debug;
use rand::{RngExt as _, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64Mcg;

use crate::Difficulty;

/// How many fresh diagonal seedings to try before giving up.
///
/// Diagonal seeding always yields a completable board, so more than one
/// attempt is never needed today; the retry loop only matters if the
/// seeding strategy changes.
const MAX_SEED_ATTEMPTS: u32 = 8;

/// Errors reported by puzzle generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// No seeding attempt produced a completable board.
    #[display("generation failed: no completion found after {attempts} seeding attempts")]
    Unsatisfiable {
        /// Number of seeding attempts made.
        attempts: u32,
    },
    /// The solver ran out of budget while completing a seeded board.
    #[display("generation failed: {_0}")]
    #[from]
    Solver(SolverError),
}

/// One generated round: the playable puzzle and its solution of record.
///
/// The solution is a deep copy taken before any cell was removed; mutating
/// the puzzle never affects it. Fixed (non-editable) cells are exactly the
/// nonzero cells of the puzzle, and each of them equals the same-position
/// solution cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle with a difficulty-determined number of cells blanked.
    pub puzzle: Board,
    /// The fully solved board the puzzle was carved from.
    pub solution: Board,
    /// The seed that reproduces this round exactly.
    pub seed: u64,
    /// The difficulty the round was generated at.
    pub difficulty: Difficulty,
}

impl GeneratedPuzzle {
    /// Returns the board size of this round.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.puzzle.size()
    }

    /// Returns `true` if the puzzle cell at `pos` is a fixed clue.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        !self.puzzle.is_empty_at(pos)
    }
}

/// Generates puzzles of a fixed board size.
///
/// Construction follows the seeded-diagonal strategy: the boxes along the
/// main diagonal are disjoint in both row set and column set, so filling
/// each with an independent random permutation of `1..=N` can violate no
/// constraint, and the partial board is guaranteed completable. The solver
/// then fills the rest, the result is snapshotted as the solution, and a
/// difficulty-determined number of cells is blanked to carve the puzzle.
///
/// No uniqueness check is performed; a generated puzzle may in principle
/// admit more than one solution.
///
/// # Examples
///
/// ```
/// use gridoku_core::GridSize;
/// use gridoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new(GridSize::Four);
/// let round = generator.generate_with_seed(Difficulty::Medium, 42)?;
///
/// assert_eq!(round.puzzle.count_empty(), 8);
/// assert!(round.solution.is_solved());
/// # Ok::<_, gridoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    size: GridSize,
    solver: BacktrackSolver,
}

impl PuzzleGenerator {
    /// Creates a generator for boards of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            solver: BacktrackSolver::new(),
        }
    }

    /// Returns the board size this generator produces.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Generates a round from a fresh entropy seed.
    ///
    /// The drawn seed is recorded on the returned [`GeneratedPuzzle`], so
    /// any round can be replayed with [`generate_with_seed`].
    ///
    /// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if no seeding attempt yields a completable
    /// board; unreachable with the diagonal seeding strategy.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(difficulty, rand::rng().random())
    }

    /// Generates the round determined by `seed`.
    ///
    /// The same size, difficulty, and seed always produce the same
    /// `(puzzle, solution)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if no seeding attempt yields a completable
    /// board; unreachable with the diagonal seeding strategy.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let solution = self.build_solution(&mut rng)?;
        let mut puzzle = solution.clone();
        self.remove_cells(&mut puzzle, difficulty, &mut rng);

        debug!(
            "generated {difficulty} {} round from seed {seed}: {} clues, {} blanks",
            self.size,
            self.size.cell_count() - puzzle.count_empty(),
            puzzle.count_empty(),
        );

        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
            difficulty,
        })
    }

    /// Produces a fully solved board via diagonal seeding plus solver
    /// completion. Never hands back a partially completed board: a failed
    /// attempt is discarded wholesale and reseeded from a fresh shuffle.
    fn build_solution(&self, rng: &mut Pcg64Mcg) -> Result<Board, GenerateError> {
        for _ in 0..MAX_SEED_ATTEMPTS {
            let mut board = Board::new(self.size);
            self.fill_diagonal_boxes(&mut board, rng);
            if self.solver.solve(&mut board)? {
                return Ok(board);
            }
        }
        Err(GenerateError::Unsatisfiable {
            attempts: MAX_SEED_ATTEMPTS,
        })
    }

    /// Writes an independent shuffled permutation of `1..=N` row-major into
    /// each box along the main diagonal.
    fn fill_diagonal_boxes(&self, board: &mut Board, rng: &mut Pcg64Mcg) {
        let b = self.size.box_size();
        let mut values: Vec<u8> = self.size.values().collect();
        for origin in (0..self.size.cells()).step_by(usize::from(b)) {
            values.shuffle(rng);
            let positions = (origin..origin + b)
                .flat_map(|row| (origin..origin + b).map(move |col| Position::new(row, col)));
            for (pos, &value) in positions.zip(&values) {
                board.set(pos, value);
            }
        }
    }

    /// Blanks `difficulty.removal_count()` distinct cells, chosen by
    /// rejection sampling over uniformly random positions. A draw that hits
    /// an already-empty cell is retried and not counted.
    fn remove_cells(&self, board: &mut Board, difficulty: Difficulty, rng: &mut Pcg64Mcg) {
        let n = self.size.cells();
        let mut remaining = difficulty.removal_count(self.size);
        while remaining > 0 {
            let pos = Position::new(rng.random_range(0..n), rng.random_range(0..n));
            if !board.is_empty_at(pos) {
                board.set(pos, Board::EMPTY);
                remaining -= 1;
            }
        }
    }
}
