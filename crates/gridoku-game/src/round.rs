//! A single puzzle round and its answer checking.

use gridoku_core::{Board, GridSize, Position};
use gridoku_generator::GeneratedPuzzle;

/// Errors reported by round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The user board's size does not match the round's size.
    #[display("board size mismatch: round is {expected}, user board is {actual}")]
    SizeMismatch {
        /// The round's board size.
        expected: GridSize,
        /// The size of the board handed to `check`.
        actual: GridSize,
    },
}

/// The verdict of checking a user board against the round's solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Positions holding a value that differs from the solution.
    ///
    /// Empty cells are never mismatches; they only prevent completion.
    pub mismatches: Vec<Position>,
    /// `true` iff every cell is filled and there are zero mismatches.
    pub complete: bool,
}

/// One round of play: a generated puzzle and its solution of record.
///
/// The round holds both boards immutably. The presentation layer keeps its
/// own working board with the user's entries and hands it back for
/// checking; the round never mutates user state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    generated: GeneratedPuzzle,
}

impl Round {
    /// Starts a round from a generated puzzle.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        Self { generated }
    }

    /// Returns the board size of this round.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.generated.size()
    }

    /// Returns the puzzle as generated, before any user entry.
    ///
    /// Nonzero cells are the fixed clues; zero cells are open for entry.
    #[must_use]
    pub fn puzzle(&self) -> &Board {
        &self.generated.puzzle
    }

    /// Returns the stored solution, for "reveal" actions.
    ///
    /// This is the snapshot taken at generation time; nothing is recomputed.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.generated.solution
    }

    /// Returns the seed that reproduces this round.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.generated.seed
    }

    /// Returns `true` if the cell at `pos` is a fixed clue.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.generated.is_fixed(pos)
    }

    /// Checks a user board against the stored solution.
    ///
    /// A cell mismatches when it holds a nonzero value different from the
    /// solution's value at the same position; mismatches are listed in
    /// row-major order. The report is `complete` iff every cell (fixed or
    /// open) is filled and nothing mismatches.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SizeMismatch`] if `user` is not the round's
    /// board size. This is the only failure mode; any same-size board is a
    /// well-formed input.
    pub fn check(&self, user: &Board) -> Result<CheckReport, GameError> {
        if user.size() != self.size() {
            return Err(GameError::SizeMismatch {
                expected: self.size(),
                actual: user.size(),
            });
        }

        let solution = self.solution();
        let mismatches: Vec<Position> = Position::all(self.size())
            .filter(|&pos| !user.is_empty_at(pos) && user[pos] != solution[pos])
            .collect();
        let complete = mismatches.is_empty() && user.is_filled();

        Ok(CheckReport {
            mismatches,
            complete,
        })
    }
}
