//! Depth-first backtracking fill.

use gridoku_core::Board;

use crate::SolverError;

/// A brute-force backtracking solver.
///
/// The solver scans for the first empty cell in row-major order, tries the
/// candidate values `1..=N` in ascending order, and recurses on the first
/// safe placement. The first full completion wins; on a dead end the
/// provisional placement is undone and the next candidate is tried.
///
/// The board is mutated in place, so the caller must own it exclusively for
/// the duration of the call and snapshot it first if the partial state needs
/// to be preserved. On `Ok(false)` (no completion exists) every placement
/// has been undone, leaving the board in its pre-call pattern.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Board, GridSize};
/// use gridoku_solver::BacktrackSolver;
///
/// let solver = BacktrackSolver::new();
/// let mut board = Board::new(GridSize::Four);
/// assert_eq!(solver.solve(&mut board), Ok(true));
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    max_nodes: Option<u64>,
}

impl BacktrackSolver {
    /// Creates a solver with no search budget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver that aborts after visiting `max_nodes` search nodes.
    ///
    /// Useful when solving boards from arbitrary sources, where the worst
    /// case is exponential in the number of empty cells. One node is counted
    /// per visited cell along the search path, including revisits after
    /// backtracking.
    #[must_use]
    pub fn with_node_budget(max_nodes: u64) -> Self {
        Self {
            max_nodes: Some(max_nodes),
        }
    }

    /// Completes `board` in place.
    ///
    /// Returns `Ok(true)` when the board was filled to a valid completion,
    /// and `Ok(false)` when no completion exists, in which case the board is
    /// restored to its pre-call empty/filled pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::SearchBudgetExhausted`] when the node budget
    /// runs out. All provisional placements are unwound before returning, so
    /// the board is left in its pre-call pattern here as well.
    pub fn solve(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut visited = 0_u64;
        self.fill(board, &mut visited)
    }

    fn fill(&self, board: &mut Board, visited: &mut u64) -> Result<bool, SolverError> {
        *visited += 1;
        if self.max_nodes.is_some_and(|max| *visited > max) {
            return Err(SolverError::SearchBudgetExhausted { visited: *visited });
        }

        let Some(pos) = board.first_empty() else {
            return Ok(true);
        };

        for value in board.size().values() {
            if !board.is_safe(pos, value) {
                continue;
            }
            board.set(pos, value);
            match self.fill(board, visited) {
                Ok(true) => return Ok(true),
                Ok(false) => board.set(pos, Board::EMPTY),
                Err(err) => {
                    board.set(pos, Board::EMPTY);
                    return Err(err);
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::{GridSize, Position};

    use super::*;

    #[test]
    fn test_solves_empty_boards() {
        let solver = BacktrackSolver::new();
        for size in [GridSize::Four, GridSize::Nine] {
            let mut board = Board::new(size);
            assert_eq!(solver.solve(&mut board), Ok(true));
            assert!(board.is_solved(), "invalid completion for {size}");
        }
    }

    #[test]
    fn test_solves_empty_16x16() {
        let solver = BacktrackSolver::new();
        let mut board = Board::new(GridSize::Sixteen);
        assert_eq!(solver.solve(&mut board), Ok(true));
        assert!(board.is_solved());
    }

    #[test]
    fn test_first_solution_is_deterministic() {
        // Ascending candidates and row-major scanning make the first
        // completion of the empty 4x4 board a fixed value.
        let solver = BacktrackSolver::new();
        let mut board = Board::new(GridSize::Four);
        assert_eq!(solver.solve(&mut board), Ok(true));
        let expected = Board::from_rows(
            GridSize::Four,
            &[&[1, 2, 3, 4], &[3, 4, 1, 2], &[2, 1, 4, 3], &[4, 3, 2, 1]],
        );
        assert_eq!(board, expected);
    }

    #[test]
    fn test_preserves_givens() {
        let solver = BacktrackSolver::new();
        let mut board = Board::new(GridSize::Nine);
        board.set(Position::new(0, 0), 5);
        board.set(Position::new(8, 8), 1);
        board.set(Position::new(4, 4), 9);

        assert_eq!(solver.solve(&mut board), Ok(true));
        assert!(board.is_solved());
        assert_eq!(board[Position::new(0, 0)], 5);
        assert_eq!(board[Position::new(8, 8)], 1);
        assert_eq!(board[Position::new(4, 4)], 9);
    }

    #[test]
    fn test_unsatisfiable_board_is_restored() {
        // (0, 0) has no candidate: 1 is blocked by its column, 2..4 by its
        // row. The partial board itself is conflict-free.
        let original = Board::from_rows(
            GridSize::Four,
            &[&[0, 2, 3, 4], &[1, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]],
        );
        let mut board = original.clone();

        let solver = BacktrackSolver::new();
        assert_eq!(solver.solve(&mut board), Ok(false));
        assert_eq!(board, original);
    }

    #[test]
    fn test_budget_exhaustion_is_distinct_and_restores() {
        let solver = BacktrackSolver::with_node_budget(5);
        let mut board = Board::new(GridSize::Nine);

        let result = solver.solve(&mut board);
        assert!(matches!(
            result,
            Err(SolverError::SearchBudgetExhausted { .. })
        ));
        assert_eq!(board, Board::new(GridSize::Nine));
    }

    #[test]
    fn test_generous_budget_still_solves() {
        let solver = BacktrackSolver::with_node_budget(1_000_000);
        let mut board = Board::new(GridSize::Four);
        assert_eq!(solver.solve(&mut board), Ok(true));
        assert!(board.is_solved());
    }
}
