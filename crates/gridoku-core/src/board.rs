//! The board value type and its constraint predicate.

use std::{
    fmt::{self, Display},
    ops::Index,
};

use crate::{GridSize, Position};

/// An N×N board of cells holding `1..=N`, with `0` marking an empty cell.
///
/// A board is a plain value: cloning it produces an independent deep copy,
/// which is how solution snapshots are taken. There is no identity beyond
/// the cell contents.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Board, GridSize, Position};
///
/// let mut board = Board::new(GridSize::Nine);
/// assert_eq!(board.count_empty(), 81);
///
/// board.set(Position::new(0, 0), 5);
/// assert_eq!(board[Position::new(0, 0)], 5);
/// assert!(!board.is_safe(Position::new(0, 8), 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: GridSize,
    cells: Vec<u8>,
}

impl Board {
    /// The value of an empty cell.
    pub const EMPTY: u8 = 0;

    /// Creates an empty board of the given size.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Self::EMPTY; size.cell_count()],
        }
    }

    /// Creates a board from row slices.
    ///
    /// Intended for tests and fixtures where a literal board is clearer than
    /// a sequence of `set` calls.
    ///
    /// # Panics
    ///
    /// Panics if the number of rows, the length of any row, or any cell
    /// value does not fit the given size.
    #[must_use]
    pub fn from_rows(size: GridSize, rows: &[&[u8]]) -> Self {
        let n = usize::from(size.cells());
        assert_eq!(rows.len(), n, "expected {n} rows");
        let mut cells = Vec::with_capacity(size.cell_count());
        for row in rows {
            assert_eq!(row.len(), n, "expected {n} cells per row");
            cells.extend_from_slice(row);
        }
        let board = Self { size, cells };
        for pos in Position::all(size) {
            let value = board[pos];
            assert!(
                value <= size.cells(),
                "cell {pos} holds {value}, out of range for {size}"
            );
        }
        board
    }

    /// Returns the size of this board.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the value at `pos`, or [`Board::EMPTY`] for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Sets the cell at `pos` to `value` (use [`Board::EMPTY`] to clear).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or `value` exceeds the board's
    /// maximum cell value.
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            value <= self.size.cells(),
            "value {value} out of range for {}",
            self.size
        );
        let index = self.index(pos);
        self.cells[index] = value;
    }

    /// Returns `true` if the cell at `pos` is empty.
    #[must_use]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Self::EMPTY
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::all(self.size).find(|&pos| self.is_empty_at(pos))
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == Self::EMPTY).count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.cells.contains(&Self::EMPTY)
    }

    /// Returns `true` if placing `value` at `pos` violates no constraint.
    ///
    /// `value` conflicts when it already appears anywhere in the cell's row,
    /// column, or containing box. The cell's own current content takes part
    /// in the scans, so the predicate is meant for candidate placement into
    /// empty cells during search. No side effects.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board or `value` is not in `1..=N`.
    #[must_use]
    pub fn is_safe(&self, pos: Position, value: u8) -> bool {
        let n = self.size.cells();
        assert!(
            (1..=n).contains(&value),
            "candidate value {value} out of range for {}",
            self.size
        );

        for i in 0..n {
            if self.get(Position::new(pos.row, i)) == value {
                return false;
            }
            if self.get(Position::new(i, pos.col)) == value {
                return false;
            }
        }

        let b = self.size.box_size();
        let origin = pos.box_origin(self.size);
        for row in origin.row..origin.row + b {
            for col in origin.col..origin.col + b {
                if self.get(Position::new(row, col)) == value {
                    return false;
                }
            }
        }

        true
    }

    /// Returns `true` if the board is fully filled and every row, column,
    /// and box contains each value `1..=N` exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{Board, GridSize};
    ///
    /// let board = Board::from_rows(
    ///     GridSize::Four,
    ///     &[&[1, 2, 3, 4], &[3, 4, 1, 2], &[2, 1, 4, 3], &[4, 3, 2, 1]],
    /// );
    /// assert!(board.is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let n = self.size.cells();
        let b = self.size.box_size();
        let full: u32 = (1 << n) - 1;

        let mask = |values: &mut dyn Iterator<Item = u8>| -> u32 {
            let mut seen = 0_u32;
            for value in values {
                if value == Self::EMPTY {
                    return 0;
                }
                seen |= 1 << (value - 1);
            }
            seen
        };

        for i in 0..n {
            let row = mask(&mut (0..n).map(|col| self.get(Position::new(i, col))));
            let col = mask(&mut (0..n).map(|row| self.get(Position::new(row, i))));
            if row != full || col != full {
                return false;
            }
        }

        for box_row in (0..n).step_by(usize::from(b)) {
            for box_col in (0..n).step_by(usize::from(b)) {
                let seen = mask(
                    &mut (box_row..box_row + b).flat_map(|row| {
                        (box_col..box_col + b).map(move |col| Position::new(row, col))
                    })
                    .map(|pos| self.get(pos)),
                );
                if seen != full {
                    return false;
                }
            }
        }

        true
    }

    fn index(&self, pos: Position) -> usize {
        let n = self.size.cells();
        assert!(
            pos.row < n && pos.col < n,
            "position {pos} outside {} board",
            self.size
        );
        usize::from(pos.row) * usize::from(n) + usize::from(pos.col)
    }
}

impl Index<Position> for Board {
    type Output = u8;

    fn index(&self, pos: Position) -> &u8 {
        &self.cells[self.index(pos)]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.cells();
        let b = self.size.box_size();
        let width = if n > 9 { 2 } else { 1 };
        for row in 0..n {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 {
                    write!(f, " ")?;
                    if col % b == 0 {
                        write!(f, " ")?;
                    }
                }
                let value = self.get(Position::new(row, col));
                if value == Self::EMPTY {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
            if row + 1 < n && (row + 1) % b == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Independent duplicate scan used to cross-check `is_safe`.
    fn safe_oracle(board: &Board, pos: Position, value: u8) -> bool {
        let size = board.size();
        let origin = pos.box_origin(size);
        Position::all(size)
            .filter(|p| {
                p.row == pos.row || p.col == pos.col || p.box_origin(size) == origin
            })
            .all(|p| board[p] != value)
    }

    fn solved_4x4() -> Board {
        Board::from_rows(
            GridSize::Four,
            &[&[1, 2, 3, 4], &[3, 4, 1, 2], &[2, 1, 4, 3], &[4, 3, 2, 1]],
        )
    }

    #[test]
    fn test_new_board_is_empty() {
        for size in GridSize::ALL {
            let board = Board::new(size);
            assert_eq!(board.count_empty(), size.cell_count());
            assert_eq!(board.first_empty(), Some(Position::new(0, 0)));
            assert!(!board.is_filled());
            assert!(!board.is_solved());
        }
    }

    #[test]
    fn test_set_get_clear() {
        let mut board = Board::new(GridSize::Nine);
        let pos = Position::new(4, 7);

        board.set(pos, 9);
        assert_eq!(board.get(pos), 9);
        assert_eq!(board[pos], 9);
        assert!(!board.is_empty_at(pos));

        board.set(pos, Board::EMPTY);
        assert!(board.is_empty_at(pos));
    }

    #[test]
    #[should_panic(expected = "value 10 out of range")]
    fn test_set_rejects_out_of_range_value() {
        let mut board = Board::new(GridSize::Nine);
        board.set(Position::new(0, 0), 10);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 board")]
    fn test_get_rejects_out_of_range_position() {
        let board = Board::new(GridSize::Four);
        let _ = board.get(Position::new(0, 4));
    }

    #[test]
    fn test_is_safe_exhaustive_4x4() {
        // Every position and candidate value on a partially filled 4x4
        // board, checked against an independent oracle.
        let board = Board::from_rows(
            GridSize::Four,
            &[&[1, 0, 0, 4], &[0, 0, 2, 0], &[0, 3, 0, 0], &[2, 0, 0, 0]],
        );
        for pos in Position::all(GridSize::Four) {
            for value in GridSize::Four.values() {
                assert_eq!(
                    board.is_safe(pos, value),
                    safe_oracle(&board, pos, value),
                    "disagreement at {pos} for value {value}"
                );
            }
        }
    }

    #[test]
    fn test_is_safe_scans_row_col_box() {
        let mut board = Board::new(GridSize::Nine);
        board.set(Position::new(4, 4), 7);

        // Same row, same column, same box.
        assert!(!board.is_safe(Position::new(4, 0), 7));
        assert!(!board.is_safe(Position::new(0, 4), 7));
        assert!(!board.is_safe(Position::new(3, 5), 7));
        // Unrelated cell and unrelated value stay safe.
        assert!(board.is_safe(Position::new(0, 0), 7));
        assert!(board.is_safe(Position::new(4, 0), 6));
    }

    #[test]
    fn test_first_empty_row_major() {
        let board = Board::from_rows(
            GridSize::Four,
            &[&[1, 2, 3, 4], &[3, 4, 0, 2], &[0, 1, 4, 3], &[4, 3, 2, 1]],
        );
        assert_eq!(board.first_empty(), Some(Position::new(1, 2)));
        assert!(solved_4x4().first_empty().is_none());
    }

    #[test]
    fn test_is_solved() {
        let solved = solved_4x4();
        assert!(solved.is_filled());
        assert!(solved.is_solved());

        // A single duplicated value breaks a row, a column, and a box.
        let mut broken = solved.clone();
        broken.set(Position::new(0, 0), 2);
        assert!(broken.is_filled());
        assert!(!broken.is_solved());

        // A single hole means not solved even with no conflicts.
        let mut holed = solved;
        holed.set(Position::new(3, 3), Board::EMPTY);
        assert!(!holed.is_solved());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut board = Board::new(GridSize::Four);
        let snapshot = board.clone();
        board.set(Position::new(0, 0), 1);
        assert!(snapshot.is_empty_at(Position::new(0, 0)));
    }

    #[test]
    fn test_display_4x4() {
        let board = Board::from_rows(
            GridSize::Four,
            &[&[1, 0, 0, 4], &[0, 0, 2, 0], &[0, 3, 0, 0], &[2, 0, 0, 0]],
        );
        let expected = "\
1 .  . 4
. .  2 .

. 3  . .
2 .  . .";
        assert_eq!(board.to_string(), expected);
    }

    proptest! {
        #[test]
        fn prop_is_safe_matches_oracle(
            cells in prop::collection::vec(0_u8..=4, 16),
            row in 0_u8..4,
            col in 0_u8..4,
            value in 1_u8..=4,
        ) {
            let rows: Vec<&[u8]> = cells.chunks(4).collect();
            let board = Board::from_rows(GridSize::Four, &rows);
            let pos = Position::new(row, col);
            prop_assert_eq!(board.is_safe(pos, value), safe_oracle(&board, pos, value));
        }
    }
}
