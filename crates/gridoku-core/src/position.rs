//! Board position (row, column) coordinates.

use std::fmt::{self, Display};

use crate::GridSize;

/// A (row, column) coordinate on a board.
///
/// Both coordinates are zero-based. Positions are plain values and carry no
/// reference to a particular board size; boards validate coordinates when
/// indexed.
///
/// # Examples
///
/// ```
/// use gridoku_core::{GridSize, Position};
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row, 4);
/// assert_eq!(pos.col, 7);
///
/// // (4, 7) lies in the middle-right 3×3 box of a 9×9 board.
/// assert_eq!(pos.box_origin(GridSize::Nine), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based row index.
    pub row: u8,
    /// Zero-based column index.
    pub col: u8,
}

impl Position {
    /// Creates a position from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the top-left corner of the box containing this position.
    #[must_use]
    pub const fn box_origin(self, size: GridSize) -> Self {
        let b = size.box_size();
        Self::new(self.row / b * b, self.col / b * b)
    }

    /// Returns an iterator over all positions of a board in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::{GridSize, Position};
    ///
    /// let positions: Vec<_> = Position::all(GridSize::Four).collect();
    /// assert_eq!(positions.len(), 16);
    /// assert_eq!(positions[0], Position::new(0, 0));
    /// assert_eq!(positions[5], Position::new(1, 1));
    /// ```
    pub fn all(size: GridSize) -> impl Iterator<Item = Self> {
        let n = size.cells();
        (0..n).flat_map(move |row| (0..n).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
