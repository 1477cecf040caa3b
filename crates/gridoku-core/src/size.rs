//! Supported grid sizes and their box geometry.

use std::fmt::{self, Display};

/// The side length of a board, restricted to the three supported sizes.
///
/// Each size is a perfect square, so the board always decomposes into
/// `box_size()` × `box_size()` boxes. Encoding the sizes as an enum makes
/// malformed configurations (a side length with no integer square root)
/// unrepresentable; the only validation left is [`GridSize::try_from_cells`]
/// at the configuration boundary.
///
/// # Examples
///
/// ```
/// use gridoku_core::GridSize;
///
/// let size = GridSize::Nine;
/// assert_eq!(size.cells(), 9);
/// assert_eq!(size.box_size(), 3);
/// assert_eq!(size.cell_count(), 81);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GridSize {
    /// A 4×4 board with 2×2 boxes.
    Four,
    /// A 9×9 board with 3×3 boxes.
    Nine,
    /// A 16×16 board with 4×4 boxes.
    Sixteen,
}

/// Error returned when a side length is not a supported grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unsupported grid size {_0}: must be 4, 9, or 16")]
pub struct SizeError(#[error(not(source))] pub usize);

impl GridSize {
    /// Array containing all supported sizes in ascending order.
    pub const ALL: [Self; 3] = [Self::Four, Self::Nine, Self::Sixteen];

    /// Creates a grid size from a side length.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] if `cells` is not 4, 9, or 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::GridSize;
    ///
    /// assert_eq!(GridSize::try_from_cells(9), Ok(GridSize::Nine));
    /// assert!(GridSize::try_from_cells(25).is_err());
    /// ```
    pub fn try_from_cells(cells: usize) -> Result<Self, SizeError> {
        match cells {
            4 => Ok(Self::Four),
            9 => Ok(Self::Nine),
            16 => Ok(Self::Sixteen),
            _ => Err(SizeError(cells)),
        }
    }

    /// Returns the side length of the board (4, 9, or 16).
    #[must_use]
    pub const fn cells(self) -> u8 {
        match self {
            Self::Four => 4,
            Self::Nine => 9,
            Self::Sixteen => 16,
        }
    }

    /// Returns the side length of a box (2, 3, or 4).
    #[must_use]
    pub const fn box_size(self) -> u8 {
        match self {
            Self::Four => 2,
            Self::Nine => 3,
            Self::Sixteen => 4,
        }
    }

    /// Returns the total number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        let n = self.cells() as usize;
        n * n
    }

    /// Returns an iterator over the legal cell values `1..=N`.
    pub fn values(self) -> impl Iterator<Item = u8> {
        1..=self.cells()
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.cells();
        write!(f, "{n}x{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        for size in GridSize::ALL {
            let n = size.cells();
            assert_eq!(size.box_size() * size.box_size(), n);
            assert_eq!(size.cell_count(), usize::from(n) * usize::from(n));
            assert_eq!(size.values().count(), usize::from(n));
        }
    }

    #[test]
    fn test_try_from_cells() {
        assert_eq!(GridSize::try_from_cells(4), Ok(GridSize::Four));
        assert_eq!(GridSize::try_from_cells(9), Ok(GridSize::Nine));
        assert_eq!(GridSize::try_from_cells(16), Ok(GridSize::Sixteen));

        for cells in [0, 1, 2, 3, 5, 8, 25, 36, 81] {
            assert_eq!(GridSize::try_from_cells(cells), Err(SizeError(cells)));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(GridSize::Four.to_string(), "4x4");
        assert_eq!(GridSize::Sixteen.to_string(), "16x16");
        assert_eq!(
            SizeError(25).to_string(),
            "unsupported grid size 25: must be 4, 9, or 16"
        );
    }
}
