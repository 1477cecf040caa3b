//! Difficulty levels and their cell-removal fractions.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use gridoku_core::GridSize;
use log::warn;

/// Puzzle difficulty, expressed as the fraction of cells blanked when
/// deriving a puzzle from a solved board.
///
/// Higher difficulty removes more cells, leaving fewer clues. The fractions
/// control cells *removed*, not cells kept.
///
/// # Examples
///
/// ```
/// use gridoku_generator::Difficulty;
///
/// assert_eq!(Difficulty::Easy.removal_fraction(), 0.4);
/// assert_eq!(Difficulty::Expert.removal_fraction(), 0.7);
/// assert_eq!(Difficulty::default(), Difficulty::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Blanks 40% of the cells.
    Easy,
    /// Blanks 50% of the cells.
    #[default]
    Medium,
    /// Blanks 60% of the cells.
    Hard,
    /// Blanks 70% of the cells.
    Expert,
}

/// Error returned by the strict [`FromStr`] parse of [`Difficulty`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unrecognized difficulty label {_0:?}")]
pub struct ParseDifficultyError(#[error(not(source))] pub String);

impl Difficulty {
    /// Array containing all difficulties in ascending order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the fraction of cells blanked at this difficulty.
    #[must_use]
    pub const fn removal_fraction(self) -> f64 {
        match self {
            Self::Easy => 0.4,
            Self::Medium => 0.5,
            Self::Hard => 0.6,
            Self::Expert => 0.7,
        }
    }

    /// Returns the exact number of cells blanked on a board of `size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridoku_core::GridSize;
    /// use gridoku_generator::Difficulty;
    ///
    /// assert_eq!(Difficulty::Medium.removal_count(GridSize::Four), 8);
    /// assert_eq!(Difficulty::Expert.removal_count(GridSize::Nine), 56);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn removal_count(self, size: GridSize) -> usize {
        (size.cell_count() as f64 * self.removal_fraction()).floor() as usize
    }

    /// Parses a difficulty label leniently, falling back to [`Medium`].
    ///
    /// The fallback is a deliberate default for callers that pass through
    /// free-form labels; it is surfaced with a warning rather than silently
    /// masking the caller's typo. Use the [`FromStr`] implementation when a
    /// bad label should be an error instead.
    ///
    /// [`Medium`]: Difficulty::Medium
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|err| {
            warn!("{err}, falling back to {}", Self::Medium);
            Self::Medium
        })
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}
