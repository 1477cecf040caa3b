//! Puzzle generation for grid-filling puzzles.
//!
//! [`PuzzleGenerator`] produces a fully solved board together with a playable
//! puzzle derived from it by blanking a difficulty-determined number of
//! cells. Generation is reproducible: every round carries the `u64` seed
//! that produced it, and [`PuzzleGenerator::generate_with_seed`] replays it
//! exactly.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::GridSize;
//! use gridoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GridSize::Nine);
//! let round = generator.generate(Difficulty::Easy)?;
//!
//! assert!(round.solution.is_solved());
//! assert_eq!(round.puzzle.count_empty(), 32); // floor(81 * 0.4)
//! # Ok::<_, gridoku_generator::GenerateError>(())
//! ```

pub use self::{difficulty::*, generator::*};

mod difficulty;
mod generator;
