//! Round management for grid-filling puzzle games.
//!
//! A [`Round`] owns one generated puzzle together with its solution of
//! record, for the lifetime of that round. It is the boundary the
//! presentation layer talks to: it serves the stored solution for "solve"
//! actions and verdicts user entries against it for "check" actions.
//! Starting a new round means constructing a new `Round` value, which
//! replaces puzzle and solution atomically.
//!
//! Everything visual (cell widgets, selection, timers, scoring,
//! notifications, rendering values above 9 as letters) stays on the
//! presentation side; the only data exchanged are boards and positions.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::GridSize;
//! use gridoku_game::Round;
//! use gridoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GridSize::Nine);
//! let round = Round::new(generator.generate(Difficulty::Easy)?);
//!
//! // Checking the solution against itself reports a completed round.
//! let report = round.check(round.solution())?;
//! assert!(report.complete);
//! assert!(report.mismatches.is_empty());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

pub use self::round::*;

mod round;
