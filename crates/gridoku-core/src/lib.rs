//! Core data structures for grid-filling puzzles.
//!
//! This crate provides the board abstraction shared by the solver, generator,
//! and game-session components. A board is a square matrix of cells holding
//! values `1..=N` (or `0` for empty), where `N` is one of the supported grid
//! sizes (4×4, 9×9, or 16×16) and every row, column, and `√N`×`√N` box must
//! contain each value at most once.
//!
//! # Overview
//!
//! - [`GridSize`]: the three supported board sizes and their box geometry
//! - [`Position`]: a (row, column) coordinate on a board
//! - [`Board`]: the board value type, including the placement safety
//!   predicate used during search and the full-solution validity check
//!
//! Cell values are plain integers throughout. Rendering values above 9 as
//! letters (for 16×16 play) is a presentation concern and never enters this
//! crate.
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Board, GridSize, Position};
//!
//! let mut board = Board::new(GridSize::Four);
//! let pos = Position::new(0, 0);
//!
//! assert!(board.is_safe(pos, 3));
//! board.set(pos, 3);
//!
//! // 3 now conflicts along row 0, column 0, and the top-left box.
//! assert!(!board.is_safe(Position::new(0, 2), 3));
//! assert!(!board.is_safe(Position::new(2, 0), 3));
//! assert!(!board.is_safe(Position::new(1, 1), 3));
//! ```

pub mod board;
pub mod position;
pub mod size;

pub use self::{
    board::Board,
    position::Position,
    size::{GridSize, SizeError},
};
