//! Exhaustive backtracking solver for grid-filling puzzles.
//!
//! [`BacktrackSolver`] completes a partially filled [`Board`] in place, or
//! reports that no completion exists. The search is plain depth-first
//! backtracking: it stops at the first full completion and makes no claim
//! about uniqueness.
//!
//! [`Board`]: gridoku_core::Board

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
