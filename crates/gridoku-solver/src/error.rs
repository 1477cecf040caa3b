//! Solver error types.

/// Errors reported by the backtracking solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The configured node budget ran out before the search finished.
    ///
    /// Distinct from an unsatisfiable board: the search was cut short, so
    /// nothing is known about whether a completion exists.
    #[display("search budget exhausted after visiting {visited} nodes")]
    SearchBudgetExhausted {
        /// Number of search nodes visited before giving up.
        visited: u64,
    },
}
