//! Kuhn-Munkres (Hungarian) linear assignment solver.
//!
//! Given an n×n matrix of real-valued costs, finds the worker→task
//! bijection of minimum total cost using the potential-based primal-dual
//! method: dual potentials are kept feasible, an alternating tree is grown
//! over the equality subgraph, and potentials are updated whenever the
//! tree stalls, until an augmenting path commits one new pair per phase.
//!
//! # Example
//!
//! ```
//! use munkres::matrix::CostMatrix;
//! use munkres::solver::Solver;
//! use munkres::trace::NullTrace;
//!
//! let costs = CostMatrix::from_rows(vec![
//!     vec![4.0, 2.0, 8.0],
//!     vec![4.0, 3.0, 7.0],
//!     vec![3.0, 1.0, 6.0],
//! ]).unwrap();
//!
//! let assignment = Solver::new(&costs).solve(&mut NullTrace);
//! assert_eq!(assignment.total_cost, 12.0);
//! ```

pub mod matching;
pub mod matrix;
pub mod potentials;
pub mod solver;
pub mod subgraph;
pub mod trace;
pub mod tree;

use thiserror::Error;

/// Errors produced while building a cost matrix from input.
///
/// Once a matrix is validated the solver itself cannot fail: dual
/// feasibility and the tree invariants hold by construction, so the only
/// failure domain is malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// The input contained no rows.
    #[error("cost matrix is empty")]
    Empty,
    /// A row's length disagrees with the number of rows.
    #[error("cost matrix is not square: row {row} has {len} values, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A token could not be parsed as a real number.
    #[error("line {line}: malformed cost value {token:?}")]
    MalformedValue { line: usize, token: String },
}

pub type Result<T> = ::core::result::Result<T, AssignmentError>;
