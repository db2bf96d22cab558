//! Cost matrix for assignment problems.
//!
//! Immutable square grid of `f64` costs in row-major storage, plus the
//! plain-text parser for the CLI input format (one comma-separated row
//! per non-empty line).

use crate::{AssignmentError, Result};

/// Validated n×n cost matrix. `cost(i, j)` is the cost of assigning
/// worker (row) `i` to task (column) `j`. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    /// Row-major cost data
    data: Vec<f64>,
    /// Side length (workers == tasks)
    n: usize,
}

impl CostMatrix {
    /// Builds a matrix from parsed rows, rejecting empty or non-square
    /// input before the solver ever sees it.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AssignmentError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(AssignmentError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
        }

        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            data.extend(row);
        }
        Ok(Self { data, n })
    }

    /// Parses the text input format: one matrix row per non-empty line,
    /// values separated by commas, whitespace around each value ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut values = Vec::new();
            for token in line.split(',') {
                let token = token.trim();
                let value: f64 = token.parse().map_err(|_| AssignmentError::MalformedValue {
                    line: index + 1,
                    token: token.to_string(),
                })?;
                values.push(value);
            }
            rows.push(values);
        }
        Self::from_rows(rows)
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of assigning worker `i` to task `j`.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// The costs of worker `i`'s row.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
