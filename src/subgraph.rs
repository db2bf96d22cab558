//! Read-only queries over the equality subgraph.
//!
//! The equality subgraph is the set of tight edges under the current
//! potentials. It is a derived relation, never stored: every query
//! recomputes tightness from the borrowed matrix and potentials, so
//! repeated calls without a mutation in between return identical results.

use crate::matrix::CostMatrix;
use crate::potentials::Potentials;
use crate::tree::IndexSet;

/// Borrowed view pairing a cost matrix with its current potentials.
#[derive(Debug, Clone, Copy)]
pub struct EqualitySubgraph<'a> {
    costs: &'a CostMatrix,
    potentials: &'a Potentials,
}

impl<'a> EqualitySubgraph<'a> {
    pub fn new(costs: &'a CostMatrix, potentials: &'a Potentials) -> Self {
        Self { costs, potentials }
    }

    /// Tasks tight with `worker`, in ascending task order.
    pub fn tight_neighbors_of(&self, worker: usize) -> Vec<usize> {
        (0..self.costs.n())
            .filter(|&task| self.potentials.is_tight(worker, task, self.costs))
            .collect()
    }

    /// Union of tight neighborhoods over all workers in `workers`.
    pub fn tight_neighbors_of_set(&self, workers: &IndexSet) -> IndexSet {
        let mut neighbors = IndexSet::new(self.costs.n());
        for worker in workers.iter() {
            for task in self.tight_neighbors_of(worker) {
                neighbors.insert(task);
            }
        }
        neighbors
    }

    /// Minimum slack `cost[i][j] - u[i] - v[j]` over workers in `S` and
    /// tasks outside `T`. Non-negative by feasibility, strictly positive
    /// when no tight edge crosses the cut, and finite while `|T| < n`.
    pub fn min_slack(&self, workers: &IndexSet, excluded_tasks: &IndexSet) -> f64 {
        let u = self.potentials.worker_potentials();
        let v = self.potentials.task_potentials();
        let mut delta = f64::INFINITY;
        for worker in workers.iter() {
            for task in 0..self.costs.n() {
                if !excluded_tasks.contains(task) {
                    let slack = self.costs.cost(worker, task) - u[worker] - v[task];
                    delta = delta.min(slack);
                }
            }
        }
        delta
    }
}
