//! Dual potentials for the primal-dual method.
//!
//! One potential per worker (`u`) and per task (`v`), kept dual-feasible
//! (`u[i] + v[j] <= cost[i][j]`) from initialization through every delta
//! update. Optimality at termination follows from complementary
//! slackness: every matched edge is tight.

use crate::matrix::CostMatrix;

/// Tolerance for deciding that an edge is tight. Absorbs floating-point
/// drift accumulated by potential updates; fixed by design.
pub const TIGHT_TOL: f64 = 1e-9;

/// Worker and task potentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Potentials {
    u: Vec<f64>,
    v: Vec<f64>,
}

impl Potentials {
    /// Initial feasible potentials: each worker takes its row minimum,
    /// every task starts at zero. `u[i] <= cost[i][j]` holds for all `j`
    /// by construction, so the pair is dual-feasible at return.
    pub fn init(costs: &CostMatrix) -> Self {
        let u = (0..costs.n())
            .map(|i| {
                costs
                    .row(i)
                    .iter()
                    .copied()
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let v = vec![0.0; costs.n()];
        Self { u, v }
    }

    /// True iff edge `(i, j)` is tight under the current potentials.
    pub fn is_tight(&self, i: usize, j: usize, costs: &CostMatrix) -> bool {
        (self.u[i] + self.v[j] - costs.cost(i, j)).abs() < TIGHT_TOL
    }

    /// Raises every worker potential in `workers` by `delta` and lowers
    /// every task potential in `tasks` by the same amount. With `delta`
    /// equal to the minimum slack across the S/T cut this preserves
    /// feasibility and makes at least one new edge out of the cut tight.
    pub fn apply_delta(
        &mut self,
        workers: impl Iterator<Item = usize>,
        tasks: impl Iterator<Item = usize>,
        delta: f64,
    ) {
        for i in workers {
            self.u[i] += delta;
        }
        for j in tasks {
            self.v[j] -= delta;
        }
    }

    /// Worker potentials, indexed by worker.
    pub fn worker_potentials(&self) -> &[f64] {
        &self.u
    }

    /// Task potentials, indexed by task.
    pub fn task_potentials(&self) -> &[f64] {
        &self.v
    }

    /// Sum of all potentials. Equals the optimal total cost once the
    /// matching is perfect (strong duality).
    pub fn dual_objective(&self) -> f64 {
        self.u.iter().sum::<f64>() + self.v.iter().sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![4.0, 2.0, 8.0],
            vec![4.0, 3.0, 7.0],
            vec![3.0, 1.0, 6.0],
        ])
        .unwrap()
    }

    #[test]
    fn init_takes_row_minima() {
        let p = Potentials::init(&matrix());
        assert_eq!(p.worker_potentials(), &[2.0, 3.0, 1.0]);
        assert_eq!(p.task_potentials(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn init_is_dual_feasible() {
        let m = matrix();
        let p = Potentials::init(&m);
        for i in 0..m.n() {
            for j in 0..m.n() {
                assert!(
                    p.worker_potentials()[i] + p.task_potentials()[j]
                        <= m.cost(i, j) + TIGHT_TOL,
                    "infeasible at ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn row_minimum_edges_are_tight() {
        let m = matrix();
        let p = Potentials::init(&m);
        assert!(p.is_tight(0, 1, &m)); // 2 + 0 == 2
        assert!(p.is_tight(1, 1, &m)); // 3 + 0 == 3
        assert!(p.is_tight(2, 1, &m)); // 1 + 0 == 1
        assert!(!p.is_tight(0, 0, &m)); // 2 + 0 != 4
    }

    #[test]
    fn tightness_tolerates_drift() {
        let m = CostMatrix::from_rows(vec![vec![1.0]]).unwrap();
        let mut p = Potentials::init(&m);
        // Nudge u by less than the tolerance
        p.apply_delta(std::iter::once(0), std::iter::empty(), 1e-12);
        assert!(p.is_tight(0, 0, &m));
    }

    #[test]
    fn apply_delta_shifts_both_sides() {
        let m = matrix();
        let mut p = Potentials::init(&m);
        p.apply_delta([0, 1].into_iter(), std::iter::once(1), 1.0);
        assert_eq!(p.worker_potentials(), &[3.0, 4.0, 1.0]);
        assert_eq!(p.task_potentials(), &[0.0, -1.0, 0.0]);
    }

    #[test]
    fn dual_objective_sums_everything() {
        let m = matrix();
        let mut p = Potentials::init(&m);
        assert_eq!(p.dual_objective(), 6.0);
        p.apply_delta(std::iter::once(0), std::iter::once(0), 2.0);
        assert_eq!(p.dual_objective(), 6.0);
    }
}
