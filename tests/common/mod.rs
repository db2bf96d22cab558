//! Common test helpers for solver integration tests.

#![allow(dead_code)]

use munkres::matrix::CostMatrix;
use rand::rngs::StdRng;
use rand::Rng;

/// Exhaustive minimum over all n! assignments. Only usable for small n;
/// serves as the optimality oracle for the solver.
pub fn brute_force_minimum(costs: &CostMatrix) -> f64 {
    fn descend(costs: &CostMatrix, row: usize, used: &mut [bool], acc: f64, best: &mut f64) {
        if row == costs.n() {
            if acc < *best {
                *best = acc;
            }
            return;
        }
        for task in 0..costs.n() {
            if !used[task] {
                used[task] = true;
                descend(costs, row + 1, used, acc + costs.cost(row, task), best);
                used[task] = false;
            }
        }
    }

    let mut used = vec![false; costs.n()];
    let mut best = f64::INFINITY;
    descend(costs, 0, &mut used, 0.0, &mut best);
    best
}

/// Random n×n matrix of integer-valued costs in 0..100. Integer values
/// keep every candidate total exactly representable, so oracle
/// comparisons can be exact.
pub fn random_matrix(rng: &mut StdRng, n: usize) -> CostMatrix {
    let rows = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(0..100) as f64).collect())
        .collect();
    CostMatrix::from_rows(rows).expect("generated matrix is square")
}

/// Asserts that `mapping` is a bijection over `0..mapping.len()`.
pub fn assert_is_permutation(mapping: &[usize]) {
    let mut seen = vec![false; mapping.len()];
    for &task in mapping {
        assert!(task < mapping.len(), "task {} out of range", task);
        assert!(!seen[task], "task {} assigned twice", task);
        seen[task] = true;
    }
}
