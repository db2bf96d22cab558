//! Phase orchestration for the Hungarian algorithm.
//!
//! One phase per free worker: grow the alternating tree over tight
//! edges, update potentials whenever the tree stalls, and commit the
//! augmenting path once a free task is reached. Exactly `n` phases run,
//! each ending with the matching one pair larger, so the whole solve is
//! O(n³).

use crate::matching::Matching;
use crate::matrix::CostMatrix;
use crate::potentials::Potentials;
use crate::subgraph::EqualitySubgraph;
use crate::trace::SolveObserver;
use crate::tree::{AlternatingTree, PathNode};

/// Optimal result of a solve: a perfect worker→task bijection.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Task assigned to each worker: worker `i` gets `mapping[i]`.
    pub mapping: Vec<usize>,
    /// Total cost of the assignment.
    pub total_cost: f64,
}

impl Assignment {
    /// Iterates `(worker, task)` pairs in worker order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mapping.iter().copied().enumerate()
    }
}

/// Owns the mutable solve state (potentials and matching) for one run
/// over a borrowed cost matrix.
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    costs: &'a CostMatrix,
    potentials: Potentials,
    matching: Matching,
}

impl<'a> Solver<'a> {
    pub fn new(costs: &'a CostMatrix) -> Self {
        Self {
            costs,
            potentials: Potentials::init(costs),
            matching: Matching::new(costs.n()),
        }
    }

    /// Runs phases until the matching is perfect and returns the optimal
    /// assignment. Infallible: feasibility and the tree invariants hold
    /// at every step once the matrix is validated.
    pub fn solve(&mut self, observer: &mut dyn SolveObserver) -> Assignment {
        observer.initial_potentials(
            self.potentials.worker_potentials(),
            self.potentials.task_potentials(),
        );

        while let Some(free_worker) = self.matching.first_free_worker() {
            observer.phase_started(self.matching.len(), free_worker);
            self.run_phase(free_worker, observer);
            observer.phase_finished();
        }

        let mapping: Vec<usize> = (0..self.costs.n())
            .map(|worker| self.matching.task_of(worker).expect("matching is perfect"))
            .collect();
        let total_cost = mapping
            .iter()
            .enumerate()
            .map(|(worker, &task)| self.costs.cost(worker, task))
            .sum();
        Assignment {
            mapping,
            total_cost,
        }
    }

    /// Current dual potentials. After [`solve`](Self::solve) the dual
    /// objective equals the optimal total cost.
    pub fn potentials(&self) -> &Potentials {
        &self.potentials
    }

    /// Grows a tree rooted at `free_worker` until it augments.
    fn run_phase(&mut self, free_worker: usize, observer: &mut dyn SolveObserver) {
        let mut tree = AlternatingTree::new(self.costs.n(), free_worker);
        let mut just_updated = false;

        loop {
            let graph = EqualitySubgraph::new(self.costs, &self.potentials);
            let neighbors = graph.tight_neighbors_of_set(tree.workers());
            if !just_updated {
                observer.tree_sets(&tree.workers().to_vec(), &tree.tasks().to_vec());
            }
            just_updated = false;

            if neighbors == *tree.tasks() {
                // Stalled: every tight edge from S stays inside T. The
                // minimum slack is strictly positive here, and applying
                // it keeps the duals feasible while making at least one
                // edge out of the cut tight.
                let delta = graph.min_slack(tree.workers(), tree.tasks());
                self.potentials
                    .apply_delta(tree.workers().iter(), tree.tasks().iter(), delta);
                observer.potentials_updated(
                    delta,
                    self.potentials.worker_potentials(),
                    self.potentials.task_potentials(),
                );
                just_updated = true;
                continue;
            }

            let (worker, task) = self
                .first_crossing_edge(&tree)
                .expect("N(S) != T implies a tight edge across the cut");
            tree.set_task_parent(task, worker);

            match self.matching.worker_of(task) {
                None => {
                    observer.tight_edge(worker, task, None);
                    self.augment(&tree, task, observer);
                    return;
                }
                Some(partner) => {
                    observer.tight_edge(worker, task, Some(partner));
                    tree.extend(task, partner);
                }
            }
        }
    }

    /// First tight edge from `S` to a task outside `T`, scanning workers
    /// ascending and tasks ascending per worker. The scan order is fixed
    /// so runs (and traces) are deterministic.
    fn first_crossing_edge(&self, tree: &AlternatingTree) -> Option<(usize, usize)> {
        let graph = EqualitySubgraph::new(self.costs, &self.potentials);
        for worker in tree.workers().iter() {
            for task in graph.tight_neighbors_of(worker) {
                if !tree.tasks().contains(task) {
                    return Some((worker, task));
                }
            }
        }
        None
    }

    /// Flips the alternating path ending at `last_task`: matched edges
    /// along the path leave the matching, tree edges enter it. Removals
    /// are applied before additions; the matching grows by exactly one.
    fn augment(
        &mut self,
        tree: &AlternatingTree,
        last_task: usize,
        observer: &mut dyn SolveObserver,
    ) {
        let path = tree.alternating_path(last_task);
        observer.augmenting_path(&path);
        observer.matching_state(&self.matching.pairs());

        let mut removals = Vec::new();
        let mut additions = Vec::new();
        for step in path.windows(2) {
            match (step[0], step[1]) {
                (PathNode::Worker(worker), PathNode::Task(task)) => {
                    additions.push((worker, task));
                }
                (PathNode::Task(task), PathNode::Worker(worker)) => {
                    removals.push((worker, task));
                }
                _ => {}
            }
        }

        for &(worker, task) in &removals {
            observer.edge_removed(worker, task);
            self.matching.remove(worker);
        }
        for &(worker, task) in &additions {
            observer.edge_added(worker, task);
            self.matching.insert(worker, task);
        }

        observer.matching_state(&self.matching.pairs());
    }
}
