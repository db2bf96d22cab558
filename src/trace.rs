//! Step tracing for the solver.
//!
//! The solver reports every step through a [`SolveObserver`] instead of
//! printing: the algorithm stays free of I/O and tests can record or
//! assert on the exact event stream. [`ConsoleTrace`] renders the events
//! in the solver's verbose text format; [`NullTrace`] discards them.

use std::io::Write;

use crate::matrix::CostMatrix;
use crate::tree::PathNode;

/// Observer invoked at the solver's extension points.
///
/// All methods default to no-ops, so implementations only override the
/// events they care about. Observers receive read-only snapshots and
/// cannot influence the algorithm; with the solver's deterministic scan
/// order the event stream is reproducible for a given matrix.
pub trait SolveObserver {
    /// Potentials as initialized from the row minima.
    fn initial_potentials(&mut self, _u: &[f64], _v: &[f64]) {}

    /// A phase begins: `matched` pairs exist, `free_worker` is the root.
    fn phase_started(&mut self, _matched: usize, _free_worker: usize) {}

    /// The tree's current S and T sets, in ascending index order.
    fn tree_sets(&mut self, _workers: &[usize], _tasks: &[usize]) {}

    /// No tight edge left the covered tasks; potentials moved by `delta`.
    fn potentials_updated(&mut self, _delta: f64, _u: &[f64], _v: &[f64]) {}

    /// A tight edge `(worker, task)` crossing the cut was discovered.
    /// `matched_to` names the task's current partner, or `None` if the
    /// task is free and the phase will augment.
    fn tight_edge(&mut self, _worker: usize, _task: usize, _matched_to: Option<usize>) {}

    /// The alternating path about to be flipped, root to target.
    fn augmenting_path(&mut self, _path: &[PathNode]) {}

    /// The matching's pairs (sorted by worker), reported before and
    /// after the augmentation is applied.
    fn matching_state(&mut self, _pairs: &[(usize, usize)]) {}

    /// An edge leaving the matching during augmentation.
    fn edge_removed(&mut self, _worker: usize, _task: usize) {}

    /// An edge entering the matching during augmentation.
    fn edge_added(&mut self, _worker: usize, _task: usize) {}

    /// The phase committed its new pair.
    fn phase_finished(&mut self) {}
}

/// Silent observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTrace;

impl SolveObserver for NullTrace {}

/// Renders solver events as the verbose console trace.
///
/// Output is written to any `io::Write` sink; write failures are ignored
/// (tracing is an observer, never a failure path).
pub struct ConsoleTrace<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Prints the problem banner and the cost matrix, values to two
    /// decimal places. Called before solving.
    pub fn problem_header(&mut self, costs: &CostMatrix) {
        let _ = writeln!(self.out, "=== Assignment Problem ===");
        let _ = writeln!(self.out, "{}x{} cost matrix:", costs.n(), costs.n());
        for i in 0..costs.n() {
            let _ = writeln!(self.out, "{}", fmt_values(costs.row(i)));
        }
        let _ = writeln!(self.out);
    }

    fn potentials(&mut self, u: &[f64], v: &[f64]) {
        let _ = writeln!(self.out, "U: [ {} ]", fmt_values(u));
        let _ = writeln!(self.out, "V: [ {} ]", fmt_values(v));
    }
}

impl<W: Write> SolveObserver for ConsoleTrace<W> {
    fn initial_potentials(&mut self, u: &[f64], v: &[f64]) {
        let _ = writeln!(self.out, "Initial potentials:");
        self.potentials(u, v);
        let _ = writeln!(self.out);
    }

    fn phase_started(&mut self, matched: usize, free_worker: usize) {
        let _ = writeln!(
            self.out,
            "--- Matching size {}, start from free row r={} ---",
            matched, free_worker
        );
    }

    fn tree_sets(&mut self, workers: &[usize], tasks: &[usize]) {
        let _ = writeln!(self.out, "Set S: {{{}}}", fmt_indices(workers));
        let _ = writeln!(self.out, "Set T: {{{}}}", fmt_indices(tasks));
    }

    fn potentials_updated(&mut self, delta: f64, u: &[f64], v: &[f64]) {
        let _ = writeln!(
            self.out,
            "No tight edge outside T. Update potentials by delta={:.0}",
            delta
        );
        self.potentials(u, v);
    }

    fn tight_edge(&mut self, worker: usize, task: usize, matched_to: Option<usize>) {
        let _ = write!(self.out, "Tight edge discovered: ({}, {}). ", worker, task);
        match matched_to {
            None => {
                let _ = writeln!(self.out, "Column {} is free: AUGMENT MATCHING", task);
            }
            Some(partner) => {
                let _ = writeln!(
                    self.out,
                    "Column {} is matched to row {}: EXTEND TREE",
                    task, partner
                );
            }
        }
    }

    fn augmenting_path(&mut self, path: &[PathNode]) {
        let mut rendered = String::new();
        for (index, node) in path.iter().enumerate() {
            match node {
                PathNode::Worker(worker) => {
                    if index > 0 {
                        rendered.push_str("=>");
                    }
                    rendered.push_str(&format!("R{}", worker));
                }
                PathNode::Task(task) => {
                    if index > 0 {
                        rendered.push_str("->");
                    }
                    rendered.push_str(&format!("C{}", task));
                }
            }
        }
        let _ = writeln!(self.out, "Augmenting path: {}", rendered);
    }

    fn matching_state(&mut self, pairs: &[(usize, usize)]) {
        let rendered: Vec<String> = pairs
            .iter()
            .map(|(worker, task)| format!("R{}->C{}", worker, task))
            .collect();
        let _ = writeln!(self.out, "Matching: {}", rendered.join(", "));
    }

    fn edge_removed(&mut self, worker: usize, task: usize) {
        let _ = writeln!(self.out, "Removing edge R{}->C{}", worker, task);
    }

    fn edge_added(&mut self, worker: usize, task: usize) {
        let _ = writeln!(self.out, "Adding edge R{}->C{}", worker, task);
    }

    fn phase_finished(&mut self) {
        let _ = writeln!(self.out);
    }
}

fn fmt_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format!("{:4.2}", value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn fmt_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: FnOnce(&mut ConsoleTrace<&mut Vec<u8>>)>(f: F) -> String {
        let mut buffer = Vec::new();
        let mut trace = ConsoleTrace::new(&mut buffer);
        f(&mut trace);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn formats_potentials_to_two_decimals() {
        let out = render(|t| t.initial_potentials(&[2.0, 3.0], &[0.0, -1.5]));
        assert_eq!(out, "Initial potentials:\nU: [ 2.00 3.00 ]\nV: [ 0.00 -1.50 ]\n\n");
    }

    #[test]
    fn formats_tree_sets_ascending() {
        let out = render(|t| t.tree_sets(&[0, 2], &[1]));
        assert_eq!(out, "Set S: {0, 2}\nSet T: {1}\n");
    }

    #[test]
    fn empty_sets_render_as_empty_braces() {
        let out = render(|t| t.tree_sets(&[1], &[]));
        assert_eq!(out, "Set S: {1}\nSet T: {}\n");
    }

    #[test]
    fn delta_is_printed_without_decimals() {
        let out = render(|t| t.potentials_updated(1.0, &[3.0], &[-1.0]));
        assert_eq!(
            out,
            "No tight edge outside T. Update potentials by delta=1\nU: [ 3.00 ]\nV: [ -1.00 ]\n"
        );
    }

    #[test]
    fn tight_edge_line_covers_both_outcomes() {
        let free = render(|t| t.tight_edge(1, 2, None));
        assert_eq!(
            free,
            "Tight edge discovered: (1, 2). Column 2 is free: AUGMENT MATCHING\n"
        );
        let matched = render(|t| t.tight_edge(1, 0, Some(0)));
        assert_eq!(
            matched,
            "Tight edge discovered: (1, 0). Column 0 is matched to row 0: EXTEND TREE\n"
        );
    }

    #[test]
    fn path_alternates_arrow_styles() {
        let out = render(|t| {
            t.augmenting_path(&[
                PathNode::Worker(1),
                PathNode::Task(0),
                PathNode::Worker(0),
                PathNode::Task(1),
            ])
        });
        assert_eq!(out, "Augmenting path: R1->C0=>R0->C1\n");
    }

    #[test]
    fn matching_line_keeps_trailing_space_when_empty() {
        let out = render(|t| t.matching_state(&[]));
        assert_eq!(out, "Matching: \n");
        let out = render(|t| t.matching_state(&[(0, 1), (1, 0)]));
        assert_eq!(out, "Matching: R0->C1, R1->C0\n");
    }

    #[test]
    fn header_formats_matrix_rows() {
        let costs = crate::matrix::CostMatrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![10.5, 4.0],
        ])
        .unwrap();
        let mut buffer = Vec::new();
        let mut trace = ConsoleTrace::new(&mut buffer);
        trace.problem_header(&costs);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "=== Assignment Problem ===\n2x2 cost matrix:\n1.00 2.00\n10.50 4.00\n\n"
        );
    }
}
