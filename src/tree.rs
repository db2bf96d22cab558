//! Alternating-tree search state for one phase.
//!
//! The tree covers a worker set `S` and task set `T` plus two parent
//! maps, and is rebuilt from scratch for every phase. Sets are stored as
//! boolean arrays over the fixed index range so that iteration is always
//! ascending — the scan order is what makes traces reproducible.

/// Set of indices in `0..n` backed by a boolean array.
///
/// Membership tests are O(1) and iteration yields members in ascending
/// order, unlike a hashed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSet {
    members: Vec<bool>,
    len: usize,
}

impl IndexSet {
    /// Creates an empty set over `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            members: vec![false; n],
            len: 0,
        }
    }

    /// Inserts `index`; inserting an existing member is a no-op.
    pub fn insert(&mut self, index: usize) {
        if !self.members[index] {
            self.members[index] = true;
            self.len += 1;
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.members[index]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(index, &member)| member.then_some(index))
    }

    /// Members collected in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// A node on an alternating path: worker (row) or task (column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathNode {
    Worker(usize),
    Task(usize),
}

/// Hungarian tree grown during a single phase.
///
/// `task_parent[j]` is the worker in `S` whose tight edge first reached
/// task `j`; `worker_parent[i]` is the task whose matched worker `i` was
/// pulled into `S`. The root (the phase's free worker) has no parent, so
/// `|S| = |T| + 1` holds at all times.
#[derive(Debug, Clone)]
pub struct AlternatingTree {
    workers: IndexSet,
    tasks: IndexSet,
    task_parent: Vec<Option<usize>>,
    worker_parent: Vec<Option<usize>>,
}

impl AlternatingTree {
    /// Creates a fresh tree rooted at `free_worker`.
    pub fn new(n: usize, free_worker: usize) -> Self {
        let mut workers = IndexSet::new(n);
        workers.insert(free_worker);
        Self {
            workers,
            tasks: IndexSet::new(n),
            task_parent: vec![None; n],
            worker_parent: vec![None; n],
        }
    }

    /// The covered worker set `S`.
    pub fn workers(&self) -> &IndexSet {
        &self.workers
    }

    /// The covered task set `T`.
    pub fn tasks(&self) -> &IndexSet {
        &self.tasks
    }

    /// Records the tight edge `(worker, task)` that discovered `task`.
    pub fn set_task_parent(&mut self, task: usize, worker: usize) {
        self.task_parent[task] = Some(worker);
    }

    /// Extends the tree through a matched task: `worker` (the task's
    /// current partner) joins `S` with `task` as its parent, and `task`
    /// joins `T`.
    pub fn extend(&mut self, task: usize, worker: usize) {
        self.worker_parent[worker] = Some(task);
        self.workers.insert(worker);
        self.tasks.insert(task);
    }

    /// Reconstructs the alternating path that ends at `last_task` by
    /// following parents back to the root, returned in root-to-target
    /// order (starts at the free worker, ends at the free task).
    pub fn alternating_path(&self, last_task: usize) -> Vec<PathNode> {
        let mut nodes = Vec::new();
        let mut task = Some(last_task);
        while let Some(t) = task {
            nodes.push(PathNode::Task(t));
            match self.task_parent[t] {
                None => break,
                Some(worker) => {
                    nodes.push(PathNode::Worker(worker));
                    task = self.worker_parent[worker];
                }
            }
        }
        nodes.reverse();
        nodes
    }
}
