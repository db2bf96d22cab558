//! Partial injective matching between workers and tasks.

/// Worker→task matching with a reverse index for O(1) partner lookups.
///
/// Injective by construction: `insert` refuses to double-book either
/// side. Pairs may be rewired during augmentation (removed then re-added
/// against a different partner) but the size only ever grows by one per
/// completed phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    task_of: Vec<Option<usize>>,
    worker_of: Vec<Option<usize>>,
    len: usize,
}

impl Matching {
    /// Creates an empty matching over `n` workers and `n` tasks.
    pub fn new(n: usize) -> Self {
        Self {
            task_of: vec![None; n],
            worker_of: vec![None; n],
            len: 0,
        }
    }

    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Task matched to `worker`, if any.
    pub fn task_of(&self, worker: usize) -> Option<usize> {
        self.task_of[worker]
    }

    /// Worker matched to `task`, if any.
    pub fn worker_of(&self, task: usize) -> Option<usize> {
        self.worker_of[task]
    }

    /// Lowest-index worker without a task, if the matching is not yet
    /// perfect.
    pub fn first_free_worker(&self) -> Option<usize> {
        self.task_of.iter().position(Option::is_none)
    }

    /// Matches `worker` with `task`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is already matched; augmentation removes
    /// edges before re-adding them, so a collision is a logic error.
    pub fn insert(&mut self, worker: usize, task: usize) {
        assert!(self.task_of[worker].is_none(), "worker {worker} already matched");
        assert!(self.worker_of[task].is_none(), "task {task} already matched");
        self.task_of[worker] = Some(task);
        self.worker_of[task] = Some(worker);
        self.len += 1;
    }

    /// Removes the pair anchored at `worker`, if present.
    pub fn remove(&mut self, worker: usize) {
        if let Some(task) = self.task_of[worker].take() {
            self.worker_of[task] = None;
            self.len -= 1;
        }
    }

    /// Matched pairs sorted by worker index.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.task_of
            .iter()
            .enumerate()
            .filter_map(|(worker, task)| task.map(|t| (worker, t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let m = Matching::new(3);
        assert!(m.is_empty());
        assert_eq!(m.first_free_worker(), Some(0));
        assert_eq!(m.pairs(), vec![]);
    }

    #[test]
    fn insert_links_both_directions() {
        let mut m = Matching::new(3);
        m.insert(1, 2);
        assert_eq!(m.len(), 1);
        assert_eq!(m.task_of(1), Some(2));
        assert_eq!(m.worker_of(2), Some(1));
        assert_eq!(m.first_free_worker(), Some(0));
    }

    #[test]
    fn remove_clears_both_directions() {
        let mut m = Matching::new(2);
        m.insert(0, 1);
        m.remove(0);
        assert!(m.is_empty());
        assert_eq!(m.worker_of(1), None);
        // Removing an unmatched worker is a no-op
        m.remove(1);
        assert!(m.is_empty());
    }

    #[test]
    fn rewiring_keeps_injectivity() {
        let mut m = Matching::new(3);
        m.insert(0, 0);
        m.remove(0);
        m.insert(0, 1);
        m.insert(1, 0);
        assert_eq!(m.pairs(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn free_worker_is_lowest_index() {
        let mut m = Matching::new(3);
        m.insert(0, 2);
        m.insert(2, 0);
        assert_eq!(m.first_free_worker(), Some(1));
        m.insert(1, 1);
        assert_eq!(m.first_free_worker(), None);
    }

    #[test]
    #[should_panic(expected = "already matched")]
    fn double_booking_a_task_panics() {
        let mut m = Matching::new(2);
        m.insert(0, 1);
        m.insert(1, 1);
    }
}
