//! Array-backed binary max-heap of tasks.
//!
//! Storage is a `Vec<Task>` read as a complete binary tree: the children of
//! index `i` sit at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`.
//! Every public method returns with `priority[parent] >= priority[child]`.

use std::cmp::Ordering;

use super::lookup::{LookupMode, PositionIndex};
use super::task::{Priority, Task, TaskId};

/// Priority-ordered task dispatcher.
///
/// Yields the highest-priority pending task first and lets any pending
/// task's priority be changed in place. Equal priorities come out in no
/// particular order.
#[derive(Debug, Clone, Default)]
pub struct PriorityScheduler {
    heap: Vec<Task>,
    /// Present only in `LookupMode::Indexed`.
    index: Option<PositionIndex>,
}

impl PriorityScheduler {
    /// Create an empty scheduler that locates tasks by linear scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scheduler with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_lookup(LookupMode::Scan, capacity)
    }

    /// Create an empty scheduler with the given lookup strategy.
    pub fn with_lookup(mode: LookupMode, capacity: usize) -> Self {
        let index = match mode {
            LookupMode::Scan => None,
            LookupMode::Indexed => Some(PositionIndex::with_capacity(capacity)),
        };
        Self {
            heap: Vec::with_capacity(capacity),
            index,
        }
    }

    /// The lookup strategy used by `change_priority`.
    pub fn lookup_mode(&self) -> LookupMode {
        if self.index.is_some() {
            LookupMode::Indexed
        } else {
            LookupMode::Scan
        }
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add a task. Never fails; storage grows as needed.
    pub fn enqueue(&mut self, task: Task) {
        let pos = self.heap.len();
        self.heap.push(task);
        if let Some(index) = self.index.as_mut() {
            index.insert(task.id, pos);
        }
        self.sift_up(pos);
    }

    /// Remove and return the highest-priority task, or `None` when nothing
    /// is pending.
    pub fn dequeue_highest(&mut self) -> Option<Task> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        // Moves the last element into the root slot.
        let top = self.heap.swap_remove(0);
        if let Some(index) = self.index.as_mut() {
            index.remove(top.id, 0);
            if last > 0 {
                index.relocate(self.heap[0].id, last, 0);
            }
        }

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    /// Highest-priority task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first()
    }

    /// Set the priority of the pending task with identifier `id`.
    ///
    /// When several pending tasks share `id`, the one at the lowest storage
    /// position is changed. Unknown identifiers are ignored.
    pub fn change_priority(&mut self, id: TaskId, new_priority: Priority) {
        let Some(pos) = self.position_of(id) else {
            log::debug!("Ignoring priority change for unknown task {}", id);
            return;
        };

        let old = self.heap[pos].priority;
        self.heap[pos].priority = new_priority;
        log::trace!("Task {} priority {} -> {} at position {}", id, old, new_priority, pos);

        // A raised priority can only violate the invariant toward the root,
        // a lowered one only toward the leaves.
        match new_priority.cmp(&old) {
            Ordering::Greater => self.sift_up(pos),
            Ordering::Less => self.sift_down(pos),
            Ordering::Equal => {}
        }
    }

    /// Whether a task with identifier `id` is pending.
    pub fn contains(&self, id: TaskId) -> bool {
        self.position_of(id).is_some()
    }

    /// Current priority of the pending task with identifier `id`.
    pub fn priority_of(&self, id: TaskId) -> Option<Priority> {
        self.position_of(id).map(|pos| self.heap[pos].priority)
    }

    /// Pending tasks in storage order (not priority order).
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.heap.iter()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.heap.clear();
        if let Some(index) = self.index.as_mut() {
            index.clear();
        }
    }

    /// Check the max-heap property over the whole storage.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].priority >= self.heap[i].priority)
    }

    fn position_of(&self, id: TaskId) -> Option<usize> {
        match &self.index {
            Some(index) => index.first(id),
            None => self.heap.iter().position(|task| task.id == id),
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[parent].priority >= self.heap[pos].priority {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut largest = pos;

            if left < len && self.heap[left].priority > self.heap[largest].priority {
                largest = left;
            }
            if right < len && self.heap[right].priority > self.heap[largest].priority {
                largest = right;
            }
            if largest == pos {
                break;
            }

            self.swap(pos, largest);
            pos = largest;
        }
    }

    /// The only place heap positions are exchanged; keeps the index in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        if let Some(index) = self.index.as_mut() {
            let (now_at_a, now_at_b) = (self.heap[a].id, self.heap[b].id);
            if now_at_a != now_at_b {
                index.relocate(now_at_a, b, a);
                index.relocate(now_at_b, a, b);
            }
        }
    }
}

impl Extend<Task> for PriorityScheduler {
    fn extend<I: IntoIterator<Item = Task>>(&mut self, iter: I) {
        for task in iter {
            self.enqueue(task);
        }
    }
}

impl FromIterator<Task> for PriorityScheduler {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        let mut scheduler = Self::new();
        scheduler.extend(iter);
        scheduler
    }
}

impl<'a> IntoIterator for &'a PriorityScheduler {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
