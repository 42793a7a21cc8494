//! Task records held by the scheduler.

use serde::{Deserialize, Serialize};

/// Caller-assigned task identifier.
pub type TaskId = i64;

/// Task priority. Higher = more urgent = dequeued first.
pub type Priority = i64;

/// A pending unit of work.
///
/// The scheduler owns every pending task. Callers receive copies from
/// `dequeue_highest` and shared references from `peek`/`iter`, so the only
/// way to change a pending task's priority is `change_priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub priority: Priority,
}

impl Task {
    /// Create a new task.
    pub fn new(id: TaskId, priority: Priority) -> Self {
        Self { id, priority }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task {} (priority {})", self.id, self.priority)
    }
}
