//! Identifier lookup strategies.
//!
//! Heap positions change on every swap, so finding a task by id needs
//! either a scan of storage or a side index kept in lock-step with swaps.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// How `change_priority` locates a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// Linear scan of heap storage. O(n), no extra memory.
    #[default]
    Scan,
    /// Identifier -> position index. O(log n), updated on every swap.
    Indexed,
}

impl std::fmt::Display for LookupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupMode::Scan => write!(f, "scan"),
            LookupMode::Indexed => write!(f, "indexed"),
        }
    }
}

/// Maps each identifier to every heap position currently holding it.
///
/// Identifiers are not required to be unique, so each entry is an ordered
/// set; its smallest element is the position a linear scan would find first.
#[derive(Debug, Clone, Default)]
pub(crate) struct PositionIndex {
    positions: HashMap<TaskId, BTreeSet<usize>>,
}

impl PositionIndex {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, id: TaskId, pos: usize) {
        self.positions.entry(id).or_default().insert(pos);
    }

    pub(crate) fn remove(&mut self, id: TaskId, pos: usize) {
        if let Some(set) = self.positions.get_mut(&id) {
            set.remove(&pos);
            if set.is_empty() {
                self.positions.remove(&id);
            }
        }
    }

    /// Record that `id` moved from `from` to `to`.
    pub(crate) fn relocate(&mut self, id: TaskId, from: usize, to: usize) {
        self.remove(id, from);
        self.insert(id, to);
    }

    /// Lowest heap position holding `id`.
    pub(crate) fn first(&self, id: TaskId) -> Option<usize> {
        self.positions.get(&id).and_then(|set| set.first().copied())
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
    }

    /// Total number of tracked positions across all identifiers.
    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        self.positions.values().map(BTreeSet::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn holds(&self, id: TaskId, pos: usize) -> bool {
        self.positions.get(&id).is_some_and(|set| set.contains(&pos))
    }
}
