//! Trace scripts: a replayable list of scheduler operations.
//!
//! Scripts are YAML or JSON documents with an optional name and a list of
//! ops. A dequeue may carry an expectation that replay checks.
//!
//! ```yaml
//! name: promotion
//! ops:
//!   - { op: enqueue, id: 1, priority: 10 }
//!   - { op: change_priority, id: 1, priority: 100 }
//!   - { op: dequeue, expect: { task: { id: 1, priority: 100 } } }
//!   - { op: dequeue, expect: empty }
//! ```

mod replay;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HeapschedError, Result};
use crate::scheduler::{Priority, Task, TaskId};

pub use replay::{Outcome, Report, Step, replay};

/// One scheduler operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    Enqueue {
        id: TaskId,
        priority: Priority,
    },
    Dequeue {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expect: Option<Expected>,
    },
    ChangePriority {
        id: TaskId,
        priority: Priority,
    },
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Enqueue { id, priority } => write!(f, "enqueue {} @ {}", id, priority),
            Op::Dequeue { .. } => write!(f, "dequeue"),
            Op::ChangePriority { id, priority } => write!(f, "change_priority {} -> {}", id, priority),
        }
    }
}

/// What a dequeue is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Empty,
    Task(Task),
}

impl Expected {
    pub fn matches(&self, actual: Option<Task>) -> bool {
        match (self, actual) {
            (Expected::Empty, None) => true,
            (Expected::Task(expected), Some(actual)) => *expected == actual,
            _ => false,
        }
    }
}

impl From<Option<Task>> for Expected {
    fn from(task: Option<Task>) -> Self {
        task.map_or(Expected::Empty, Expected::Task)
    }
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Empty => write!(f, "empty"),
            Expected::Task(task) => write!(f, "{}", task),
        }
    }
}

/// Script file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Yaml,
    Json,
}

impl ScriptFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yml" | "yaml" => Ok(ScriptFormat::Yaml),
            "json" => Ok(ScriptFormat::Json),
            _ => Err(HeapschedError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A named sequence of operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ops: Vec<Op>,
}

impl Script {
    /// Load a script from a `.yml`, `.yaml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ScriptFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let script = match format {
            ScriptFormat::Yaml => Self::from_yaml_str(&content)?,
            ScriptFormat::Json => Self::from_json_str(&content)?,
        };
        log::info!("Loaded script with {} ops from: {}", script.ops.len(), path.display());
        Ok(script)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Five tasks at priorities 10..50, two dequeues, then task 1 is
    /// promoted past everything left.
    pub fn promotion() -> Self {
        let mut ops: Vec<Op> = (1..=5)
            .map(|id| Op::Enqueue { id, priority: id * 10 })
            .collect();
        ops.extend([
            Op::Dequeue {
                expect: Some(Expected::Task(Task::new(5, 50))),
            },
            Op::Dequeue {
                expect: Some(Expected::Task(Task::new(4, 40))),
            },
            Op::ChangePriority { id: 1, priority: 100 },
            Op::Dequeue {
                expect: Some(Expected::Task(Task::new(1, 100))),
            },
            Op::Dequeue {
                expect: Some(Expected::Task(Task::new(3, 30))),
            },
        ]);
        Self {
            name: Some("promotion".to_string()),
            ops,
        }
    }
}
