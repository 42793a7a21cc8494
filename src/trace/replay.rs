//! Replay a script against a scheduler, checking the heap after each step.

use serde::Serialize;

use super::{Expected, Op, Script};
use crate::error::{HeapschedError, Result};
use crate::scheduler::{LookupMode, PriorityScheduler, Task};

/// Result of applying one op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Enqueued { pending: usize },
    Dequeued { task: Option<Task> },
    PriorityChanged { found: bool },
}

/// One applied op. `number` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub number: usize,
    pub op: Op,
    pub outcome: Outcome,
}

/// Everything a replay did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub name: Option<String>,
    pub lookup: LookupMode,
    pub steps: Vec<Step>,
    /// Tasks still pending when the script ended.
    pub pending: usize,
}

impl Report {
    /// Tasks returned by dequeues, in order. Empty dequeues are skipped.
    pub fn dequeued(&self) -> impl Iterator<Item = Task> + '_ {
        self.steps.iter().filter_map(|step| match step.outcome {
            Outcome::Dequeued { task } => task,
            _ => None,
        })
    }
}

/// Apply every op in `script` to `scheduler`.
///
/// Stops at the first dequeue whose result differs from its expectation, or
/// at the first step after which the heap property does not hold.
pub fn replay(script: &Script, scheduler: &mut PriorityScheduler) -> Result<Report> {
    log::debug!(
        "Replaying script {:?} ({} ops, {} lookup)",
        script.name,
        script.ops.len(),
        scheduler.lookup_mode()
    );

    let mut steps = Vec::with_capacity(script.ops.len());
    for (i, op) in script.ops.iter().enumerate() {
        let number = i + 1;
        let outcome = apply(op, scheduler);
        log::trace!("Step {}: {} => {:?}", number, op, outcome);

        if let (Op::Dequeue { expect: Some(expected) }, Outcome::Dequeued { task }) = (op, outcome)
            && !expected.matches(task)
        {
            return Err(HeapschedError::ExpectationFailed {
                step: number,
                expected: expected.to_string(),
                actual: Expected::from(task).to_string(),
            });
        }

        if !scheduler.is_heap() {
            return Err(HeapschedError::HeapViolation { step: number });
        }

        steps.push(Step {
            number,
            op: op.clone(),
            outcome,
        });
    }

    Ok(Report {
        name: script.name.clone(),
        lookup: scheduler.lookup_mode(),
        steps,
        pending: scheduler.len(),
    })
}

fn apply(op: &Op, scheduler: &mut PriorityScheduler) -> Outcome {
    match *op {
        Op::Enqueue { id, priority } => {
            scheduler.enqueue(Task::new(id, priority));
            Outcome::Enqueued {
                pending: scheduler.len(),
            }
        }
        Op::Dequeue { .. } => Outcome::Dequeued {
            task: scheduler.dequeue_highest(),
        },
        Op::ChangePriority { id, priority } => {
            let found = scheduler.contains(id);
            scheduler.change_priority(id, priority);
            Outcome::PriorityChanged { found }
        }
    }
}
