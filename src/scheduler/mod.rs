//! Priority scheduler for pending tasks.
//!
//! This module provides:
//! - **Task**: a caller-identified work item with a mutable integer priority.
//! - **PriorityScheduler**: an array-backed max-heap that always yields the
//!   highest-priority task first and supports in-place priority changes.
//! - **LookupMode**: how a task is found by identifier, either a linear
//!   scan (default) or an identifier -> position index.
//!
//! # Concurrency
//!
//! Every operation is synchronous and runs to completion. To share one
//! scheduler across threads, guard the whole structure with a single lock;
//! a sift must never be interleaved with another call.
//!
//! # Example
//!
//! ```
//! use heapsched::scheduler::{PriorityScheduler, Task};
//!
//! let mut scheduler = PriorityScheduler::new();
//! scheduler.enqueue(Task::new(1, 10));
//! scheduler.enqueue(Task::new(2, 20));
//!
//! scheduler.change_priority(1, 100);
//! assert_eq!(scheduler.dequeue_highest(), Some(Task::new(1, 100)));
//! assert_eq!(scheduler.dequeue_highest(), Some(Task::new(2, 20)));
//! assert_eq!(scheduler.dequeue_highest(), None);
//! ```

mod heap;
mod lookup;
mod task;

pub use heap::PriorityScheduler;
pub use lookup::LookupMode;
pub use task::{Priority, Task, TaskId};
