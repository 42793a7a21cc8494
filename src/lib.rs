//! heapsched - A priority-ordered task dispatcher
//!
//! Holds pending tasks in a binary max-heap, always yields the
//! highest-priority task first, and lets any pending task's priority be
//! changed in place after insertion.

pub mod error;
pub mod scheduler;
pub mod trace;

pub use error::{HeapschedError, Result};
pub use scheduler::{LookupMode, PriorityScheduler, Task};
