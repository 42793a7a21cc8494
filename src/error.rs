//! Error types for heapsched
//!
//! Centralized error handling using thiserror. The scheduler itself never
//! fails; these errors come from loading and replaying trace scripts.

use thiserror::Error;

/// All error types that can occur in heapsched
#[derive(Debug, Error)]
pub enum HeapschedError {
    /// Script file extension is not a known format
    #[error("Unsupported script format: {0}")]
    UnsupportedFormat(String),

    /// A dequeue returned something other than what the script expected
    #[error("Expectation failed at step {step}: expected {expected}, got {actual}")]
    ExpectationFailed {
        step: usize,
        expected: String,
        actual: String,
    },

    /// The max-heap property did not hold after a step
    #[error("Heap property violated after step {step}")]
    HeapViolation { step: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for heapsched operations
pub type Result<T> = std::result::Result<T, HeapschedError>;
