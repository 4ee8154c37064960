//! Error type shared by the mergers, providers and the pipeline.

use thiserror::Error as ThisError;

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

#[derive(Debug, ThisError)]
pub enum MergeError {
    /// A mapping declares a verb that has no documented counterpart
    #[error("unsupported HTTP verb `{0}` in request mapping")]
    UnsupportedVerb(String),

    #[error("parameter index {index} out of range for `{method}` ({count} declared)")]
    ParamIndexOutOfRange {
        method: String,
        index: usize,
        count: usize,
    },

    #[error("unknown controller `{0}`")]
    ControllerNotFound(String),

    #[error("unknown method `{method}` on controller `{controller}`")]
    MethodNotFound { controller: String, method: String },

    #[error("invalid metadata table: {0}")]
    Table(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
