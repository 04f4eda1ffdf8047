use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchwiseError {
    #[error("Failed to read input from {source_name}: {source}")]
    InputUnreadable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Batch limit reached after {limit} batches")]
    LimitReached { limit: usize },
}
