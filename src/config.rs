// config.rs - run settings: defaults, then a JSON file, then flags
use crate::error::BatchwiseError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default batch size when neither a config file nor a flag sets one
pub const DEFAULT_BATCH_SIZE: i64 = 10;

/// Which batching flavour drives a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Build every batch up front
    #[default]
    Eager,
    /// Callback per batch
    Func,
    /// Cursor object pulled one batch at a time
    Batcher,
    /// Lazy sequence driven by a consumer
    Seq,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Eager => "eager",
            Strategy::Func => "func",
            Strategy::Batcher => "batcher",
            Strategy::Seq => "seq",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// One value per non-empty line
    #[default]
    Lines,
    /// A single JSON array
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One batch per line, values separated by spaces (values with spaces are quoted)
    #[default]
    Text,
    /// One JSON array of arrays
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Requested batch size; zero or negative means no batches
    pub size: i64,
    pub strategy: Strategy,
    /// Stop after this many batches
    pub limit: Option<usize>,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BATCH_SIZE,
            strategy: Strategy::default(),
            limit: None,
            input_format: InputFormat::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, BatchwiseError> {
        let text = fs::read_to_string(path).map_err(|e| BatchwiseError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|reason| BatchwiseError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Batch size the library sees: negative sizes collapse to zero
    pub fn effective_size(&self) -> usize {
        usize::try_from(self.size).unwrap_or(0)
    }
}
