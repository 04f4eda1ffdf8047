// Public API exports
pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod runner;

// Re-export main types for convenience
pub use batch::{
    BatchSeq, Batcher, BatcherState, Batches, Spans, batch, batch_count, batch_func, batch_seq,
    spans,
};

pub use config::{InputFormat, OutputFormat, RunConfig, Strategy};
pub use error::BatchwiseError;
pub use runner::{RunReport, run};
