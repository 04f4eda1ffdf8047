mod batcher;
mod eager;
mod func;
mod seq;
mod span;


pub use batcher::{Batcher, BatcherState};
pub use eager::batch;
pub use func::batch_func;
pub use seq::{BatchSeq, Batches, batch_seq};
pub use span::{Spans, batch_count, span_at, spans};
