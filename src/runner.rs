// runner.rs - drive one strategy over the input and collect what it emits
use crate::batch::{Batcher, batch, batch_func, batch_seq};
use crate::config::{RunConfig, Strategy};
use crate::error::BatchwiseError;
use std::time::Instant;

/// Outcome of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<T> {
    pub strategy: Strategy,
    /// Batch size after negative sizes were clamped
    pub size: usize,
    pub batches: Vec<Vec<T>>,
    /// True when `limit` cut the run short
    pub stopped_early: bool,
}

/// Batch `values` with the strategy and limit from `config`
pub fn run<T: Clone>(values: &[T], config: &RunConfig) -> Result<RunReport<T>, BatchwiseError> {
    let start = Instant::now();
    let size = config.effective_size();
    let limit = config.limit.unwrap_or(usize::MAX);

    let (batches, stopped_early) = match config.strategy {
        Strategy::Eager => run_eager(values, size, limit),
        Strategy::Func => run_func(values, size, limit)?,
        Strategy::Batcher => run_batcher(values, size, limit),
        Strategy::Seq => run_seq(values, size, limit),
    };

    tracing::info!(
        strategy = %config.strategy,
        size,
        items = values.len(),
        batches = batches.len(),
        stopped_early,
        elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        "batching run complete"
    );

    Ok(RunReport {
        strategy: config.strategy,
        size,
        batches,
        stopped_early,
    })
}

fn run_eager<T: Clone>(values: &[T], size: usize, limit: usize) -> (Vec<Vec<T>>, bool) {
    let all = batch(values, size);
    let stopped_early = all.len() > limit;
    let batches = all.into_iter().take(limit).map(<[T]>::to_vec).collect();
    (batches, stopped_early)
}

fn run_func<T: Clone>(
    values: &[T],
    size: usize,
    limit: usize,
) -> Result<(Vec<Vec<T>>, bool), BatchwiseError> {
    let mut batches = Vec::new();
    let outcome = batch_func(values, size, |b| {
        if batches.len() == limit {
            return Err(BatchwiseError::LimitReached { limit });
        }
        batches.push(b.to_vec());
        Ok(())
    });

    match outcome {
        Ok(()) => Ok((batches, false)),
        Err(BatchwiseError::LimitReached { limit }) => {
            tracing::debug!(limit, "callback asked to stop");
            Ok((batches, true))
        }
        Err(e) => Err(e),
    }
}

fn run_batcher<T: Clone>(values: &[T], size: usize, limit: usize) -> (Vec<Vec<T>>, bool) {
    let mut batcher = Batcher::new(values, size);
    let mut batches = Vec::new();
    while batches.len() < limit {
        match batcher.next_batch() {
            Some(b) => batches.push(b.to_vec()),
            None => break,
        }
    }
    let stopped_early = !batcher.is_exhausted();
    (batches, stopped_early)
}

fn run_seq<T: Clone>(values: &[T], size: usize, limit: usize) -> (Vec<Vec<T>>, bool) {
    let seq = batch_seq(values, size);
    let mut batches = Vec::new();
    if limit > 0 {
        seq.for_each_while(|b| {
            batches.push(b.to_vec());
            batches.len() < limit
        });
    }
    let stopped_early = seq.iter().len() > batches.len();
    (batches, stopped_early)
}
