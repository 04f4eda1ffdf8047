// eager.rs - everything up front
use super::span::{batch_count, spans};

/// Split `values` into batches of at most `size` items, all at once.
///
/// Batches borrow from `values`. An empty input or a zero size gives an
/// empty `Vec`, never a panic.
pub fn batch<T>(values: &[T], size: usize) -> Vec<&[T]> {
    let mut batches = Vec::with_capacity(batch_count(values.len(), size));
    batches.extend(spans(values.len(), size).map(|span| &values[span]));
    batches
}
