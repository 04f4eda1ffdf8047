// func.rs - callback per batch
use super::span::spans;

/// Call `f` once per batch of at most `size` items, in order.
///
/// The first error returned by `f` stops the walk and is handed back
/// unchanged. With nothing to batch `f` is never called and the result is
/// `Ok(())`.
pub fn batch_func<'a, T, E, F>(values: &'a [T], size: usize, mut f: F) -> Result<(), E>
where
    F: FnMut(&'a [T]) -> Result<(), E>,
{
    for span in spans(values.len(), size) {
        tracing::trace!(start = span.start, end = span.end, "delivering batch");
        f(&values[span])?;
    }
    Ok(())
}
