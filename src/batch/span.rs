// span.rs - the one batching algorithm every flavour walks
use std::iter::FusedIterator;
use std::ops::Range;

/// Number of batches `len` items split into with the given batch size.
///
/// Zero when either the input is empty or the size is zero.
pub fn batch_count(len: usize, size: usize) -> usize {
    if len == 0 || size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

/// Index ranges of consecutive batches over an input of length `len`
///
/// The i-th range is `i * size .. min((i + 1) * size, len)`.
pub fn spans(len: usize, size: usize) -> Spans {
    Spans::new(len, size)
}

/// The batch starting at `start`, or `None` once `start` reaches `len`.
pub fn span_at(start: usize, len: usize, size: usize) -> Option<Range<usize>> {
    if size == 0 || start >= len {
        return None;
    }
    Some(start..len.min(start.saturating_add(size)))
}

/// Iterator over batch index ranges
#[derive(Debug, Clone)]
pub struct Spans {
    len: usize,
    size: usize,
    start: usize,
}

impl Spans {
    pub fn new(len: usize, size: usize) -> Self {
        Self {
            len,
            size,
            start: 0,
        }
    }
}

impl Iterator for Spans {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = span_at(self.start, self.len, self.size)?;
        self.start = span.end;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = batch_count(self.len - self.start, self.size);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Spans {}

impl FusedIterator for Spans {}
