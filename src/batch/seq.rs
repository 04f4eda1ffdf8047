// seq.rs - lazy, restartable batch sequence
use super::span::{Spans, spans};
use std::iter::FusedIterator;

/// Lazy sequence of batches over a slice.
///
/// Nothing is computed until the sequence is walked. Each walk starts over
/// from the first batch; the handle itself is never consumed.
pub fn batch_seq<T>(values: &[T], size: usize) -> BatchSeq<'_, T> {
    BatchSeq { values, size }
}

#[derive(Debug)]
pub struct BatchSeq<'a, T> {
    values: &'a [T],
    size: usize,
}

// Manual impls so `T` does not need to be `Clone`.
impl<T> Clone for BatchSeq<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BatchSeq<'_, T> {}

impl<'a, T> BatchSeq<'a, T> {
    /// Hand each batch to `f` until it returns `false` or the input runs out.
    ///
    /// Returns how many batches `f` saw.
    pub fn for_each_while<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&'a [T]) -> bool,
    {
        let mut seen = 0;
        for batch in self.iter() {
            seen += 1;
            if !f(batch) {
                tracing::trace!(seen, "consumer stopped the walk");
                break;
            }
        }
        seen
    }

    /// Fresh iterator starting at the first batch
    pub fn iter(&self) -> Batches<'a, T> {
        Batches {
            values: self.values,
            spans: spans(self.values.len(), self.size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<'a, T> IntoIterator for BatchSeq<'a, T> {
    type Item = &'a [T];
    type IntoIter = Batches<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &BatchSeq<'a, T> {
    type Item = &'a [T];
    type IntoIter = Batches<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One walk over a [`BatchSeq`]
#[derive(Debug)]
pub struct Batches<'a, T> {
    values: &'a [T],
    spans: Spans,
}

impl<'a, T> Iterator for Batches<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.spans.next().map(|span| &self.values[span])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl<T> ExactSizeIterator for Batches<'_, T> {}

impl<T> FusedIterator for Batches<'_, T> {}
