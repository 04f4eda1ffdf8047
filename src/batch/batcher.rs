// batcher.rs - pull one batch at a time off a cursor
use super::span::{batch_count, span_at};
use std::iter::FusedIterator;

/// Where a [`Batcher`] is in its walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatcherState {
    /// More batches can be pulled
    Active,
    /// Every batch has been handed out (terminal)
    Exhausted,
}

/// Cursor over a slice that hands out one batch per call.
///
/// A batcher belongs to whoever created it; `next_batch` takes `&mut self`
/// and there is no internal synchronisation.
#[derive(Debug, Clone)]
pub struct Batcher<'a, T> {
    values: Option<&'a [T]>,
    size: usize,
    cursor: usize,
}

impl<'a, T> Batcher<'a, T> {
    pub fn new(values: &'a [T], size: usize) -> Self {
        Self {
            values: Some(values),
            size,
            cursor: 0,
        }
    }

    /// A batcher with no input attached. It is exhausted from the start.
    pub fn detached(size: usize) -> Self {
        Self {
            values: None,
            size,
            cursor: 0,
        }
    }

    /// Next batch of at most `size` items, or `None` once exhausted.
    ///
    /// Keeps returning `None` after exhaustion.
    pub fn next_batch(&mut self) -> Option<&'a [T]> {
        let values = self.values?;
        let span = span_at(self.cursor, values.len(), self.size)?;
        self.cursor = span.end;
        if self.cursor == values.len() {
            tracing::debug!(cursor = self.cursor, "batcher exhausted");
        }
        Some(&values[span])
    }

    pub fn state(&self) -> BatcherState {
        if self.remaining() == 0 {
            BatcherState::Exhausted
        } else {
            BatcherState::Active
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == BatcherState::Exhausted
    }

    /// Offset of the first item not yet handed out
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// How many more batches `next_batch` will return
    pub fn remaining(&self) -> usize {
        match self.values {
            Some(values) => batch_count(values.len() - self.cursor, self.size),
            None => 0,
        }
    }
}

impl<T> Default for Batcher<'_, T> {
    fn default() -> Self {
        Self::detached(0)
    }
}

impl<'a, T> Iterator for Batcher<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.next_batch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining();
        (left, Some(left))
    }
}

impl<T> ExactSizeIterator for Batcher<'_, T> {}

impl<T> FusedIterator for Batcher<'_, T> {}
