//! Bounded, newest-first feed state.

use crate::record::FeedRecord;
use std::collections::VecDeque;

/// Ordered sequence of feed records, newest first, bounded to `cap`.
///
/// Invariant: `len() <= cap` after every mutation. When an insertion would
/// exceed the cap, the oldest (back) records are dropped.
#[derive(Debug)]
pub struct FeedState<P> {
    records: VecDeque<FeedRecord<P>>,
    cap: usize,
}

impl<P> FeedState<P> {
    /// Create an empty state with the given cap.
    pub fn new(cap: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Replace the contents with an initial batch (already newest-first).
    pub fn load(&mut self, batch: Vec<FeedRecord<P>>) {
        self.records = batch.into();
        self.records.truncate(self.cap);
    }

    /// Prepend one record, evicting from the back past the cap.
    pub fn push(&mut self, record: FeedRecord<P>) {
        self.records.push_front(record);
        self.records.truncate(self.cap);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedRecord<P>> {
        self.records.iter()
    }
}

impl<P: Clone> FeedState<P> {
    /// Read-only copy of the current sequence, newest first.
    pub fn snapshot(&self) -> Vec<FeedRecord<P>> {
        self.records.iter().cloned().collect()
    }
}
