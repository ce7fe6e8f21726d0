//! Deterministic adapter for the `RandomSource` port.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::random::RandomSource;

/// Randomness source that replays a scripted sequence of indexes.
///
/// Clones share the same queue, so a test can hand one clone to a generator
/// and keep another to append further draws mid-test.
#[derive(Clone)]
pub struct SequenceRandomSource {
    indexes: Arc<Mutex<VecDeque<usize>>>,
}

impl SequenceRandomSource {
    /// Creates a source that will serve `indexes` in order.
    #[must_use]
    pub fn new(indexes: impl IntoIterator<Item = usize>) -> Self {
        Self { indexes: Arc::new(Mutex::new(indexes.into_iter().collect())) }
    }

    /// Appends more indexes to the end of the script.
    pub fn extend(&self, indexes: impl IntoIterator<Item = usize>) {
        self.indexes.lock().expect("sequence lock poisoned").extend(indexes);
    }
}

impl RandomSource for SequenceRandomSource {
    /// Serves the next scripted index.
    ///
    /// Panics when the script is exhausted: a test drawing more randomness
    /// than it scripted is a test bug.
    fn next_index(&self) -> usize {
        self.indexes
            .lock()
            .expect("sequence lock poisoned")
            .pop_front()
            .expect("scripted random sequence exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_indexes_in_order() {
        let source = SequenceRandomSource::new([3, 1, 4]);
        assert_eq!(source.next_index(), 3);
        assert_eq!(source.next_index(), 1);
        assert_eq!(source.next_index(), 4);
    }

    #[test]
    fn extend_appends_through_clones() {
        let source = SequenceRandomSource::new([7]);
        let handle = source.clone();
        handle.extend([9]);

        assert_eq!(source.next_index(), 7);
        assert_eq!(source.next_index(), 9);
    }

    #[test]
    #[should_panic(expected = "scripted random sequence exhausted")]
    fn panics_when_exhausted() {
        let source = SequenceRandomSource::new([]);
        let _ = source.next_index();
    }
}
