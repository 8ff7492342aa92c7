//! Auto-incrementing id → record store.

use std::collections::HashMap;

/// In-memory registry assigning ids 0, 1, 2, … in registration order.
///
/// Ids are never reused and records are never mutated after insertion;
/// only shared references are handed out.
#[derive(Debug, Clone)]
pub struct SequentialRegistry<R> {
    records: HashMap<u64, R>,
    next_id: u64,
}

impl<R> SequentialRegistry<R> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
            next_id: 0,
        }
    }

    /// Store a record under the next id and return that id.
    pub fn register(&mut self, record: R) -> u64 {
        let id = self.next_id;
        // Ids are never reused, so the last id is u64::MAX - 1.
        self.next_id = id
            .checked_add(1)
            .unwrap_or_else(|| panic!("registry id space exhausted at {id}"));
        self.records.insert(id, record);
        id
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(&id)
    }

    /// The id the next `register` call will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for SequentialRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}
