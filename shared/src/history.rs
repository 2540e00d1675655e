//! Bounded, most-recent-first history lists
//!
//! Workout and nutrition history share the same contract: a new entry goes to
//! the front, any existing entry with the same key is replaced, and the list
//! never grows past its capacity (oldest entries are evicted).

/// Maximum number of workout sessions kept
pub const WORKOUT_HISTORY_CAPACITY: usize = 40;

/// Maximum number of daily nutrition logs kept
pub const NUTRITION_HISTORY_CAPACITY: usize = 14;

/// A record that can live in a [`BoundedHistory`]
pub trait HistoryEntry {
    /// Deduplication key; two entries with equal keys never coexist
    type Key: PartialEq;

    fn history_key(&self) -> Self::Key;
}

/// Capacity-bounded history ordered most-recent-first
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedHistory<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T: HistoryEntry> BoundedHistory<T> {
    /// Create an empty history
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Wrap entries that are already ordered most-recent-first
    ///
    /// Anything past `capacity` is dropped.
    pub fn from_entries(mut entries: Vec<T>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Append-or-replace by key, then evict beyond capacity
    ///
    /// Returns how many entries were evicted for capacity.
    pub fn record(&mut self, entry: T) -> usize {
        let key = entry.history_key();
        self.entries.retain(|existing| existing.history_key() != key);
        self.entries.insert(0, entry);

        let evicted = self.entries.len().saturating_sub(self.capacity);
        self.entries.truncate(self.capacity);
        evicted
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.entries
    }
}
