//! Priority-ordered frontier used by the stepping solver.

use std::{cmp::Reverse, collections::BinaryHeap};

/// A frontier entry. Ordered by priority, then by insertion sequence so that
/// equal priorities come out first-in-first-out.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    priority: i64,
    seq: u64,
    value: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (i64, u64) {
        (self.priority, self.seq)
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

/// A min-priority queue of `(value, priority)` pairs.
///
/// The same value may be inserted more than once; each insertion is a separate entry.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    // Using Reverse to turn the max-heap into a min-heap
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates a frontier holding a single entry.
    pub fn seeded(value: T, priority: i64) -> Self {
        let mut frontier = Frontier::new();
        frontier.insert(value, priority);
        frontier
    }

    pub fn insert(&mut self, value: T, priority: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            value,
        }));
    }

    /// Removes and returns the entry with the smallest priority, or `None` if the frontier is empty.
    pub fn extract_min(&mut self) -> Option<(T, i64)> {
        self.pop_entry().map(|entry| (entry.value, entry.priority))
    }

    /// Like `extract_min`, but keeps the insertion order so the entry can be put back.
    pub(crate) fn pop_entry(&mut self) -> Option<Entry<T>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Puts back an entry removed by `pop_entry`.
    pub(crate) fn restore(&mut self, entry: Entry<T>) {
        self.heap.push(Reverse(entry));
    }

    /// Removes the `count` most recent insertions and rewinds the insertion counter,
    /// so that inserting again reproduces the same tie order.
    pub(crate) fn retract(&mut self, count: usize) {
        let first = self.next_seq.saturating_sub(count as u64);
        self.heap.retain(|Reverse(entry)| entry.seq < first);
        self.next_seq = first;
    }

    /// Returns the entry `extract_min` would remove next without removing it.
    pub fn peek_min(&self) -> Option<(&T, i64)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.value, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<T: Clone> Frontier<T> {
    /// Snapshot of all entries in the order they would be extracted.
    pub fn to_vec(&self) -> Vec<(T, i64)> {
        let mut entries = self.heap.iter().map(|Reverse(e)| e).collect::<Vec<_>>();
        entries.sort_unstable_by_key(|e| e.key());
        entries
            .into_iter()
            .map(|e| (e.value.clone(), e.priority))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_in_priority_order() {
        let mut frontier = Frontier::new();
        frontier.insert('c', 3);
        frontier.insert('a', -1);
        frontier.insert('d', 10);
        frontier.insert('b', 0);

        let order = std::iter::from_fn(|| frontier.extract_min())
            .map(|(v, _)| v)
            .collect::<String>();
        assert_eq!(order, "abcd");
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut frontier = Frontier::new();
        frontier.insert(1, 5);
        frontier.insert(2, 5);
        frontier.insert(0, 1);
        frontier.insert(3, 5);

        assert_eq!(frontier.extract_min(), Some((0, 1)));
        assert_eq!(frontier.extract_min(), Some((1, 5)));
        frontier.insert(4, 5);
        assert_eq!(frontier.extract_min(), Some((2, 5)));
        assert_eq!(frontier.extract_min(), Some((3, 5)));
        assert_eq!(frontier.extract_min(), Some((4, 5)));
    }

    #[test]
    fn test_empty_extract() {
        let mut frontier: Frontier<(u16, u16)> = Frontier::new();
        assert!(frontier.is_empty());
        assert_eq!(frontier.extract_min(), None);
        assert_eq!(frontier.peek_min(), None);
    }

    #[test]
    fn test_snapshot_and_clone_are_independent() {
        let mut frontier = Frontier::seeded("start", 0);
        frontier.insert("far", 7);
        frontier.insert("near", 2);
        assert_eq!(frontier.to_vec(), vec![("start", 0), ("near", 2), ("far", 7)]);

        let mut copy = frontier.clone();
        copy.extract_min();
        assert_eq!(copy.len(), 2);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.peek_min(), Some((&"start", 0)));

        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_retract_and_restore() {
        let mut frontier = Frontier::seeded('a', 3);
        frontier.insert('b', 3);
        let taken = frontier.pop_entry().unwrap();
        assert_eq!(*taken.value(), 'a');
        frontier.insert('c', 1);
        frontier.insert('d', 3);

        frontier.retract(2);
        frontier.restore(taken);
        assert_eq!(frontier.to_vec(), vec![('a', 3), ('b', 3)]);

        // Same insertion order as before the retract, so 'e' still ties behind 'b'
        frontier.insert('e', 3);
        assert_eq!(frontier.to_vec(), vec![('a', 3), ('b', 3), ('e', 3)]);
    }
}
