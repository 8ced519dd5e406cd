// src/ordered_list.rs
//! Weight-ordered list used as the priority queue for tree construction.
//!
//! Entries are kept in ascending weight order. Ties are last-in-first-out:
//! a new entry lands in front of every entry already holding the same
//! weight, so it is removed before them.

use std::collections::VecDeque;

use crate::error::{HuffError, Result};

#[derive(Debug, Clone)]
struct Entry<T> {
    weight:  u64,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct OrderedList<T> {
    entries: VecDeque<Entry<T>>,
}

impl<T> OrderedList<T> {
    pub fn new() -> Self {
        OrderedList { entries: VecDeque::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OrderedList { entries: VecDeque::with_capacity(capacity) }
    }

    /// Insert `payload` at its sorted position. O(n).
    pub fn insert(&mut self, payload: T, weight: u64) {
        // First index whose weight is >= `weight`: in front of all equal weights.
        // This includes a tie with the head; the new entry becomes the head.
        let pos = self.entries.partition_point(|e| e.weight < weight);
        self.entries.insert(pos, Entry { weight, payload });
    }

    /// Remove and return the minimum-weight payload along with its weight.
    pub fn remove_min_weighted(&mut self) -> Result<(T, u64)> {
        self.entries
            .pop_front()
            .map(|e| (e.payload, e.weight))
            .ok_or(HuffError::EmptyCollection)
    }

    /// Remove and return the minimum-weight payload.
    pub fn remove_min(&mut self) -> Result<T> {
        self.remove_min_weighted().map(|(payload, _)| payload)
    }

    pub fn peek_min(&self) -> Option<(&T, u64)> {
        self.entries.front().map(|e| (&e.payload, e.weight))
    }

    /// Payload at `pos` in removal order (0 = next to be removed).
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.entries.get(pos).map(|e| &e.payload)
    }

    /// Payloads and weights in removal order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.entries.iter().map(|e| (&e.payload, e.weight))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
