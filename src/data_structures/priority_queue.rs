use std::fmt::Debug;

use crate::{Error, Result};

const INITIAL_CAPACITY: usize = 3;

/// A binary min-heap used as the priority queue of shortest path searches
///
/// There is no decrease-key: callers push a fresh entry whenever a priority
/// improves and discard stale entries when they surface at the top.
///
/// Storage is 0-indexed with parent = (i-1)/2, children = 2i+1, 2i+2. It
/// doubles when full and never shrinks.
#[derive(Debug, Clone)]
pub struct MinHeap<T>
where
    T: Ord + Debug,
{
    /// Heap-ordered entries
    entries: Vec<T>,
}

impl<T> Default for MinHeap<T>
where
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T>
where
    T: Ord + Debug,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a new empty heap with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity.max(1)),
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries the heap can hold before growing
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Result<&T> {
        self.entries.first().ok_or(Error::EmptyQueue)
    }

    /// Inserts an entry and restores the heap order
    pub fn insert(&mut self, entry: T) {
        if self.entries.len() == self.entries.capacity() {
            // Double explicitly; `Vec::push` alone gives no exact growth factor
            let additional = self.entries.capacity().max(1);
            self.entries.reserve_exact(additional);
        }
        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes the minimum entry. Does nothing on an empty heap.
    pub fn remove_min(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.swap_remove(0);
        self.sift_down(0);
    }

    /// Removes and returns the minimum entry
    pub fn pop(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        self.sift_down(0);
        Some(min)
    }

    /// Removes every entry, keeping the allocated storage
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.entries[parent] <= self.entries[idx] {
                break;
            }
            self.entries.swap(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let mut smallest = left;
            if right < len && self.entries[right] < self.entries[left] {
                smallest = right;
            }
            if self.entries[smallest] >= self.entries[idx] {
                break;
            }
            self.entries.swap(smallest, idx);
            idx = smallest;
        }
    }
}
