//! Array-backed binary min-heap
//!
//! Storage is 0-indexed: the element at `i` has children at `2i + 1` and
//! `2i + 2`. The heap property holds whenever a public method returns.
//!
//! Ties are resolved the same way everywhere: an element only moves past
//! another when it is strictly smaller, and sift-down picks the right child
//! only when it is strictly smaller than the left one. The extraction order
//! of equal elements is therefore a pure function of the insertion order.

use crate::error::QueueError;

/// Initial capacity of a queue created with [`PriorityQueue::new`].
pub const DEFAULT_CAPACITY: usize = 32;

/// Binary min-heap over any totally ordered element type
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    items: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create an empty queue with room for [`DEFAULT_CAPACITY`] elements
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty queue with the given initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Build a heap from an arbitrary vector in O(n) using bottom-up sift-down.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut queue = Self { items };
        for i in (0..queue.items.len() / 2).rev() {
            queue.sift_down(i);
        }
        queue
    }

    /// Add an element. Storage doubles when full.
    pub fn insert(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let grow_by = self.items.capacity().max(1);
            self.items.reserve_exact(grow_by);
        }
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// The minimum element, without removing it.
    pub fn peek_min(&self) -> Result<&T, QueueError> {
        self.items.first().ok_or(QueueError::EmptyQueue)
    }

    /// Remove and return the minimum element.
    pub fn extract_min(&mut self) -> Result<T, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        // The last element takes the root's slot and sinks back into place.
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drop every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.items[right] < self.items[left] {
                right
            } else {
                left
            };
            if self.items[child] < self.items[index] {
                self.items.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[(i - 1) / 2] <= self.items[i])
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
