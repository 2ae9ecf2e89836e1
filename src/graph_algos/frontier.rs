use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};


/// Cells discovered but not yet finalized
/// Keys order the frontier, FIFO frontiers ignore them.
pub(crate) trait Frontier<K>: Default {
    fn push(&mut self, key: K, index: usize);
    fn pop(&mut self) -> Option<usize>;
}


/// Strict insertion order, used by breadth-first search
#[derive(Debug, Default)]
pub(crate) struct Fifo {
    queue: VecDeque<usize>,
}

impl<K> Frontier<K> for Fifo {
    fn push(&mut self, _key: K, index: usize) {
        self.queue.push_back(index);
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }
}


/// Heap entry - reversed ordering so the std max-heap pops the smallest key first
#[derive(Debug, PartialEq, Eq)]
struct Entry<K, T> {
    key: K,
    item: T,
}

impl<K: Ord, T: Ord> Ord for Entry<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Equal keys fall back to the item so the order is total and deterministic
        other.key.cmp(&self.key)
            .then_with(|| other.item.cmp(&self.item))
    }
}
impl<K: Ord, T: Ord> PartialOrd for Entry<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}


/// Min-priority queue of (key, item) pairs
/// Pushing the same item twice keeps both entries, callers skip the stale one when it pops.
#[derive(Debug)]
pub struct MinQueue<K, T> {
    heap: BinaryHeap<Entry<K, T>>,
}

impl<K: Ord, T: Ord> Default for MinQueue<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, T: Ord> MinQueue<K, T> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity) }
    }

    pub fn push(&mut self, key: K, item: T) {
        self.heap.push(Entry { key, item });
    }

    /// Remove the entry with the smallest key, smallest item among equal keys
    pub fn pop(&mut self) -> Option<(K, T)> {
        self.heap.pop().map(|Entry { key, item }| (key, item))
    }

    pub fn peek(&self) -> Option<(&K, &T)> {
        self.heap.peek().map(|entry| (&entry.key, &entry.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K: Ord> Frontier<K> for MinQueue<K, usize> {
    fn push(&mut self, key: K, index: usize) {
        MinQueue::push(self, key, index);
    }

    fn pop(&mut self) -> Option<usize> {
        MinQueue::pop(self).map(|(_, index)| index)
    }
}
