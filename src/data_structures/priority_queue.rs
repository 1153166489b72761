use std::fmt::Debug;

use num_traits::Float;

use crate::graph::vertex::{Vertex, VertexId};

/// Storage that owns the queued items' keys and their heap slots.
///
/// The queue itself only holds item indices; keys are read from, and slot
/// positions written back to, the arena. This is what makes `decrease_key`
/// O(log n): the slot of an item is known without searching the heap.
pub trait HeapArena {
    type Key: PartialOrd + Copy;

    /// Current ordering key of an item
    fn key(&self, item: usize) -> Self::Key;

    /// Heap slot last recorded for an item
    fn slot(&self, item: usize) -> usize;

    /// Record the heap slot an item now occupies
    fn set_slot(&mut self, item: usize, slot: usize);
}

impl<L, W> HeapArena for [Vertex<L, W>]
where
    W: Float + Debug,
{
    type Key = W;

    fn key(&self, item: usize) -> W {
        self[item].state.distance
    }

    fn slot(&self, item: usize) -> usize {
        self[item].state.queue_index
    }

    fn set_slot(&mut self, item: usize, slot: usize) {
        self[item].state.queue_index = slot;
    }
}

/// Binary min-heap over arena indices with in-place decrease-key
#[derive(Debug, Default, Clone)]
pub struct MutablePriorityQueue {
    heap: Vec<VertexId>,
}

impl MutablePriorityQueue {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MutablePriorityQueue { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MutablePriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the item with the smallest key without removing it
    pub fn peek(&self) -> Option<VertexId> {
        self.heap.first().copied()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Appends an item and restores the heap order
    pub fn insert<A>(&mut self, arena: &mut A, item: VertexId)
    where
        A: HeapArena + ?Sized,
    {
        self.heap.push(item);
        let slot = self.heap.len() - 1;
        arena.set_slot(item, slot);
        self.sift_up(arena, slot);
    }

    /// Removes and returns the item with the smallest key
    pub fn extract_min<A>(&mut self, arena: &mut A) -> Option<VertexId>
    where
        A: HeapArena + ?Sized,
    {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }

        let min = self.heap[0];
        self.heap[0] = last;
        arena.set_slot(last, 0);
        self.sift_down(arena, 0);
        Some(min)
    }

    /// Moves an item towards the root after its key was lowered.
    ///
    /// The item must be queued and its key must not have increased.
    pub fn decrease_key<A>(&mut self, arena: &mut A, item: VertexId)
    where
        A: HeapArena + ?Sized,
    {
        let slot = arena.slot(item);
        debug_assert!(
            self.heap.get(slot) == Some(&item),
            "decrease_key on an item that is not queued"
        );
        self.sift_up(arena, slot);
    }

    fn sift_up<A>(&mut self, arena: &mut A, mut slot: usize)
    where
        A: HeapArena + ?Sized,
    {
        let item = self.heap[slot];
        let key = arena.key(item);

        while slot > 0 {
            let parent = (slot - 1) / 2;
            let parent_item = self.heap[parent];
            if !(key < arena.key(parent_item)) {
                break;
            }
            self.heap[slot] = parent_item;
            arena.set_slot(parent_item, slot);
            slot = parent;
        }

        self.heap[slot] = item;
        arena.set_slot(item, slot);
    }

    fn sift_down<A>(&mut self, arena: &mut A, mut slot: usize)
    where
        A: HeapArena + ?Sized,
    {
        let len = self.heap.len();
        let item = self.heap[slot];
        let key = arena.key(item);

        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }

            // Pick the smaller child
            let right = left + 1;
            let mut child = left;
            if right < len && arena.key(self.heap[right]) < arena.key(self.heap[left]) {
                child = right;
            }

            let child_item = self.heap[child];
            if !(arena.key(child_item) < key) {
                break;
            }
            self.heap[slot] = child_item;
            arena.set_slot(child_item, slot);
            slot = child;
        }

        self.heap[slot] = item;
        arena.set_slot(item, slot);
    }
}
