use rand::prelude::*;
use rand::rngs::StdRng;
use weighted_paths::data_structures::{HeapArena, MutablePriorityQueue};

// Minimal keyed store: item i has key keys[i]
struct Keys {
    keys: Vec<f64>,
    slots: Vec<usize>,
}

impl Keys {
    fn new(keys: Vec<f64>) -> Self {
        let slots = vec![0; keys.len()];
        Keys { keys, slots }
    }
}

impl HeapArena for Keys {
    type Key = f64;

    fn key(&self, item: usize) -> f64 {
        self.keys[item]
    }

    fn slot(&self, item: usize) -> usize {
        self.slots[item]
    }

    fn set_slot(&mut self, item: usize, slot: usize) {
        self.slots[item] = slot;
    }
}

fn drain(queue: &mut MutablePriorityQueue, arena: &mut Keys) -> Vec<f64> {
    let mut out = Vec::new();
    while let Some(item) = queue.extract_min(arena) {
        out.push(arena.keys[item]);
    }
    out
}

#[test]
fn test_extract_from_empty_queue() {
    let mut arena = Keys::new(vec![]);
    let mut queue = MutablePriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.extract_min(&mut arena), None);
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_insert_then_extract_is_sorted() {
    let mut rng = StdRng::seed_from_u64(42);
    let keys: Vec<f64> = (0..200).map(|_| rng.gen_range(-50.0..50.0)).collect();
    let mut arena = Keys::new(keys.clone());
    let mut queue = MutablePriorityQueue::new();

    for item in 0..keys.len() {
        queue.insert(&mut arena, item);
    }
    assert_eq!(queue.len(), keys.len());

    let extracted = drain(&mut queue, &mut arena);
    let mut expected = keys;
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(extracted, expected);
    assert!(queue.is_empty());
}

#[test]
fn test_decrease_key_moves_item_to_front() {
    let mut arena = Keys::new(vec![5.0, 3.0, 8.0, 7.0, 9.0]);
    let mut queue = MutablePriorityQueue::new();
    for item in 0..5 {
        queue.insert(&mut arena, item);
    }
    assert_eq!(queue.peek(), Some(1));

    arena.keys[4] = 1.0;
    queue.decrease_key(&mut arena, 4);
    assert_eq!(queue.extract_min(&mut arena), Some(4));
    assert_eq!(queue.extract_min(&mut arena), Some(1));
}

#[test]
fn test_slots_track_heap_positions() {
    let mut arena = Keys::new(vec![4.0, 2.0, 6.0, 1.0, 3.0]);
    let mut queue = MutablePriorityQueue::with_capacity(5);
    for item in 0..5 {
        queue.insert(&mut arena, item);
    }
    queue.extract_min(&mut arena);

    // Every queued item can still be decreased through its recorded slot
    for (item, key) in [(2, 0.5), (0, 0.25)] {
        arena.keys[item] = key;
        queue.decrease_key(&mut arena, item);
    }
    assert_eq!(drain(&mut queue, &mut arena), vec![0.25, 0.5, 2.0, 3.0]);
}

#[test]
fn test_random_decrease_keys_keep_global_minimum() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 100;
    let mut arena = Keys::new((0..n).map(|_| rng.gen_range(100.0..200.0)).collect());
    let mut queue = MutablePriorityQueue::new();
    for item in 0..n {
        queue.insert(&mut arena, item);
    }

    let mut queued: Vec<usize> = (0..n).collect();
    while !queued.is_empty() {
        // Lower a random queued key
        let item = queued[rng.gen_range(0..queued.len())];
        arena.keys[item] -= rng.gen_range(0.0..50.0);
        queue.decrease_key(&mut arena, item);

        let expected = queued
            .iter()
            .map(|&i| arena.keys[i])
            .fold(f64::INFINITY, f64::min);
        let min = queue.extract_min(&mut arena).unwrap();
        assert_eq!(arena.keys[min], expected);
        queued.retain(|&i| i != min);
    }
}

#[test]
fn test_clear() {
    let mut arena = Keys::new(vec![1.0, 2.0]);
    let mut queue = MutablePriorityQueue::new();
    queue.insert(&mut arena, 0);
    queue.insert(&mut arena, 1);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.extract_min(&mut arena), None);
}
