#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

fn assert_heap_order<E>(heap: &Heap<E>) {
    let priorities = heap.priorities();
    for child in 1..priorities.len() {
        let parent = (child - 1) / 2;
        assert!(
            priorities[parent] <= priorities[child],
            "Priority at {parent} should not exceed its child at {child}: {priorities:?}"
        );
    }
}

#[test]
fn test_add_and_remove_min() {
    let mut heap = Heap::new(8);
    for (element, priority) in [("e", 5), ("b", 2), ("d", 4), ("a", 1), ("c", 3)] {
        heap.add(element, priority);
        assert_heap_order(&heap);
    }

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek_min(), Some((&"a", 1)));
    assert_eq!(&*heap.priorities(), &[1, 2, 4, 5, 3]);

    let mut removed = Vec::new();
    while let Ok(element) = heap.try_remove_min() {
        assert_heap_order(&heap);
        removed.push(element);
    }
    assert_eq!(removed, ["a", "b", "c", "d", "e"]);
    assert_eq!(heap.try_remove_min(), Err(EmptyCollection));
    assert_eq!(heap.peek_min(), None);
}

#[test]
fn test_capacity() {
    let mut heap = Heap::new(2);
    heap.add('x', 0);
    heap.add('y', 0);
    assert!(heap.is_full());
    assert_eq!(
        heap.try_add('z', -1),
        Err(CapacityExceeded { cap: 2 }),
        "A full heap should reject even the highest priority."
    );
    assert_eq!(heap.len(), 2, "A rejected add should leave the heap untouched.");
    assert_eq!(heap.peek_min().map(|(_, priority)| priority), Some(0));
    assert_panics!({
        heap.add('z', 1);
    });

    heap.clear();
    assert!(heap.is_empty());
    assert_eq!(heap.cap(), 2);
    assert!(!heap.is_full(), "Clearing should free the whole capacity again.");
    assert_panics!({
        heap.remove_min();
    });
    heap.add('z', 1);
    assert_eq!(heap.remove_min(), 'z');
}

#[test]
fn test_duplicates() {
    let mut heap = Heap::new(4);
    heap.add(7, 3);
    heap.add(7, 3);
    heap.add(8, 3);
    assert_eq!(heap.len(), 3);

    let mut removed = [heap.remove_min(), heap.remove_min(), heap.remove_min()];
    removed.sort();
    assert_eq!(removed, [7, 7, 8]);
}

#[test]
fn test_decrease_priority() {
    let mut heap = Heap::new(8);
    for priority in [10, 20, 30, 40, 50] {
        heap.add(priority, priority);
    }
    assert_eq!(&*heap.priorities(), &[10, 20, 30, 40, 50]);

    heap.decrease_priority(4, 45);
    assert_eq!(
        &*heap.priorities(),
        &[5, 10, 30, 40, 20],
        "A raised priority should sift towards the root."
    );
    assert_eq!(heap.peek_min(), Some((&50, 5)));

    heap.decrease_priority(0, -100);
    assert_heap_order(&heap);
    assert_eq!(heap.peek_min(), Some((&10, 10)), "A lowered priority should sift down.");
    assert_eq!(heap.iter().find(|(element, _)| **element == 50), Some((&50, 105)));

    assert_eq!(
        heap.try_decrease_priority(5, 1),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );
}

#[test]
fn test_decrease_priority_saturates() {
    let mut heap = Heap::new(2);
    heap.add((), i64::MIN + 1);
    heap.decrease_priority(0, 10);
    assert_eq!(heap.peek_min(), Some((&(), i64::MIN)));
}

#[test]
fn test_delete() {
    let mut heap = Heap::new(8);
    for priority in [1, 10, 2, 11, 12, 3, 4] {
        heap.add(priority, priority);
    }
    assert_eq!(&*heap.priorities(), &[1, 10, 2, 11, 12, 3, 4]);

    assert_eq!(heap.delete(3), 11);
    assert_eq!(
        &*heap.priorities(),
        &[1, 4, 2, 10, 12, 3],
        "The moved node should sift up when it is smaller than its new parent."
    );

    assert_eq!(heap.delete(1), 4);
    assert_heap_order(&heap);
    assert_eq!(heap.delete(4), 12, "Deleting the last node needs no sifting.");
    assert_eq!(heap.try_delete(4), Err(IndexOutOfBounds { index: 4, len: 4 }));

    let mut rest = Vec::new();
    while !heap.is_empty() {
        rest.push(heap.remove_min());
    }
    assert_eq!(rest, [1, 2, 3, 10]);
}

#[test]
fn test_heap_sort() {
    let mut items = [5, -3, 9, 0, 9, 2, -8, 1];
    heap_sort(&mut items);
    assert_eq!(items, [-8, -3, 0, 1, 2, 5, 9, 9]);

    let mut words = ["pear", "fig", "banana", "kiwi"];
    heap_sort_by(&mut words, |a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
    assert_eq!(words, ["fig", "kiwi", "pear", "banana"]);

    let mut empty: [u8; 0] = [];
    heap_sort(&mut empty);
    let mut single = [1];
    heap_sort(&mut single);
    assert_eq!(single, [1]);
}
