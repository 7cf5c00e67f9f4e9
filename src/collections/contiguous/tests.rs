#![cfg(test)]

use super::*;
use crate::collections::traits::{Collection, Set};
use crate::util::panic::assert_panics;

#[test]
fn test_default_capacity() {
    assert_eq!(SortedBag::<u8>::new().cap(), DEFAULT_CAP);
    assert_eq!(SortedSet::<u8>::default().cap(), DEFAULT_CAP);
    assert_eq!(UnsortedSet::<u8>::new().cap(), DEFAULT_CAP);
}

#[test]
fn test_sorted_bag() {
    let mut bag = SortedBag::with_cap(6);
    for i in [5, 1, 3, 3, 9] {
        bag.add(i);
    }

    assert_eq!(&*bag, &[1, 3, 3, 5, 9], "The bag should stay sorted and keep duplicates.");
    assert_eq!(bag.count(&3), 2);
    assert_eq!(bag.count(&4), 0);
    assert!(bag.contains(&9));
    assert!(!bag.contains(&2));

    assert!(bag.remove(&3), "Removing should only take one occurrence.");
    assert_eq!(bag.as_slice(), &[1, 3, 5, 9]);
    assert!(!bag.remove(&7));
    assert_eq!(bag.to_string(), "[1, 3, 5, 9]");
}

#[test]
fn test_sorted_bag_capacity() {
    let mut bag = SortedBag::with_cap(2);
    bag.add('b');
    bag.add('a');
    assert!(bag.is_full());

    assert_eq!(bag.try_add('c'), Err(CapacityExceeded { cap: 2 }));
    assert_eq!(bag.as_slice(), &['a', 'b'], "A rejected element shouldn't change the bag.");
    assert_panics!({
        bag.add('a');
    });

    bag.remove(&'a');
    assert_eq!(bag.try_add('c'), Ok(()));
    assert_eq!(bag.as_slice(), &['b', 'c']);
}

#[test]
fn test_sorted_set() {
    let mut set = SortedSet::with_cap(4);
    assert!(set.add(20));
    assert!(set.add(10));
    assert!(!set.add(20), "Sets shouldn't hold duplicates.");
    assert!(set.add(30));
    assert!(set.add(0));
    assert!(set.is_full());

    assert_eq!(set.try_add(10), Ok(false), "A full set still recognises its elements.");
    assert_eq!(set.try_add(40), Err(CapacityExceeded { cap: 4 }));
    assert_eq!(set.as_slice(), &[0, 10, 20, 30]);

    assert!(set.remove(&10));
    assert!(!set.remove(&10));
    assert_eq!(set.to_string(), "{0, 20, 30}");
}

#[test]
fn test_unsorted_set() {
    let mut set = UnsortedSet::with_cap(4);
    for item in ["d", "a", "c", "a", "b"] {
        set.add(item);
    }
    assert_eq!(set.as_slice(), &["d", "a", "c", "b"], "Elements stay in insertion order.");

    assert!(set.remove(&"d"));
    assert_eq!(
        set.as_slice(),
        &["b", "a", "c"],
        "The last element should fill the gap left by a removal."
    );
    assert!(!set.remove(&"d"));

    set.add("e");
    assert_eq!(set.try_add("f"), Err(CapacityExceeded { cap: 4 }));
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_collection_contract() {
    let mut bag = SortedBag::with_cap(3);
    assert_eq!(bag.add_all([2, 1, 2]), Ok(true));
    assert_eq!(bag.add_all([4]), Err(CapacityExceeded { cap: 3 }));
    assert_eq!(&*Collection::to_array(&bag), &[1, 2, 2]);
    assert!(bag.remove_all(&[2, 2]));
    assert!(!Collection::is_empty(&bag));
    assert_eq!(Collection::len(&bag), 1);
}

#[test]
fn test_set_algebra() {
    let mut sorted = SortedSet::new();
    let mut unsorted = UnsortedSet::new();
    let mut other = UnsortedSet::new();
    sorted.add_all([1, 2, 3, 4]).ok();
    unsorted.add_all([4, 3, 2, 1]).ok();
    other.add_all([3, 5]).ok();

    assert!(sorted.is_subset(&sorted));
    assert_eq!(sorted.difference(&sorted).count(), 0);
    assert_eq!(unsorted.intersection(&other).collect::<Vec<_>>(), [&3]);
    assert_eq!(unsorted.union(&other).collect::<Vec<_>>(), [&4, &3, &2, &1, &5]);
    assert_eq!(
        other.symmetric_difference(&unsorted).collect::<Vec<_>>(),
        [&5, &4, &2, &1]
    );
    assert!(!unsorted.is_disjoint(&other));
    assert!(unsorted.is_superset(&UnsortedSet::with_cap(0)));
}
