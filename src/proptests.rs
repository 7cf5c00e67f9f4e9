use std::collections::{BTreeMap, BTreeSet};
use std::collections::HashSet as StdHashSet;

use proptest::prelude::*;

use crate::collections::binary_tree::{AvlTree, Node};
use crate::collections::contiguous::{SortedBag, SortedSet};
use crate::collections::hash::HashSet;
use crate::collections::heap::{Heap, heap_sort};

/// Checks ordering and cached heights below `node`, collecting its keys in order. When `balanced`
/// is set, every balance factor must also be within one.
fn validate_node<K: Ord + Copy, E>(node: &Node<K, E>, balanced: bool, keys: &mut Vec<K>) -> usize {
    let left = node.left().map_or(0, |left| validate_node(left, balanced, keys));
    keys.push(*node.key());
    let right = node.right().map_or(0, |right| validate_node(right, balanced, keys));

    assert_eq!(node.height(), 1 + left.max(right), "stored height must match children");
    if balanced {
        assert!(
            node.balance_factor().abs() <= 1,
            "balance factor out of range: {}",
            node.balance_factor()
        );
    }
    node.height()
}

fn validate_tree<K: Ord + Copy, E>(tree: &AvlTree<K, E>, balanced: bool) {
    let mut keys = Vec::new();
    let height = tree.root().map_or(0, |root| validate_node(root, balanced, &mut keys));

    assert_eq!(tree.height(), height);
    assert_eq!(keys.len(), tree.len(), "reachable node count must match AvlTree::len");
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "keys must be strictly increasing");
}

#[derive(Clone, Debug)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
    Search(u16),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // A small key range so that overwrites and removals of present keys are common.
    let key = 0u16..512;
    let op = prop_oneof![
        50 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        25 => key.prop_map(Op::Search),
    ];
    prop::collection::vec(op, 0..=1000)
}

#[derive(Clone, Debug)]
enum SetOp {
    Add(u16),
    Remove(u16),
    Contains(u16),
}

fn set_ops_strategy() -> impl Strategy<Value = Vec<SetOp>> {
    let item = 0u16..128;
    let op = prop_oneof![
        50 => item.clone().prop_map(SetOp::Add),
        30 => item.clone().prop_map(SetOp::Remove),
        20 => item.prop_map(SetOp::Contains),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_tree_equivalence(ops in ops_strategy()) {
        let mut tree: AvlTree<u16, u32> = AvlTree::new();
        let mut model: BTreeMap<u16, u32> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, element) => {
                    prop_assert_eq!(tree.insert(key, element), model.insert(key, element));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), model.remove(&key));
                }
                Op::Search(key) => {
                    prop_assert_eq!(tree.search(&key), model.get(&key));
                }
            }

            prop_assert_eq!(tree.len(), model.len());
        }

        // Removal doesn't rebalance, so only ordering and heights are checked here.
        validate_tree(&tree, false);
        let got: Vec<(u16, u32)> = tree.iter().map(|(k, e)| (*k, *e)).collect();
        let expected: Vec<(u16, u32)> = model.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_tree_balanced_after_inserts(keys in prop::collection::vec(any::<i32>(), 0..=2000)) {
        let tree: AvlTree<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        validate_tree(&tree, true);

        // An AVL tree with n nodes is at most about 1.44 * log2(n + 2) high.
        let bound = 1.45 * ((tree.len() + 2) as f64).log2();
        prop_assert!((tree.height() as f64) <= bound, "height {} above {bound}", tree.height());
    }

    #[test]
    fn prop_tree_insert_then_remove_all(keys in prop::collection::btree_set(any::<u8>(), 0..=200)) {
        let mut tree = AvlTree::new();
        for key in &keys {
            tree.insert(*key, u32::from(*key) * 2);
        }
        for key in &keys {
            prop_assert_eq!(tree.remove(key), Some(u32::from(*key) * 2));
            prop_assert_eq!(tree.search(key), None);
            validate_tree(&tree, false);
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.height(), 0);
    }

    #[test]
    fn prop_hash_set_equivalence(ops in set_ops_strategy()) {
        let mut set: HashSet<u16> = HashSet::with_cap(64);
        let mut model: StdHashSet<u16> = StdHashSet::new();

        for op in ops {
            match op {
                SetOp::Add(item) => match set.try_add(item) {
                    Ok(added) => prop_assert_eq!(added, model.insert(item)),
                    Err(error) => {
                        // Only a new element can be rejected, and the set must be untouched.
                        prop_assert_eq!(error.cap, 64);
                        prop_assert!(!model.contains(&item));
                        prop_assert!(!set.contains(&item));
                    }
                },
                SetOp::Remove(item) => {
                    prop_assert_eq!(set.remove(&item), model.remove(&item));
                }
                SetOp::Contains(item) => {
                    prop_assert_eq!(set.contains(&item), model.contains(&item));
                }
            }

            prop_assert_eq!(set.len(), model.len());
            prop_assert!(set.len() <= set.cap());
        }

        let mut got: Vec<u16> = set.iter().copied().collect();
        got.sort();
        let mut expected: Vec<u16> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_sorted_collections(items in prop::collection::vec(any::<i16>(), 0..=100)) {
        let mut bag = SortedBag::new();
        let mut set = SortedSet::new();
        for item in &items {
            bag.add(*item);
            set.add(*item);
        }

        let mut sorted = items.clone();
        sorted.sort();
        prop_assert_eq!(bag.as_slice(), sorted.as_slice());

        let unique: Vec<i16> = items.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        prop_assert_eq!(set.as_slice(), unique.as_slice());
    }

    #[test]
    fn prop_heap_removes_in_priority_order(priorities in prop::collection::vec(any::<i64>(), 0..=200)) {
        let mut heap = Heap::new(priorities.len());
        for (element, priority) in priorities.iter().enumerate() {
            heap.add(element, *priority);
        }

        let mut previous = i64::MIN;
        while let Some((&element, priority)) = heap.peek_min() {
            prop_assert!(priority >= previous, "priorities must be non-decreasing");
            prop_assert_eq!(priorities[element], priority);
            prop_assert_eq!(heap.remove_min(), element);
            previous = priority;
        }
    }

    #[test]
    fn prop_heap_sort_matches_sort(mut items in prop::collection::vec(any::<i32>(), 0..=500)) {
        let mut expected = items.clone();
        expected.sort();
        heap_sort(&mut items);
        prop_assert_eq!(items, expected);
    }
}
