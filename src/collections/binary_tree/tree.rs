use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Keys, Node};

/// An ordered map from keys to elements, stored in a binary search tree that rebalances itself
/// with AVL rotations whenever an insertion leaves a subtree more than one level taller on one
/// side.
///
/// Keys are compared exclusively through [`Ord`], so equality of keys always agrees with their
/// ordering. Inserting a key that is already present replaces its element without changing the
/// shape of the tree.
///
/// Removal unlinks nodes (replacing a node with two children by its in-order successor) but
/// doesn't rotate, so a long run of removals can leave the tree unbalanced. The next insertion
/// along an affected path only repairs the subtrees it passes through.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the AvlTree.
/// - `h`: The height of the AvlTree, `O(log n)` unless removals have unbalanced it.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `height` | `O(1)` |
/// | `insert` | `O(log n)` |
/// | `search` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `first/last` | `O(h)` |
pub struct AvlTree<K: Ord, E> {
    pub(crate) root: Branch<K, E>,
    pub(crate) len: usize,
}

impl<K: Ord, E> AvlTree<K, E> {
    /// Creates a new, empty AvlTree.
    pub const fn new() -> AvlTree<K, E> {
        AvlTree {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of entries in the AvlTree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the AvlTree contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single entry.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns a read-only handle to the root node, for walking the shape of the tree.
    pub fn root(&self) -> Option<&Node<K, E>> {
        self.root.as_deref()
    }

    /// Associates `element` with `key`. If the key was already present, its element is replaced
    /// and the previous one is returned.
    pub fn insert(&mut self, key: K, element: E) -> Option<E> {
        let previous = self.root.insert(key, element);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Removes the entry for `key`, returning the key and element if it was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, E)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let result = self.root.remove_entry(key);
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes the entry for `key`, returning the element if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<E>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|e| e.1)
    }

    pub fn search_entry<Q>(&self, key: &Q) -> Option<(&K, &E)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    /// Returns a reference to the element stored under `key`, or None if there is no such entry.
    pub fn search<Q>(&self, key: &Q) -> Option<&E>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_entry(key).map(|e| e.1)
    }

    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut E>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search_entry(key).is_some()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &E)> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &E)> {
        self.root.last_entry()
    }

    /// Removes and returns the entry with the smallest key. Like [`AvlTree::remove`], this doesn't
    /// rebalance.
    pub fn take_first(&mut self) -> Option<(K, E)> {
        let result = self.root.take_first_entry();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes and returns the entry with the largest key, without rebalancing.
    pub fn take_last(&mut self) -> Option<(K, E)> {
        let result = self.root.take_last_entry();
        if result.is_some() {
            self.len -= 1;
        }
        result
    }

    /// Removes every entry from the AvlTree.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.len = 0;
    }

    /// Returns an iterator over all entries in ascending key order, as references.
    pub fn iter(&self) -> Iter<'_, K, E> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, E> {
        Keys(self.iter())
    }
}

impl<K: Ord, E> Default for AvlTree<K, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, E> FromIterator<(K, E)> for AvlTree<K, E> {
    fn from_iter<I: IntoIterator<Item = (K, E)>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, E> Extend<(K, E)> for AvlTree<K, E> {
    fn extend<I: IntoIterator<Item = (K, E)>>(&mut self, iter: I) {
        for (key, element) in iter {
            self.insert(key, element);
        }
    }
}

impl<K: Ord + Debug, E: Debug> Debug for AvlTree<K, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("nodes", &format_args!("\n{:?}\n", &self.root))
            .field("len", &self.len)
            .finish()
    }
}

/// Writes the tree as a fully-parenthesised in-order listing of its keys, where every node is
/// written as `[ left key right ]`, omitting empty subtrees. An empty tree writes nothing.
impl<K: Ord + Display, E> Display for AvlTree<K, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
