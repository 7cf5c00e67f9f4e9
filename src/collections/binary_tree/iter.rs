use std::iter::FusedIterator;

use super::{AvlTree, Node};

impl<K: Ord, E> IntoIterator for AvlTree<K, E> {
    type Item = (K, E);

    type IntoIter = IntoIter<K, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// A type for owned, in-order iteration over an [`AvlTree`]. Produces values of type `(K, E)`.
pub struct IntoIter<K: Ord, E>(AvlTree<K, E>);

impl<K: Ord, E> Iterator for IntoIter<K, E> {
    type Item = (K, E);

    fn next(&mut self) -> Option<Self::Item> {
        // Takes O(h) per entry, the tree has no parent links to walk back up with.
        self.0.take_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<K: Ord, E> DoubleEndedIterator for IntoIter<K, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.take_last()
    }
}

impl<K: Ord, E> FusedIterator for IntoIter<K, E> {}

impl<K: Ord, E> ExactSizeIterator for IntoIter<K, E> {}

impl<'a, K: Ord, E> IntoIterator for &'a AvlTree<K, E> {
    type Item = (&'a K, &'a E);

    type IntoIter = Iter<'a, K, E>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len(),
        };
        iter.push_left_spine(self.root());
        iter
    }
}

/// A type for borrowed, in-order iteration over an [`AvlTree`]. Produces values of type
/// `(&K, &E)`.
///
/// See [`AvlTree::iter`].
pub struct Iter<'a, K: Ord, E> {
    // Nodes whose left subtree is being (or has been) visited, but which haven't been yielded.
    pub(crate) stack: Vec<&'a Node<K, E>>,
    pub(crate) len: usize,
}

impl<'a, K: Ord, E> Iter<'a, K, E> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, E>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, K: Ord, E> Iterator for Iter<'a, K, E> {
    type Item = (&'a K, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Ord, E> FusedIterator for Iter<'a, K, E> {}

impl<'a, K: Ord, E> ExactSizeIterator for Iter<'a, K, E> {}

/// A type for borrowed iteration over the keys of an [`AvlTree`], in ascending order.
///
/// See [`AvlTree::keys`].
pub struct Keys<'a, K: Ord, E>(pub(crate) Iter<'a, K, E>);

impl<'a, K: Ord, E> Iterator for Keys<'a, K, E> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K: Ord, E> FusedIterator for Keys<'a, K, E> {}

impl<'a, K: Ord, E> ExactSizeIterator for Keys<'a, K, E> {}
