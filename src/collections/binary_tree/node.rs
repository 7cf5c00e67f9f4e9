use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Deref;

use tracing::trace;

/// An owning link to a subtree, which may be empty. All structural changes go through a Branch: the
/// subtree root is taken out, restructured and the (possibly different) new root is put back.
pub(crate) struct Branch<K: Ord, E>(pub Option<Box<Node<K, E>>>);

/// A single node of an [`AvlTree`](super::AvlTree).
///
/// Nodes are exposed as read-only handles (see [`AvlTree::root`](super::AvlTree::root)) so that
/// external code can walk the tree's shape, for example to draw it or to verify its balance.
pub struct Node<K: Ord, E> {
    pub(crate) left: Branch<K, E>,
    pub(crate) right: Branch<K, E>,
    pub(crate) key: K,
    pub(crate) element: E,
    // Height of the subtree rooted here, a leaf has height 1.
    pub(crate) height: usize,
}

impl<K: Ord, E> Node<K, E> {
    pub(crate) fn leaf(key: K, element: E) -> Box<Node<K, E>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            key,
            element,
            height: 1,
        })
    }

    pub const fn key(&self) -> &K {
        &self.key
    }

    pub const fn element(&self) -> &E {
        &self.element
    }

    pub fn left(&self) -> Option<&Node<K, E>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K, E>> {
        self.right.as_deref()
    }

    /// Returns the height of the subtree rooted at this node, where a leaf has height 1.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the right subtree minus the height of the left subtree.
    pub fn balance_factor(&self) -> isize {
        self.right.height() as isize - self.left.height() as isize
    }

    pub(crate) fn into_tuple(self) -> (K, E) {
        (self.key, self.element)
    }

    pub(crate) const fn tuple(&self) -> (&K, &E) {
        (&self.key, &self.element)
    }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// Restores the balance of this subtree after one of its children grew by one level, returning
    /// the new root of the subtree.
    pub(crate) fn balance(mut self: Box<Self>) -> Box<Self> {
        self.update_height();

        match self.balance_factor() {
            factor if factor < -1 => {
                let left_leans_right = self.left().is_some_and(|l| l.balance_factor() > 0);
                if left_leans_right {
                    trace!(rotation = "left-right", height = self.height, "rebalancing subtree");
                    self.rotate_left_right()
                } else {
                    trace!(rotation = "right", height = self.height, "rebalancing subtree");
                    self.rotate_right()
                }
            },
            factor if factor > 1 => {
                let right_leans_left = self.right().is_some_and(|r| r.balance_factor() < 0);
                if right_leans_left {
                    trace!(rotation = "right-left", height = self.height, "rebalancing subtree");
                    self.rotate_right_left()
                } else {
                    trace!(rotation = "left", height = self.height, "rebalancing subtree");
                    self.rotate_left()
                }
            },
            _ => self,
        }
    }

    /// Rotates this subtree to the right: the left child becomes the root, its right subtree
    /// becomes the old root's left subtree and the old root becomes the new root's right child.
    ///
    /// ```text
    ///       self           new
    ///       /  \          /   \
    ///     new   c   ->   a    self
    ///    /  \                 /  \
    ///   a    b               b    c
    /// ```
    ///
    /// A subtree without a left child is returned unchanged.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.0.take() else {
            return self;
        };
        self.left.0 = new_root.right.0.take();
        self.update_height();

        new_root.right.0 = Some(self);
        new_root.update_height();
        new_root
    }

    /// The mirror image of [`Node::rotate_right`].
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.0.take() else {
            return self;
        };
        self.right.0 = new_root.left.0.take();
        self.update_height();

        new_root.left.0 = Some(self);
        new_root.update_height();
        new_root
    }

    fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        if let Some(left) = self.left.0.take() {
            self.left.0 = Some(left.rotate_left());
        }
        self.rotate_right()
    }

    fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        if let Some(right) = self.right.0.take() {
            self.right.0 = Some(right.rotate_right());
        }
        self.rotate_left()
    }

    /// Detaches the leftmost node of this subtree. Returns what remains of the subtree and the
    /// detached node, which has no left child and whose right child has been handed back to the
    /// remaining subtree.
    fn detach_first(mut self: Box<Self>) -> (Option<Box<Self>>, Box<Self>) {
        match self.left.0.take() {
            Some(left) => {
                let (rest, first) = left.detach_first();
                self.left.0 = rest;
                self.update_height();
                (Some(self), first)
            },
            None => {
                let rest = self.right.0.take();
                self.update_height();
                (rest, self)
            },
        }
    }

    /// The mirror image of [`Node::detach_first`].
    fn detach_last(mut self: Box<Self>) -> (Option<Box<Self>>, Box<Self>) {
        match self.right.0.take() {
            Some(right) => {
                let (rest, last) = right.detach_last();
                self.right.0 = rest;
                self.update_height();
                (Some(self), last)
            },
            None => {
                let rest = self.left.0.take();
                self.update_height();
                (rest, self)
            },
        }
    }
}

impl<K: Ord, E> Branch<K, E> {
    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => node.height,
            None => 0,
        }
    }

    /// Inserts `element` under `key`, rebalancing every subtree on the way back up. Returns the
    /// element previously stored under an equal key, in which case the shape of the tree is left
    /// untouched.
    pub fn insert(&mut self, key: K, element: E) -> Option<E> {
        let Some(node) = &mut self.0 else {
            self.0 = Some(Node::leaf(key, element));
            return None;
        };

        let previous = match key.cmp(&node.key) {
            Ordering::Less => node.left.insert(key, element),
            Ordering::Greater => node.right.insert(key, element),
            Ordering::Equal => return Some(mem::replace(&mut node.element, element)),
        };

        if let Some(node) = self.0.take() {
            self.0 = Some(node.balance());
        }
        previous
    }

    /// Removes the entry with a key equal to `key`. Heights are kept accurate along the path, but
    /// no rotations are performed, so the tree may be left unbalanced.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, E)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.0.as_mut()?;

        let removed = match key.cmp(node.key.borrow()) {
            Ordering::Less => node.left.remove_entry(key),
            Ordering::Greater => node.right.remove_entry(key),
            Ordering::Equal => return self.take_root(),
        };

        node.update_height();
        removed
    }

    /// Removes the root of this branch. A root with two children is replaced by its in-order
    /// successor, which is first detached from the right subtree.
    fn take_root(&mut self) -> Option<(K, E)> {
        let mut node = self.0.take()?;

        self.0 = match (node.left.0.take(), node.right.0.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (rest, mut successor) = right.detach_first();
                successor.left.0 = Some(left);
                successor.right.0 = rest;
                successor.update_height();
                Some(successor)
            },
        };

        Some(node.into_tuple())
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &E)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.get_entry(key),
                Ordering::Greater => node.right.get_entry(key),
                Ordering::Equal => Some(node.tuple()),
            },
            None => None,
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut E>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &mut self.0 {
            Some(node) => match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.get_mut(key),
                Ordering::Greater => node.right.get_mut(key),
                Ordering::Equal => Some(&mut node.element),
            },
            None => None,
        }
    }

    pub fn first_entry(&self) -> Option<(&K, &E)> {
        match &self.0 {
            Some(node) => match node.left.first_entry() {
                Some(e) => Some(e),
                None => Some(node.tuple()),
            },
            None => None,
        }
    }

    pub fn last_entry(&self) -> Option<(&K, &E)> {
        match &self.0 {
            Some(node) => match node.right.last_entry() {
                Some(e) => Some(e),
                None => Some(node.tuple()),
            },
            None => None,
        }
    }

    pub fn take_first_entry(&mut self) -> Option<(K, E)> {
        let (rest, first) = self.0.take()?.detach_first();
        self.0 = rest;
        Some(first.into_tuple())
    }

    pub fn take_last_entry(&mut self) -> Option<(K, E)> {
        let (rest, last) = self.0.take()?.detach_last();
        self.0 = rest;
        Some(last.into_tuple())
    }
}

impl<K: Ord, E> Deref for Branch<K, E> {
    type Target = Option<Box<Node<K, E>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Writes the subtree in order, with each node wrapped as `[ left key right ]`. Empty subtrees
/// write nothing.
impl<K: Ord + Display, E> Display for Branch<K, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some(node) = &self.0 else {
            return Ok(());
        };

        write!(f, "[ ")?;
        if node.left.is_some() {
            write!(f, "{} ", node.left)?;
        }
        write!(f, "{}", node.key)?;
        if node.right.is_some() {
            write!(f, " {}", node.right)?;
        }
        write!(f, " ]")
    }
}

impl<K: Ord + Debug, E: Debug> Debug for Branch<K, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.key,
                node.element,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}

impl<K: Ord + Debug, E: Debug> Debug for Node<K, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("element", &self.element)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
