use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;

use super::{CursorMut, Iter, IterMut, Link, Node, NodePtr};
use crate::collections::traits::Collection;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`CursorMut`] for bi-directional traversal
/// that can modify the list as it goes.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

// SAFETY: The list owns its nodes exactly like a Box would, so it can cross threads whenever T can.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access to the list only ever gives out shared references to elements.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.map(NodePtr::value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(NodePtr::value_mut)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(NodePtr::value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(NodePtr::value_mut)
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.link_before(value, self.head);
    }

    /// Add the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.link_before(value, None);
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: head is linked into this list, and is forgotten by unlink.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: tail is linked into this list, and is forgotten by unlink.
        Some(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting later elements back.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` so that it ends up at `index`, returning an [`Err`] rather than panicking
    /// if `index` is greater than the length of the list.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let next = match index {
            val if val == self.len => None,
            val => Some(self.checked_seek(val)?),
        };
        self.link_before(value, next);
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: checked_seek only returns nodes of this list, and the pointer isn't kept.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        let error = IndexOutOfBounds {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(error);
        }
        self.seek(index).ok_or(error)
    }

    /// Walks to `index` from whichever end is closer.
    pub(crate) fn seek(&self, index: usize) -> Link<T> {
        if index < self.len / 2 {
            let mut node = self.head;
            for _ in 0..index {
                node = node?.next();
            }
            node
        } else {
            let mut node = self.tail;
            for _ in index..self.len.saturating_sub(1) {
                node = node?.prev();
            }
            node
        }
    }

    /// Links a new node holding `value` in front of `next`, or at the back if `next` is None.
    pub(crate) fn link_before(&mut self, value: T, next: Link<T>) -> NodePtr<T> {
        let prev = match next {
            Some(next) => next.prev(),
            None => self.tail,
        };
        let node = NodePtr::from_node(Node {
            value,
            prev,
            next,
        });

        match prev {
            Some(prev) => prev.set_next(Some(node)),
            None => self.head = Some(node),
        }
        match next {
            Some(next) => next.set_prev(Some(node)),
            None => self.tail = Some(node),
        }

        self.len += 1;
        node
    }

    /// Unlinks `node` from the list and returns its value.
    ///
    /// # Safety
    /// `node` must be linked into this list, and must not be used afterwards.
    pub(crate) unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: The caller guarantees node belongs to this list and is discarded.
        let Node { value, prev, next } = unsafe { node.take_node() };

        match prev {
            Some(prev) => prev.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next) => next.set_prev(prev),
            None => self.tail = prev,
        }

        self.len -= 1;
        value
    }

    /// Checks that every link agrees with its neighbour and that the length matches.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let mut count = 0;
        let mut prev = None;
        let mut curr = self.head;

        while let Some(node) = curr {
            assert!(node.prev() == prev, "Node at {count} has a broken prev link.");
            prev = curr;
            curr = node.next();
            count += 1;
        }

        assert!(self.tail == prev, "The tail should be the last node reached.");
        assert_eq!(self.len, count, "The length should match the number of nodes.");
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }

    /// Removes the first element equal to `item`, returning true if there was one.
    pub fn remove_item(&mut self, item: &T) -> bool {
        let mut curr = self.head;
        while let Some(node) = curr {
            if node.value() == item {
                // SAFETY: node was reached by walking this list, and the loop ends here.
                unsafe { self.unlink(node) };
                return true;
            }
            curr = node.next();
        }
        false
    }
}

impl<T: PartialEq> Collection<T> for DoublyLinkedList<T> {
    type AddError = Infallible;

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, item: &T) -> bool {
        DoublyLinkedList::contains(self, item)
    }

    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError> {
        self.push_back(item);
        Ok(true)
    }

    fn remove(&mut self, item: &T) -> bool {
        self.remove_item(item)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(node) = curr {
            curr = node.next();
            // SAFETY: Every node is visited once and the list is being destroyed.
            mem::drop(unsafe { node.take_node() });
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") <-> (")
        )
    }
}
