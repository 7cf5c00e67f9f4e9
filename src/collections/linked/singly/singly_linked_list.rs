use std::convert::Infallible;
use std::fmt::{self, Debug, Display, Formatter};

use super::{CursorMut, Iter};
use crate::collections::traits::Collection;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A list with links in one direction, each node owning the next one. See also: [`CursorMut`]
/// for forward iteration that can modify the list as it goes.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `push_back` | `O(n)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `contains` | `O(n)` |
///
/// Without a tail pointer, appending walks the whole list. Use [`DoublyLinkedList`] if that
/// matters.
///
/// [`DoublyLinkedList`]: crate::collections::linked::DoublyLinkedList
pub struct SinglyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            head: None,
            len: 0,
        }
    }

    /// Returns the length of the SinglyLinkedList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SinglyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Add the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            value,
            next,
        }));
        self.len += 1;
    }

    /// Add the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len, value)
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
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
        self.iter().nth(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
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
        let len = self.len;
        let error = IndexOutOfBounds { index, len };
        if index > len {
            return Err(error);
        }

        let link = self.link_mut(index).ok_or(error)?;
        let next = link.take();
        *link = Some(Box::new(Node {
            value,
            next,
        }));
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking
    /// if `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        let error = IndexOutOfBounds { index, len };
        if index >= len {
            return Err(error);
        }

        let link = self.link_mut(index).ok_or(error)?;
        let Node { value, next } = *link.take().ok_or(error)?;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        // Unlink iteratively, dropping a long chain of boxes recursively could overflow the stack.
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns a cursor positioned before the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns the link that holds the element at `index`, or the trailing `None` link when
    /// `index` is the length of the list.
    pub(crate) fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes the first element equal to `item`, returning true if there was one.
    pub fn remove_item(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(index) => self.try_remove(index).is_ok(),
            None => false,
        }
    }
}

impl<T: PartialEq> Collection<T> for SinglyLinkedList<T> {
    type AddError = Infallible;

    fn len(&self) -> usize {
        self.len
    }

    fn contains(&self, item: &T) -> bool {
        SinglyLinkedList::contains(self, item)
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

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Walk to the end once, rather than once per element.
        let Some(mut link) = self.link_mut(self.len) else {
            return;
        };
        let mut added = 0;

        for value in iter {
            let node = link.insert(Box::new(Node {
                value,
                next: None,
            }));
            link = &mut node.next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinglyLinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
