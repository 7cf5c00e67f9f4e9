use std::mem;

use super::{Link, Node, SinglyLinkedList};
use crate::util::error::NoCurrentElement;

/// A forward cursor over a [`SinglyLinkedList`], which can modify the list while traversing it.
///
/// The cursor sits between two elements. [`next`](CursorMut::next) moves it over one element and
/// makes that element current, so that it can be replaced with [`set_current`] or removed with
/// [`remove_current`]. Any structural change made through the cursor clears the current element.
///
/// The cursor holds the only mutable borrow of its list, so the list can't be changed by anything
/// else while it is alive.
///
/// [`set_current`]: CursorMut::set_current
/// [`remove_current`]: CursorMut::remove_current
pub struct CursorMut<'a, T> {
    // The link holding the current element if there is one, otherwise the next element.
    link: Option<&'a mut Link<T>>,
    len: &'a mut usize,
    index: usize,
    has_current: bool,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut SinglyLinkedList<T>) -> CursorMut<'a, T> {
        let SinglyLinkedList { head, len } = list;
        CursorMut {
            link: Some(head),
            len,
            index: 0,
            has_current: false,
        }
    }

    /// Returns the number of elements before the cursor.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn has_next(&self) -> bool {
        self.index < *self.len
    }

    /// Moves the cursor over the next element and returns it, making it the current element.
    pub fn next(&mut self) -> Option<&mut T> {
        if !self.has_next() {
            return None;
        }
        self.step_over_current();

        let node = self.link.as_deref_mut()?.as_deref_mut()?;
        self.index += 1;
        self.has_current = true;
        Some(&mut node.value)
    }

    /// Replaces the current element with `value`, returning the old one.
    pub fn set_current(&mut self, value: T) -> Result<T, NoCurrentElement> {
        let node = self.current_node()?;
        Ok(mem::replace(&mut node.value, value))
    }

    /// Removes the current element and returns it. The cursor stays in place, so the following
    /// call to [`next`](CursorMut::next) returns the element after the removed one.
    pub fn remove_current(&mut self) -> Result<T, NoCurrentElement> {
        if !self.has_current {
            return Err(NoCurrentElement);
        }

        let link = self.link.as_deref_mut().ok_or(NoCurrentElement)?;
        let Node { value, next } = *link.take().ok_or(NoCurrentElement)?;
        *link = next;

        *self.len -= 1;
        self.index -= 1;
        self.has_current = false;
        Ok(value)
    }

    /// Inserts `value` at the cursor's position, before the element that the next call to
    /// [`next`](CursorMut::next) would return. The inserted element is skipped by `next`.
    pub fn insert_before(&mut self, value: T) {
        self.step_over_current();

        if let Some(link) = self.link.take() {
            let next = link.take();
            let node = link.insert(Box::new(Node {
                value,
                next,
            }));
            self.link = Some(&mut node.next);
        }

        *self.len += 1;
        self.index += 1;
    }

    fn current_node(&mut self) -> Result<&mut Node<T>, NoCurrentElement> {
        if !self.has_current {
            return Err(NoCurrentElement);
        }
        self.link
            .as_deref_mut()
            .and_then(|link| link.as_deref_mut())
            .ok_or(NoCurrentElement)
    }

    /// Moves the link past the current element, so that it holds the next one.
    fn step_over_current(&mut self) {
        if !mem::take(&mut self.has_current) {
            return;
        }
        if let Some(link) = self.link.take() {
            self.link = link.as_mut().map(|node| &mut node.next);
        }
    }
}
