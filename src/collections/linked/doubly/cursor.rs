use std::mem;

use super::{DoublyLinkedList, Link, NodePtr};
use crate::util::error::NoCurrentElement;

/// A bi-directional cursor over a [`DoublyLinkedList`], which can modify the list while
/// traversing it.
///
/// The cursor sits between two elements (or before the first / after the last). Moving it with
/// [`next`](CursorMut::next) or [`prev`](CursorMut::prev) returns the element that was passed
/// over and makes it the current element. [`set_current`](CursorMut::set_current) and
/// [`remove_current`](CursorMut::remove_current) act on the current element and fail with
/// [`NoCurrentElement`] before the first move, or after the current element was removed or an
/// element was inserted.
pub struct CursorMut<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    // The node after the cursor, None if the cursor is at the back.
    next: Link<T>,
    // The number of elements before the cursor.
    index: usize,
    current: Option<NodePtr<T>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>) -> CursorMut<'a, T> {
        CursorMut {
            next: list.head,
            list,
            index: 0,
            current: None,
        }
    }

    /// Returns the number of elements before the cursor.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub const fn has_prev(&self) -> bool {
        self.index > 0
    }

    /// Moves the cursor forward over one element and returns it.
    pub fn next(&mut self) -> Option<&mut T> {
        let node = self.next?;
        self.next = node.next();
        self.index += 1;
        self.current = Some(node);
        Some(node.value_mut())
    }

    /// Moves the cursor back over one element and returns it.
    pub fn prev(&mut self) -> Option<&mut T> {
        let node = match self.next {
            Some(next) => next.prev(),
            None => self.list.tail,
        }?;
        self.next = Some(node);
        self.index -= 1;
        self.current = Some(node);
        Some(node.value_mut())
    }

    /// Replaces the current element with `value`, returning the old one.
    pub fn set_current(&mut self, value: T) -> Result<T, NoCurrentElement> {
        let node = self.current.ok_or(NoCurrentElement)?;
        Ok(mem::replace(node.value_mut(), value))
    }

    /// Removes the current element and returns it. The cursor keeps its place between the
    /// neighbours of the removed element.
    pub fn remove_current(&mut self) -> Result<T, NoCurrentElement> {
        let node = self.current.take().ok_or(NoCurrentElement)?;

        if self.next == Some(node) {
            // Reached by prev, so the node is after the cursor.
            self.next = node.next();
        } else {
            self.index -= 1;
        }

        // SAFETY: current is only ever set to nodes of this list, and was just cleared.
        Ok(unsafe { self.list.unlink(node) })
    }

    /// Inserts `value` at the cursor's position. The inserted element ends up before the cursor,
    /// so [`next`](CursorMut::next) skips it and [`prev`](CursorMut::prev) returns it.
    pub fn insert_before(&mut self, value: T) {
        self.list.link_before(value, self.next);
        self.index += 1;
        self.current = None;
    }
}
