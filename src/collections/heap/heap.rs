use std::fmt::{self, Debug, Formatter};

use crate::util::error::{CapacityExceeded, EmptyCollection, IndexOutOfBounds};
use crate::util::fixed::FixedVec;
use crate::util::result::ResultExtension;

/// A fixed-capacity priority queue, stored as a binary min-heap in a single array.
///
/// Every element is added with an explicit `i64` priority, where a smaller value means a higher
/// priority. Duplicate elements and priorities are allowed. Elements with equal priorities are
/// removed in no particular order.
///
/// Positions in the heap are exposed through [`priorities`](Heap::priorities) and
/// [`iter`](Heap::iter), and can be passed to [`decrease_priority`](Heap::decrease_priority) and
/// [`delete`](Heap::delete). A position is only meaningful until the heap is next modified.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `peek_min` | `O(1)` |
/// | `add` | `O(log n)` |
/// | `remove_min` | `O(log n)` |
/// | `decrease_priority` | `O(log n)` |
/// | `delete` | `O(log n)` |
pub struct Heap<E> {
    pub(crate) nodes: FixedVec<HeapNode<E>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeapNode<E> {
    pub element: E,
    pub priority: i64,
}

impl<E> Heap<E> {
    /// Creates an empty Heap that can hold up to `cap` elements.
    pub fn new(cap: usize) -> Heap<E> {
        Heap {
            nodes: FixedVec::with_cap(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn cap(&self) -> usize {
        self.nodes.cap()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.nodes.is_full()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Adds `element` with the given `priority`.
    ///
    /// # Panics
    /// Panics if the heap is full.
    pub fn add(&mut self, element: E, priority: i64) {
        self.try_add(element, priority).throw()
    }

    /// Adds `element` with the given `priority`, returning an [`Err`] rather than panicking if the
    /// heap is full.
    pub fn try_add(&mut self, element: E, priority: i64) -> Result<(), CapacityExceeded> {
        self.nodes.push(HeapNode {
            element,
            priority,
        })?;
        self.sift_up(self.nodes.len() - 1);
        Ok(())
    }

    /// Returns the element with the highest priority (smallest value) and its priority.
    pub fn peek_min(&self) -> Option<(&E, i64)> {
        self.nodes.first().map(|node| (&node.element, node.priority))
    }

    /// Removes and returns the element with the highest priority (smallest value).
    ///
    /// # Panics
    /// Panics if the heap is empty.
    pub fn remove_min(&mut self) -> E {
        self.try_remove_min().throw()
    }

    /// Removes and returns the element with the highest priority (smallest value), returning an
    /// [`Err`] rather than panicking if the heap is empty.
    pub fn try_remove_min(&mut self) -> Result<E, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        let node = self.nodes.swap_remove(0);
        self.sift_down(0);
        Ok(node.element)
    }

    /// Lowers the priority value of the element at `index` by `change`, which raises its priority
    /// for a positive `change`. The new value saturates at the bounds of `i64`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn decrease_priority(&mut self, index: usize, change: i64) {
        self.try_decrease_priority(index, change).throw()
    }

    /// Lowers the priority value of the element at `index` by `change`, returning an [`Err`]
    /// rather than panicking if `index` is out of bounds.
    pub fn try_decrease_priority(
        &mut self,
        index: usize,
        change: i64,
    ) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        let node = self.nodes.get_mut(index).ok_or(IndexOutOfBounds { index, len })?;
        node.priority = node.priority.saturating_sub(change);

        if change >= 0 {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn delete(&mut self, index: usize) -> E {
        self.try_delete(index).throw()
    }

    /// Removes and returns the element at `index`, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_delete(&mut self, index: usize) -> Result<E, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        let node = self.nodes.swap_remove(index);
        // The last node moved into the gap may belong above or below it.
        if index < self.nodes.len() {
            self.sift_down(index);
            self.sift_up(index);
        }
        Ok(node.element)
    }

    /// Returns the priority values in heap order, starting with the root.
    pub fn priorities(&self) -> Box<[i64]> {
        self.nodes.iter().map(|node| node.priority).collect()
    }

    /// Returns an iterator over the elements and their priorities, in heap order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&E, i64)> {
        self.nodes.iter().map(|node| (&node.element, node.priority))
    }
}

impl<E> Heap<E> {
    pub(crate) fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index].priority >= self.nodes[parent].priority {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    pub(crate) fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.nodes[right].priority < self.nodes[left].priority {
                right
            } else {
                left
            };

            if self.nodes[child].priority >= self.nodes[index].priority {
                break;
            }
            self.nodes.swap(index, child);
            index = child;
        }
    }
}

impl<E: Debug> Debug for Heap<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("nodes", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<E: Clone> Clone for Heap<E> {
    fn clone(&self) -> Self {
        Heap {
            nodes: self.nodes.clone(),
        }
    }
}
