use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A pointer to a heap allocated [`Node`], owned by the list that it is linked into.
///
/// The accessors hand out references with caller-chosen lifetimes. They are only sound while the
/// node is still linked into a live list, which every caller in this module upholds by tying the
/// returned references to a borrow of that list.
#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    // Nodes are allocated through Box, so that taking one back out moves the value off the heap.
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node and returns it by value.
    ///
    /// # Safety
    /// The pointer must not be used again, and must no longer be reachable from its list.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in from_node and the caller guarantees that this
        // is the last use.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: Nodes stay allocated for as long as they are linked into a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As for value, the list's borrow rules give callers exclusive access.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: Nodes stay allocated for as long as they are linked into a list.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: Links are only rewritten through a mutable borrow of the owning list.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: Nodes stay allocated for as long as they are linked into a list.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: Links are only rewritten through a mutable borrow of the owning list.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
