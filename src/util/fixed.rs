use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::util::error::CapacityExceeded;

/// Contiguous storage that holds at most `cap` elements and never reallocates. Elements can be
/// reordered in place through the mutable slice, but only `push` and `insert` can add more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FixedVec<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> FixedVec<T> {
    pub fn with_cap(cap: usize) -> FixedVec<T> {
        FixedVec {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    /// Inserts `item` at `index`, shifting later elements to the right.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), CapacityExceeded> {
        self.check_room()?;
        self.items.insert(index, item);
        Ok(())
    }

    pub fn push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        self.check_room()?;
        self.items.push(item);
        Ok(())
    }

    /// Removes the element at `index`, shifting later elements to the left.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Removes the element at `index`, filling the hole with the last element.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    fn check_room(&self) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            debug!(cap = self.cap, len = self.items.len(), "collection is full");
            return Err(CapacityExceeded { cap: self.cap });
        }
        Ok(())
    }
}

impl<T> Deref for FixedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for FixedVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}
