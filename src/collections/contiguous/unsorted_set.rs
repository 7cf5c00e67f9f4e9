use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::{slice, vec};

use super::{DEFAULT_CAP, FixedVec};
use crate::collections::traits::{Collection, Set};
use crate::util::error::CapacityExceeded;
use crate::util::result::ResultExtension;

/// A fixed-capacity set that only needs [`Eq`] from its elements, at the cost of linear lookups.
///
/// Elements are kept in insertion order until one is removed: removal moves the last element into
/// the gap.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsortedSet<T: Eq> {
    pub(crate) items: FixedVec<T>,
}

impl<T: Eq> UnsortedSet<T> {
    /// Creates an empty UnsortedSet with room for [`DEFAULT_CAP`] elements.
    pub fn new() -> UnsortedSet<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty UnsortedSet with room for exactly `cap` elements.
    pub fn with_cap(cap: usize) -> UnsortedSet<T> {
        UnsortedSet {
            items: FixedVec::with_cap(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.items.cap()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    ///
    /// # Panics
    /// Panics if `item` is new and the set is full.
    pub fn add(&mut self, item: T) -> bool {
        self.try_add(item).throw()
    }

    /// Adds `item` to the end of the set, returning true if it wasn't already present. Returns an
    /// [`Err`] rather than panicking if `item` is new and the set is full.
    pub fn try_add(&mut self, item: T) -> Result<bool, CapacityExceeded> {
        if self.contains(&item) {
            return Ok(false);
        }
        self.items.push(item).map(|()| true)
    }

    /// Removes the element equal to `item`, returning true if there was one.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.swap_remove(index);
                true
            },
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Eq> Collection<T> for UnsortedSet<T> {
    type AddError = CapacityExceeded;

    fn len(&self) -> usize {
        UnsortedSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        UnsortedSet::contains(self, item)
    }

    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError> {
        UnsortedSet::try_add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        UnsortedSet::remove(self, item)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }
}

impl<T: Eq> Set<T> for UnsortedSet<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        UnsortedSet::iter(self)
    }
}

impl<T: Eq> Default for UnsortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq> Deref for UnsortedSet<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Eq> IntoIterator for UnsortedSet<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T: Eq> IntoIterator for &'a UnsortedSet<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Debug> Debug for UnsortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsortedSet")
            .field("items", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Eq + Display> Display for UnsortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
