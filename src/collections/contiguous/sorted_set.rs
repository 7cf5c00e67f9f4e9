use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::{slice, vec};

use super::{DEFAULT_CAP, FixedVec};
use crate::collections::traits::{Collection, Set};
use crate::util::error::CapacityExceeded;
use crate::util::result::ResultExtension;

/// A fixed-capacity set that keeps its elements sorted, so lookups can use a binary search.
///
/// Dereferences to a sorted slice of the elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the SortedSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(log n)` |
/// | `add` | `O(n)` |
/// | `remove` | `O(n)` |
#[derive(Clone, PartialEq, Eq)]
pub struct SortedSet<T: Ord> {
    pub(crate) items: FixedVec<T>,
}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty SortedSet with room for [`DEFAULT_CAP`] elements.
    pub fn new() -> SortedSet<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty SortedSet with room for exactly `cap` elements.
    pub fn with_cap(cap: usize) -> SortedSet<T> {
        SortedSet {
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
        self.items.binary_search(item).is_ok()
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    ///
    /// # Panics
    /// Panics if `item` is new and the set is full.
    pub fn add(&mut self, item: T) -> bool {
        self.try_add(item).throw()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. Returns an [`Err`]
    /// rather than panicking if `item` is new and the set is full. A full set still reports
    /// `Ok(false)` for an element it contains.
    pub fn try_add(&mut self, item: T) -> Result<bool, CapacityExceeded> {
        match self.items.binary_search(&item) {
            Ok(_) => Ok(false),
            Err(index) => self.items.insert(index, item).map(|()| true),
        }
    }

    /// Removes the element equal to `item`, returning true if there was one.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.binary_search(item) {
            Ok(index) => {
                self.items.remove(index);
                true
            },
            Err(_) => false,
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

impl<T: Ord> Collection<T> for SortedSet<T> {
    type AddError = CapacityExceeded;

    fn len(&self) -> usize {
        SortedSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        SortedSet::contains(self, item)
    }

    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError> {
        SortedSet::try_add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        SortedSet::remove(self, item)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }
}

impl<T: Ord> Set<T> for SortedSet<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        SortedSet::iter(self)
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Deref for SortedSet<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Ord> IntoIterator for SortedSet<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Debug> Debug for SortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedSet")
            .field("items", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Ord + Display> Display for SortedSet<T> {
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
