use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::{slice, vec};

use super::{DEFAULT_CAP, FixedVec};
use crate::collections::traits::Collection;
use crate::util::error::CapacityExceeded;
use crate::util::result::ResultExtension;

/// A fixed-capacity bag that keeps its elements sorted, so lookups can use a binary search.
/// Equal elements may be added more than once.
///
/// Dereferences to a sorted slice of the elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the SortedBag.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `contains` | `O(log n)` |
/// | `count` | `O(log n)` |
/// | `add` | `O(n)` |
/// | `remove` | `O(n)` |
#[derive(Clone, PartialEq, Eq)]
pub struct SortedBag<T: Ord> {
    pub(crate) items: FixedVec<T>,
}

impl<T: Ord> SortedBag<T> {
    /// Creates an empty SortedBag with room for [`DEFAULT_CAP`] elements.
    pub fn new() -> SortedBag<T> {
        Self::with_cap(DEFAULT_CAP)
    }

    /// Creates an empty SortedBag with room for exactly `cap` elements.
    pub fn with_cap(cap: usize) -> SortedBag<T> {
        SortedBag {
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

    /// Returns the number of elements equal to `item`.
    pub fn count(&self, item: &T) -> usize {
        let start = self.items.partition_point(|existing| existing < item);
        let end = self.items.partition_point(|existing| existing <= item);
        end - start
    }

    /// Adds `item` after any elements equal to it.
    ///
    /// # Panics
    /// Panics if the bag is full.
    pub fn add(&mut self, item: T) {
        self.try_add(item).throw()
    }

    /// Adds `item` after any elements equal to it, returning an [`Err`] rather than panicking if
    /// the bag is full.
    pub fn try_add(&mut self, item: T) -> Result<(), CapacityExceeded> {
        let index = self.items.partition_point(|existing| existing <= &item);
        self.items.insert(index, item)
    }

    /// Removes one element equal to `item`, returning true if there was one.
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

impl<T: Ord> Collection<T> for SortedBag<T> {
    type AddError = CapacityExceeded;

    fn len(&self) -> usize {
        SortedBag::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        SortedBag::contains(self, item)
    }

    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError> {
        SortedBag::try_add(self, item).map(|()| true)
    }

    fn remove(&mut self, item: &T) -> bool {
        SortedBag::remove(self, item)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.as_slice().into()
    }
}

impl<T: Ord> Default for SortedBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Deref for SortedBag<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Ord> IntoIterator for SortedBag<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_vec().into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedBag<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Debug> Debug for SortedBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedBag")
            .field("items", &self.as_slice())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Ord + Display> Display for SortedBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
