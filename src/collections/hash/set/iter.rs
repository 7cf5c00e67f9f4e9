use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::{slice, vec};

use super::{HashSet, Slot};

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            len: self.len,
            inner: self.slots.into_vec().into_iter(),
        }
    }
}

/// A type for owned iteration over a [`HashSet`], in slot order. Produces values of type `T`.
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<Slot<T>>,
    pub(crate) len: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.by_ref().find_map(Slot::into_occupant)?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.slots.iter(),
            len: self.len,
        }
    }
}

/// A type for borrowed iteration over a [`HashSet`], in slot order. Produces values of type `&T`.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Slot<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.by_ref().find_map(Slot::occupant)?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
