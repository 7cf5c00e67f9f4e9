use std::error::Error;

/// The contract shared by every element collection in this crate: a size, containment, adding and
/// removing single elements and exporting the contents as an array.
///
/// Maps (such as [`AvlTree`](crate::collections::binary_tree::AvlTree)) don't implement this,
/// because they associate elements with keys rather than containing them directly.
pub trait Collection<T> {
    /// The error returned when an element can't be added. Unbounded collections use
    /// [`Infallible`](std::convert::Infallible).
    type AddError: Error;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &T) -> bool;

    /// Adds `item`, returning true if the collection changed. Sets return false for an item that
    /// is already present.
    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError>;

    /// Removes one occurrence of `item`, returning true if one was found.
    fn remove(&mut self, item: &T) -> bool;

    /// Copies the elements into a boxed slice, in the collection's iteration order.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;

    /// Returns true if every item produced by `items` is contained.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Adds every item, stopping at the first failure. Returns true if any item changed the
    /// collection.
    fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<bool, Self::AddError> {
        let mut changed = false;
        for item in items {
            changed |= self.try_add(item)?;
        }
        Ok(changed)
    }

    /// Removes one occurrence of every item. Returns true if anything was removed.
    fn remove_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut changed = false;
        for item in items {
            changed |= self.remove(item);
        }
        changed
    }
}
