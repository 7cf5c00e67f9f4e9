use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;

use tracing::{debug, trace};

use super::{Iter, Slot};
use crate::collections::traits::{Collection, Set};
use crate::util::error::{CapacityExceeded, CapacityTooSmall};
use crate::util::result::ResultExtension;

/// The smallest capacity a HashSet can be created with.
pub const MIN_CAP: usize = 4;

/// A set of elements stored directly in a fixed-size table, using open addressing to resolve
/// collisions.
///
/// The capacity is chosen once, at construction, as the smallest power of two that is at least
/// the requested size. The table never grows: once no slot is reachable for a new element,
/// [`try_add`](HashSet::try_add) fails with [`CapacityExceeded`].
///
/// # Probing
/// For an element with hash `h` in a table with capacity `c`, the slots probed are `i`, `i + s`,
/// `i + 2s`, ... (wrapping at `c`), where `i = h mod c` and `s = 1 + (h mod c)`. At most `c` slots
/// are probed. Because `c` is a power of two, an even step only reaches some of the slots, so an
/// insertion can fail while other slots are still free. (A step of `c` only ever probes `i`.)
///
/// Removed elements leave a [`Slot::Tombstone`] behind, which keeps later elements in the same
/// probe sequence reachable. Tombstones are reused by insertions but never revert to
/// [`Slot::Empty`], except through [`clear`](HashSet::clear).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `c`: The capacity of the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(c)` |
/// | `contains` | `O(1)`*, `O(c)` |
/// | `remove` | `O(1)`*, `O(c)` |
/// | `clear` | `O(c)` |
///
/// \* With few collisions and tombstones. A probe may visit every slot of a crowded table.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) slots: Box<[Slot<T>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

/// The outcome of probing the table for an element.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The element is stored at this index.
    Found(usize),
    /// The element isn't in the set. `vacant` is the first reusable slot on its probe sequence,
    /// if there is one.
    Absent { vacant: Option<usize> },
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with room for at least `min_cap` elements, using the default hasher.
    ///
    /// # Panics
    /// Panics if `min_cap` is less than [`MIN_CAP`].
    pub fn with_cap(min_cap: usize) -> HashSet<T, B> {
        Self::try_with_cap(min_cap).throw()
    }

    /// Creates a new HashSet with room for at least `min_cap` elements, using the default hasher.
    /// Returns an [`Err`] rather than panicking if `min_cap` is less than [`MIN_CAP`].
    pub fn try_with_cap(min_cap: usize) -> Result<HashSet<T, B>, CapacityTooSmall> {
        Self::try_with_cap_and_hasher(min_cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with room for at least `min_cap` elements and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if `min_cap` is less than [`MIN_CAP`].
    pub fn with_cap_and_hasher(min_cap: usize, hasher: B) -> HashSet<T, B> {
        Self::try_with_cap_and_hasher(min_cap, hasher).throw()
    }

    /// Creates a new HashSet with room for at least `min_cap` elements and the provided `hasher`.
    /// The capacity is rounded up to the next power of two.
    pub fn try_with_cap_and_hasher(
        min_cap: usize,
        hasher: B,
    ) -> Result<HashSet<T, B>, CapacityTooSmall> {
        if min_cap < MIN_CAP {
            return Err(CapacityTooSmall {
                requested: min_cap,
                min: MIN_CAP,
            });
        }

        Ok(HashSet {
            slots: (0..min_cap.next_power_of_two()).map(|_| Slot::Empty).collect(),
            len: 0,
            hasher,
        })
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the (fixed) number of slots in the HashSet.
    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slots of the table in index order, showing where each element ended up.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    ///
    /// # Panics
    /// Panics if the set has no reachable slot for `item`. See [`HashSet::try_add`].
    pub fn add(&mut self, item: T) -> bool {
        self.try_add(item).throw()
    }

    /// Adds `item` to the set, returning true if it wasn't already present. Returns an [`Err`]
    /// rather than panicking if none of the slots probed for `item` are free. The set is left
    /// unchanged in that case.
    pub fn try_add(&mut self, item: T) -> Result<bool, CapacityExceeded> {
        match self.probe(&item) {
            Probe::Found(_) => Ok(false),
            Probe::Absent { vacant: Some(index) } => {
                trace!(slot = index, len = self.len, "storing element");
                self.slots[index] = Slot::Occupied(item);
                self.len += 1;
                Ok(true)
            },
            Probe::Absent { vacant: None } => {
                debug!(cap = self.cap(), len = self.len, "probe sequence exhausted");
                Err(CapacityExceeded { cap: self.cap() })
            },
        }
    }

    /// Returns true if the set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Returns a reference to the stored element that is equal to `item`.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(item) {
            Probe::Found(index) => self.slots[index].occupant(),
            Probe::Absent { .. } => None,
        }
    }

    /// Removes the element equal to `item`, returning true if there was one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(item).is_some()
    }

    /// Removes the element equal to `item` and returns it. Its slot becomes a tombstone.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(item) {
            Probe::Found(index) => {
                self.len -= 1;
                mem::replace(&mut self.slots[index], Slot::Tombstone).into_occupant()
            },
            Probe::Absent { .. } => None,
        }
    }

    /// Removes every element and tombstone, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.len = 0;
    }

    /// Returns an iterator over all elements in the HashSet, in slot order, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Returns the first index and the step of the probe sequence for `hashable`.
    pub(crate) fn probe_start<H: Hash + ?Sized>(&self, hashable: &H) -> (usize, usize) {
        // The capacity is never 0, it is at least MIN_CAP.
        let index = (self.hasher.hash_one(hashable) % self.cap() as u64) as usize;
        (index, index + 1)
    }

    /// Follows the probe sequence for `item` until it finds an equal element, reaches an empty
    /// slot or has probed as many slots as there are in the table. The first tombstone (or the
    /// empty slot) is reported as vacant for insertion.
    pub(crate) fn probe<Q>(&self, item: &Q) -> Probe
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (mut index, step) = self.probe_start(item);
        let mut vacant = None;

        for _ in 0..self.cap() {
            match &self.slots[index] {
                Slot::Occupied(existing) if Borrow::<Q>::borrow(existing) == item => {
                    return Probe::Found(index);
                },
                Slot::Occupied(_) => {},
                Slot::Tombstone => {
                    vacant.get_or_insert(index);
                },
                Slot::Empty => {
                    return Probe::Absent {
                        vacant: vacant.or(Some(index)),
                    };
                },
            }
            index = (index + step) % self.cap();
        }

        Probe::Absent { vacant }
    }
}

impl<T: Hash + Eq> Default for HashSet<T> {
    /// Creates an empty HashSet with capacity [`MIN_CAP`].
    fn default() -> Self {
        HashSet {
            slots: (0..MIN_CAP).map(|_| Slot::Empty).collect(),
            len: 0,
            hasher: RandomState::default(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Collection<T> for HashSet<T, B> {
    type AddError = CapacityExceeded;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn try_add(&mut self, item: T) -> Result<bool, Self::AddError> {
        HashSet::try_add(self, item)
    }

    fn remove(&mut self, item: &T) -> bool {
        HashSet::remove(self, item)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("slots", &self.slots)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
