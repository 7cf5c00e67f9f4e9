use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;

/// A single slot in the table of a [`HashSet`](super::HashSet).
///
/// Tombstones are left behind by removals. A probe for an element continues past them (the
/// element may have been placed further along before the removal happened), but an insertion may
/// reuse them.
#[derive(Clone, PartialEq, Eq, IsVariant)]
pub enum Slot<T> {
    /// Never used since the set was created or cleared. Ends every probe.
    Empty,
    /// Previously occupied, then removed.
    Tombstone,
    Occupied(T),
}

impl<T> Slot<T> {
    /// Returns the element in this slot, if it is occupied.
    pub const fn occupant(&self) -> Option<&T> {
        match self {
            Slot::Occupied(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_occupant(self) -> Option<T> {
        match self {
            Slot::Occupied(item) => Some(item),
            _ => None,
        }
    }
}

impl<T: Debug> Debug for Slot<T> {
    /// Formats empty slots as `-` and tombstones as `~`, so that a whole table stays readable.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Empty => write!(f, "-"),
            Slot::Tombstone => write!(f, "~"),
            Slot::Occupied(item) => item.fmt(f),
        }
    }
}
