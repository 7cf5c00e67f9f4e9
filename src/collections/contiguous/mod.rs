//! Fixed-capacity collections stored in a single contiguous allocation.
//!
//! [`SortedBag`] and [`SortedSet`] keep their elements ordered and find them with a binary search,
//! while [`UnsortedSet`] only needs equality and searches linearly. All of them are created with a
//! fixed capacity ([`DEFAULT_CAP`] unless stated otherwise) and report [`CapacityExceeded`] rather
//! than growing. Each dereferences to a slice of its elements.

mod sorted_bag;
mod sorted_set;
mod tests;
mod unsorted_set;

pub(crate) use crate::util::fixed::FixedVec;
pub use sorted_bag::SortedBag;
pub use sorted_set::SortedSet;
pub use unsorted_set::UnsortedSet;

#[doc(inline)]
pub use crate::util::error::CapacityExceeded;

/// The capacity used by the `new` constructors of this module's collections.
pub const DEFAULT_CAP: usize = 100;
