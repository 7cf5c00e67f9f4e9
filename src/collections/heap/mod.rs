//! A fixed-capacity priority queue ([`Heap`]) and an in-place [`heap_sort`] for slices.

mod heap;
mod sort;
mod tests;

pub use heap::Heap;
pub use sort::{heap_sort, heap_sort_by};

#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, EmptyCollection, IndexOutOfBounds};
