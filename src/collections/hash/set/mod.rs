//! A module containing [`HashSet`] and associated types.
//!
//! [`HashSet`] stores its elements directly in a table of [`Slot`]s and never resizes, which makes
//! the behaviour of its probing observable: [`HashSet::slots`] shows where each element landed and
//! a crowded table reports [`CapacityExceeded`] instead of growing.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod slot;

pub use hash_set::*;
pub use iter::*;
pub use slot::*;

#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, CapacityTooSmall};
