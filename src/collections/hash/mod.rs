//! Hash-based collection types.

pub mod set;

#[doc(inline)]
pub use set::{HashSet, MIN_CAP};
