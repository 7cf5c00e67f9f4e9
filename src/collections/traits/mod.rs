//! Traits describing the behaviour shared by this crate's collections.

pub mod collection;
pub mod set;

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use set::Set;
