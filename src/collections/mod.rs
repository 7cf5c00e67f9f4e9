//! The collection types of this crate, one module per family.
//!
//! # Purpose
//! Each structure here is a small, readable rendition of a classic textbook data structure. They
//! favour observable internals (tree shapes, slot layouts, heap order) over raw performance, which
//! makes their behaviour easy to inspect and test.
//!
//! # Method
//! Fallible operations come in pairs: a `try_*` method returning a [`Result`] and a method of the
//! same name without the prefix that panics on the same error. The array-backed collections
//! implement [`Deref<Target = [T]>`](std::ops::Deref), which saves reimplementing slice methods.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "heap")]
pub mod heap;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
