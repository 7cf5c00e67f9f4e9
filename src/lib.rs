//! This crate is a collection of classic data structures, each written from scratch in plain Rust.
//!
//! # Purpose
//! The structures here are the ones found in most algorithms and data structures courses: a
//! self-balancing binary search tree, an open-addressing hash set, fixed-capacity array
//! collections, singly and doubly linked lists and a binary heap. They aren't meant to replace
//! [`std::collections`], but to show how each structure works while still being pleasant to use.
//!
//! The two centrepieces are [`AvlTree`](collections::binary_tree::AvlTree) and
//! [`HashSet`](collections::hash::HashSet). Both expose their internals for inspection: the tree
//! hands out read-only [`Node`](collections::binary_tree::Node)s with their heights and balance
//! factors, and the hash set shows which [`Slot`](collections::hash::set::Slot) each element
//! landed in.
//!
//! # Error Handling
//! When an operation can fail, it is available in two forms. The `try_*` form returns a
//! [`Result`] with a strongly typed error from [`error`], while the plain form panics with that
//! error's message. Looking up something that isn't there is never an error: those methods
//! return [`Option`] or `bool` instead.
//!
//! Nothing fails half way. An operation that returns an error leaves its collection unchanged.
//!
//! # Logging
//! Structural events, such as tree rotations and rejected insertions into full collections, are
//! reported through [`tracing`] at the `trace` and `debug` levels. The crate never installs a
//! subscriber itself.
//!
//! # Features
//! Each family of collections sits behind a Cargo feature (`binary-tree`, `contiguous`, `hash`,
//! `heap`, `linked` and `traits`), all of which are enabled by the default `collections-all`
//! feature.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

pub use util::error;

#[cfg(all(test, feature = "collections-all"))]
mod proptests;
