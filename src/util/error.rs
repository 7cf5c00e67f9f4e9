//! Error types shared by the collections in this crate.
//!
//! Each error is its own (mostly zero-sized or tiny) struct so that methods can state exactly what
//! can go wrong. [`CollectionError`] groups them for callers that don't care which one occurred.

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the valid range for a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of bounds for collection with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// A fixed-capacity collection was asked to construct itself with fewer slots than it supports.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("requested capacity {requested} is below the minimum of {min}")]
pub struct CapacityTooSmall {
    pub requested: usize,
    pub min: usize,
}

/// A fixed-capacity collection has no room left for another element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection with capacity {cap} is full")]
pub struct CapacityExceeded {
    pub cap: usize,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection is empty")]
pub struct EmptyCollection;

/// A cursor was asked to modify the element it last returned, but there is no such element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("cursor has no current element")]
pub struct NoCurrentElement;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    IndexOutOfBounds(IndexOutOfBounds),
    CapacityTooSmall(CapacityTooSmall),
    CapacityExceeded(CapacityExceeded),
    EmptyCollection(EmptyCollection),
    NoCurrentElement(NoCurrentElement),
}
