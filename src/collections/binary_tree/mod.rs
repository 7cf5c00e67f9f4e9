//! A module containing [`AvlTree`], a self-balancing binary search tree, and associated types.
//!
//! The tree doesn't use parent pointers. Every recursive operation takes ownership of the subtree
//! it works on and hands back the (possibly rotated) root to its caller, so each node is owned by
//! exactly one link at all times.

mod iter;
mod node;
mod tree;

pub use iter::*;
pub(crate) use node::Branch;
pub use node::Node;
pub use tree::*;
