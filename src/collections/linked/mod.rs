//! Linked list types. [`SinglyLinkedList`] owns its nodes through boxes and only links forward,
//! while [`DoublyLinkedList`] links both ways through raw pointers. Each has a `CursorMut` for
//! traversal that modifies the list along the way.

pub mod doubly;
pub mod singly;

#[doc(inline)]
pub use doubly::DoublyLinkedList;
#[doc(inline)]
pub use singly::SinglyLinkedList;
