mod cursor;
mod iter;
mod singly_linked_list;
mod tests;

pub use cursor::*;
pub use iter::*;
pub use singly_linked_list::*;
pub(crate) use singly_linked_list::{Link, Node};
