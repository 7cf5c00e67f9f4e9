pub mod error;
#[cfg(any(feature = "contiguous", feature = "heap"))]
pub(crate) mod fixed;
#[cfg(test)]
pub mod hash;
#[cfg(test)]
pub mod panic;
pub mod result;
