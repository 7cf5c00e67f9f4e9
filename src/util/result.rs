use std::error::Error;

use tracing::debug;

/// Turns the typed errors of `try_*` methods into panics. Every panicking method in this crate is
/// a thin wrapper that calls its `try_*` counterpart and then [`throw`](ResultExtension::throw).
pub(crate) trait ResultExtension<T> {
    /// Returns the [`Ok`] value, like [`Result::unwrap`], but panics with the error's own message
    /// rather than its debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, "collection operation failed, panicking");
                panic!("{error}")
            },
        }
    }
}
