use std::error::Error;

/// Bridges the `try_` methods and their panicking counterparts.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Unwraps the [`Result`] like [`Result::unwrap`], but panics with the error's own display
    /// message rather than its [`Debug`](std::fmt::Debug) rendering.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
