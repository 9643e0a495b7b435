//! Per-kind result sub-union shared by every screen.

use super::error::MviError;

/// Outcome of dispatching one action occurrence.
///
/// For every occurrence exactly one `Pending` is emitted before any work
/// starts, followed by exactly one of `Success` or `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The side effect has started.
    Pending,
    /// The side effect completed with a value.
    Success(T),
    /// The side effect failed.
    Failure(MviError),
}

impl<T> From<Result<T, MviError>> for Outcome<T> {
    fn from(result: Result<T, MviError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
