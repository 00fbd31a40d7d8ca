use crate::error::FutureError;

/// The write-once result stored in a [`FutureCell`](crate::FutureCell).
///
/// A success carrying no meaningful payload is `Outcome<(), E>` (or
/// `Outcome<Option<T>, E>` holding `None`); it is never confused with a cell
/// that has not completed yet, which polls as `Poll::Pending`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The failure cause, if any. Does not raise.
    pub fn failure(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(cause) => Some(cause),
        }
    }

    pub fn as_result(&self) -> Result<&T, &E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(cause),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(cause),
        }
    }

    /// Extracts the value, wrapping a failure cause in a [`FutureError`].
    ///
    /// Outcomes are shared between pollers, so the cause is cloned into the
    /// error on every extraction.
    pub fn value(&self) -> Result<&T, FutureError<E>>
    where
        E: Clone,
    {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(cause) => Err(FutureError::new(cause.clone())),
        }
    }

    pub fn into_value(self) -> Result<T, FutureError<E>> {
        self.into_result().map_err(FutureError::new)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(cause) => Outcome::Failure(cause),
        }
    }
}
