use thiserror::Error;

/// Errors raised by the cell itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A second completion was attempted. This is a bug in the producer.
    #[error("future cell was already completed")]
    AlreadyCompleted,
}

/// Raised when the value of a failed [`Outcome`](crate::Outcome) is extracted.
///
/// The original failure is kept as the [`source`](std::error::Error::source)
/// so the causal chain survives the asynchronous hop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("future completed with a failure")]
pub struct FutureError<E> {
    #[source]
    cause: E,
}

impl<E> FutureError<E> {
    pub(crate) fn new(cause: E) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &E {
        &self.cause
    }

    pub fn into_cause(self) -> E {
        self.cause
    }
}
