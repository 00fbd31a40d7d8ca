//! A single-assignment, thread-safe future cell.
//!
//! A [`FutureCell`] starts empty, is completed exactly once with an
//! [`Outcome`], and is observed by pollers that register a waker while the
//! outcome is not ready yet. [`pair`] splits a cell into a [`Promise`]
//! producer and an awaitable consumer.
pub mod cell;
pub mod error;
pub mod outcome;
pub mod pair;

pub use cell::FutureCell;
pub use error::{Error, FutureError};
pub use outcome::Outcome;

/// The producing side of a promise.
pub trait Promise {
    type Output;
    type Error;
    type Waiter;

    fn resolve(self, value: Self::Output);
    fn reject(self, cause: Self::Error);

    /// Creates the producer together with the value it completes.
    fn new() -> (Self, Self::Waiter)
    where
        Self: Sized;
}
