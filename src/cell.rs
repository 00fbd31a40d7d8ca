//! The single-assignment cell every promise in this crate is built on.
//!
use crate::{Error, Outcome};
use log::{error, trace};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    task::{Poll, Waker},
};

/// A value container that starts empty, is completed exactly once, and can be
/// polled any number of times from any thread.
///
/// Only the most recently registered waker is kept. Completing the cell wakes
/// it once, after the lock has been released, so a waker that polls this same
/// cell from inside `wake` cannot deadlock.
///
/// # Examples
///
/// ```
/// use future_cell::{FutureCell, Outcome};
/// use futures::task::noop_waker_ref;
///
/// let cell = FutureCell::<u32, String>::new();
/// assert!(cell.poll(noop_waker_ref()).is_pending());
///
/// cell.complete_with_value(7);
/// let outcome = cell.outcome().unwrap();
/// assert_eq!(*outcome, Outcome::Success(7));
/// ```
pub struct FutureCell<T, E> {
    inner: Mutex<Inner<T, E>>,
}

struct Inner<T, E> {
    outcome: Option<Arc<Outcome<T, E>>>,
    // Only set while `outcome` is `None`.
    waker: Option<Waker>,
}

impl<T, E> FutureCell<T, E> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                outcome: None,
                waker: None,
            }),
        }
    }

    /// Returns the outcome if the cell is completed, otherwise registers
    /// `waker` in place of any earlier one and returns `Poll::Pending`.
    ///
    /// A completed cell hands out the same `Arc` on every call.
    pub fn poll(&self, waker: &Waker) -> Poll<Arc<Outcome<T, E>>> {
        let mut inner = self.lock();
        if let Some(outcome) = &inner.outcome {
            return Poll::Ready(outcome.clone());
        }
        match &inner.waker {
            Some(registered) if registered.will_wake(waker) => {}
            _ => {
                trace!("future cell: registering waker");
                inner.waker = Some(waker.clone());
            }
        }
        Poll::Pending
    }

    /// The stored outcome, without registering for a wake-up.
    pub fn outcome(&self) -> Option<Arc<Outcome<T, E>>> {
        self.lock().outcome.clone()
    }

    pub fn is_completed(&self) -> bool {
        self.lock().outcome.is_some()
    }

    /// Stores `outcome` and wakes the pending poller, if any.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already completed. The first outcome is kept.
    pub fn complete(&self, outcome: Outcome<T, E>) {
        if let Err(err) = self.try_complete(outcome) {
            error!("future cell: completed twice");
            panic!("{}", err);
        }
    }

    pub fn complete_with_value(&self, value: T) {
        self.complete(Outcome::Success(value))
    }

    pub fn complete_with_failure(&self, cause: E) {
        self.complete(Outcome::Failure(cause))
    }

    /// Like [`complete`](Self::complete), but reports a second completion as
    /// [`Error::AlreadyCompleted`] instead of panicking.
    pub fn try_complete(&self, outcome: Outcome<T, E>) -> Result<(), Error> {
        let waker = {
            let mut inner = self.lock();
            if inner.outcome.is_some() {
                return Err(Error::AlreadyCompleted);
            }
            inner.outcome = Some(Arc::new(outcome));
            inner.waker.take()
        };
        match waker {
            Some(waker) => {
                trace!("future cell: completed, waking poller");
                waker.wake();
            }
            None => trace!("future cell: completed with no pending poller"),
        }
        Ok(())
    }

    pub fn try_complete_with_value(&self, value: T) -> Result<(), Error> {
        self.try_complete(Outcome::Success(value))
    }

    pub fn try_complete_with_failure(&self, cause: E) -> Result<(), Error> {
        self.try_complete(Outcome::Failure(cause))
    }

    // User code never runs under the lock, so a poisoned lock still guards a
    // consistent pair.
    fn lock(&self) -> MutexGuard<'_, Inner<T, E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, E> Default for FutureCell<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for FutureCell<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("FutureCell")
            .field("outcome", &inner.outcome)
            .field("waiting", &inner.waker.is_some())
            .finish()
    }
}
