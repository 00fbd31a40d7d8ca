use crate::{FutureCell, Outcome, Promise};
use log::warn;
use std::sync::Arc;
use std::{future::Future, pin::Pin, task::{Context, Poll}};

/// The completing half of a [`FutureCell`]. Resolving or rejecting consumes
/// it, so it can complete its cell at most once.
///
/// # Examples
///
/// ```
/// use future_cell::{Outcome, Promise, pair::Producer};
/// use futures::executor::block_on;
/// use std::thread;
/// let (promise, consumer) = Producer::<String, ()>::new();
///
/// let task1 = thread::spawn(move || block_on(async {
///     consumer.await
/// }));
/// promise.resolve("Hi".into());
/// let outcome = task1.join().expect("The task1 thread has panicked.");
/// assert_eq!(*outcome, Outcome::Success("Hi".to_owned()));
/// ```
#[derive(Debug)]
pub struct Producer<T, E> {
    cell: Arc<FutureCell<T, E>>,
}

/// The polling half of a [`FutureCell`]. Awaiting it yields the shared
/// outcome.
///
/// The cell only remembers one waker, so the consumer is not `Clone`. Extra
/// pollers go through [`Consumer::cell`].
#[derive(Debug)]
pub struct Consumer<T, E> {
    cell: Arc<FutureCell<T, E>>,
}

impl<T, E> Promise for Producer<T, E> {
    type Output = T;
    type Error = E;
    type Waiter = Consumer<T, E>;

    /// # Examples
    ///
    /// ```
    /// use future_cell::{Promise, pair::Producer};
    /// use futures::executor::block_on;
    /// use std::thread;
    /// let (op, op_a) = Producer::<String, ()>::new();
    /// let task1 = thread::spawn(move || block_on(async {
    ///     op_a.await.value().cloned()
    /// }));
    /// let task2 = thread::spawn(move || op.resolve(String::from("🍓")));
    /// task2.join().expect("The task2 thread has panicked");
    /// assert_eq!(task1.join().unwrap(), Ok(String::from("🍓")));
    /// ```
    fn resolve(self, value: T) {
        self.cell.complete_with_value(value)
    }

    /// # Examples
    ///
    /// ```
    /// use future_cell::{Promise, pair::Producer};
    /// use std::thread;
    /// let (op, op_a) = Producer::<(), String>::new();
    /// let task = thread::spawn(move || op.reject(String::from("💥")));
    /// task.join().expect("The task thread has panicked");
    /// let err = op_a.wait().value().unwrap_err();
    /// assert_eq!(err.cause(), "💥");
    /// ```
    fn reject(self, cause: E) {
        self.cell.complete_with_failure(cause)
    }

    fn new() -> (Self, Self::Waiter) {
        let cell = Arc::new(FutureCell::new());
        (Self { cell: cell.clone() }, Consumer { cell })
    }
}

impl<T, E> Drop for Producer<T, E> {
    /// No cancellation: an unresolved consumer just stays pending.
    fn drop(&mut self) {
        if !self.cell.is_completed() {
            warn!("promise producer dropped without completing, consumer will never be woken");
        }
    }
}

impl<T, E> Consumer<T, E> {
    /// The shared cell, for pollers besides this consumer.
    pub fn cell(&self) -> &Arc<FutureCell<T, E>> {
        &self.cell
    }

    /// Blocks the current thread until the producer completes.
    pub fn wait(self) -> Arc<Outcome<T, E>> {
        futures::executor::block_on(self)
    }
}

impl<T, E> Future for Consumer<T, E> {
    type Output = Arc<Outcome<T, E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.cell.poll(cx.waker())
    }
}

#[cfg(test)]
mod tests {
use futures::executor::block_on;
use futures::task::{noop_waker_ref, waker};
use std::sync::Arc;
use std::{future::Future, pin::Pin, task::Context, thread};
use super::Producer;
use crate::cell::tests::CountingWaker;
use crate::{Outcome, Promise};

#[test]
fn test_promise_resolve() {
    let (op, op_a) = Producer::<String, ()>::new();
    let task1 = thread::spawn(move || {
        block_on(async {
            op_a.await
        })
    });
    let task2 = thread::spawn(move || {
        op.resolve(String::from("🍓"));
    });
    task2.join().expect("The task2 thread has panicked");
    let outcome = task1.join().expect("The task1 thread has panicked");
    assert_eq!(*outcome, Outcome::Success(String::from("🍓")));
}

#[test]
fn test_promise_reject() {
    let (a, b) = Producer::<String, String>::new();
    let task1 = thread::spawn(|| b.wait());
    let task2 = thread::spawn(|| a.reject("reject!!".into()));
    task2.join().expect("The task2 thread has panicked");
    let outcome = task1.join().expect("The task1 thread has panicked");
    assert_eq!(outcome.value().unwrap_err().into_cause(), "reject!!");
}

#[test]
fn test_promise_no_consumer() {
    let (op, op_a) = Producer::<String, ()>::new();
    drop(op_a);
    op.resolve(String::from("🍓"));
}

#[test]
fn test_promise_unresolved_stays_pending() {
    let (op, mut op_a) = Producer::<String, ()>::new();
    let counter = Arc::new(CountingWaker::default());
    let w = waker(counter.clone());
    let mut cx = Context::from_waker(&w);

    assert!(Pin::new(&mut op_a).poll(&mut cx).is_pending());
    drop(op);
    assert!(Pin::new(&mut op_a).poll(&mut cx).is_pending());
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_consumer_shares_cell_with_other_pollers() {
    let (op, op_a) = Producer::<u8, ()>::new();
    let cell = op_a.cell().clone();
    assert!(cell.poll(noop_waker_ref()).is_pending());

    op.resolve(3);
    let outcome = op_a.wait();
    assert!(Arc::ptr_eq(&outcome, &cell.outcome().unwrap()));
}
}
