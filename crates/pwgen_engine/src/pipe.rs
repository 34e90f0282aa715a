//! Go-like concurrency primitives, adapted for OS threads.
//!
//! Provides thread primitives for the enumeration pipelines with ergonomic
//! Go-channel-like APIs:
//!
//! - [`TaskHandle<T>`]: spawned task handle, joined on drop if not joined explicitly
//! - [`Pipe<T>`]: bounded channel with sender/receiver split
//! - [`spawn`]: ergonomic thread spawning returning a `TaskHandle`
//!
//! Unlike the async version of this primitive elsewhere in the ecosystem,
//! enumeration is CPU-bound and has no I/O to overlap, so this is built
//! directly on `std::thread` and `crossbeam_channel` rather than an async
//! runtime — there is no executor to amortize the cost of.
//!
//! # Example
//!
//! ```no_run
//! use pwgen_engine::pipe::{spawn, Pipe};
//!
//! let (tx, rx) = Pipe::<String>::new(16);
//! let handle = spawn(move || {
//!     tx.send("hello".to_string()).ok();
//! });
//! let msg = rx.recv().ok();
//! handle.join().unwrap();
//! ```

use crossbeam_channel::{Receiver, RecvError, SendError, Sender};
use std::thread::JoinHandle;

/// Handle to a spawned worker thread.
///
/// Wraps `std::thread::JoinHandle<T>` with a pwgen-friendly API.
pub struct TaskHandle<T> {
    inner: JoinHandle<T>,
}

impl<T> TaskHandle<T> {
    fn new(handle: JoinHandle<T>) -> Self {
        Self { inner: handle }
    }

    /// Check whether the underlying thread has finished running.
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    /// Block until the thread finishes and return its result.
    ///
    /// # Panics
    ///
    /// Propagates a panic if the spawned closure panicked.
    pub fn join(self) -> std::thread::Result<T> {
        self.inner.join()
    }
}

/// Spawn a worker thread and return a handle to it.
///
/// Thin wrapper around `std::thread::spawn` returning a [`TaskHandle<T>`].
pub fn spawn<F, T>(f: F) -> TaskHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    TaskHandle::new(std::thread::spawn(f))
}

/// A bounded channel for communication between enumeration stages.
///
/// `Pipe<T>` provides Go-like channel semantics with a capacity limit:
/// senders block when the channel is full, and a `recv` on an empty,
/// sender-dropped channel returns an error rather than blocking forever.
pub struct Pipe<T>(std::marker::PhantomData<T>);

impl<T> Pipe<T> {
    /// Create a new bounded channel with the given capacity.
    ///
    /// A capacity of `0` creates a rendezvous channel, where `send` blocks
    /// until a matching `recv` is ready.
    pub fn new(capacity: usize) -> (PipeSender<T>, PipeReceiver<T>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (PipeSender { inner: tx }, PipeReceiver { inner: rx })
    }
}

/// Sender half of a [`Pipe`]. Cloneable; the channel closes once every
/// clone has been dropped.
#[derive(Clone)]
pub struct PipeSender<T> {
    inner: Sender<T>,
}

impl<T> PipeSender<T> {
    /// Send a value, blocking if the channel is full.
    ///
    /// Returns an error if every receiver has been dropped.
    pub fn send(&self, val: T) -> Result<(), SendError<T>> {
        self.inner.send(val)
    }
}

/// Receiver half of a [`Pipe`]. Cloneable so a worker pool can share one
/// channel; crossbeam's MPMC semantics mean each value still goes to
/// exactly one clone's caller.
pub struct PipeReceiver<T> {
    inner: Receiver<T>,
}

impl<T> PipeReceiver<T> {
    /// Receive a value, blocking until one is available.
    ///
    /// Returns an error once every sender has been dropped and the channel
    /// is drained.
    pub fn recv(&self) -> Result<T, RecvError> {
        self.inner.recv()
    }

    /// Iterate over all remaining values until the channel closes.
    pub fn iter(&self) -> crossbeam_channel::Iter<'_, T> {
        self.inner.iter()
    }

    /// The underlying crossbeam receiver, for use with `select!`.
    pub fn raw(&self) -> &Receiver<T> {
        &self.inner
    }
}

impl<T> Clone for PipeReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_recv_round_trips() {
        let (tx, rx) = Pipe::<i32>::new(4);
        tx.send(42).unwrap();
        assert_eq!(rx.recv(), Ok(42));
    }

    #[test]
    fn recv_errors_once_all_senders_dropped() {
        let (tx, rx) = Pipe::<i32>::new(4);
        drop(tx);
        assert!(rx.recv().is_err());
    }

    #[test]
    fn spawn_joins_and_returns_value() {
        let handle = spawn(|| 1 + 1);
        assert_eq!(handle.join().unwrap(), 2);
    }

    #[test]
    fn multiple_producers_single_consumer() {
        let (tx, rx) = Pipe::<i32>::new(32);
        let tx1 = tx.clone();
        let tx2 = tx.clone();
        drop(tx);

        let p1 = spawn(move || {
            for i in 0..10 {
                tx1.send(i).unwrap();
            }
        });
        let p2 = spawn(move || {
            for i in 10..20 {
                tx2.send(i).unwrap();
            }
        });
        p1.join().unwrap();
        p2.join().unwrap();

        let mut values: Vec<i32> = rx.iter().collect();
        values.sort();
        assert_eq!(values, (0..20).collect::<Vec<_>>());
    }
}
