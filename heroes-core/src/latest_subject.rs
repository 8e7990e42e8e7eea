// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, conflating subject used as the query event source.
//!
//! A [`LatestSubject`] hands each pushed [`StreamItem<T>`] to all active
//! subscribers. Unlike a channel it never queues: every subscriber holds a
//! single slot, and an item that has not been consumed yet is overwritten by
//! the next one. A producer that pushes faster than the pipeline polls (one
//! event per keystroke) therefore retains at most one item per subscriber.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers only see items sent after subscribing.
//! - **Conflating**: bounded to one pending item per subscriber.
//! - **Cheap to clone**: all clones share the same state.
//! - **Error/close**: [`error`](LatestSubject::error) delivers the error and closes.
//!
//! ## Example
//!
//! ```
//! use heroes_core::{LatestSubject, StreamItem};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = LatestSubject::<String>::new();
//! let mut terms = subject.subscribe().unwrap();
//!
//! subject.next("b".to_string()).unwrap();
//! subject.next("ba".to_string()).unwrap(); // overwrites "b"
//! subject.close();
//!
//! assert_eq!(terms.next().await, Some(StreamItem::Value("ba".to_string())));
//! assert_eq!(terms.next().await, None);
//! # }
//! ```

use crate::{HeroError, StreamItem, SubjectError};
use futures::task::AtomicWaker;
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

struct Slot<T> {
    pending: Mutex<Option<StreamItem<T>>>,
    closed: AtomicBool,
    waker: AtomicWaker,
}

impl<T> Slot<T> {
    fn new() -> Self {
        Self {
            pending: Mutex::new(None),
            closed: AtomicBool::new(false),
            waker: AtomicWaker::new(),
        }
    }

    fn put(&self, item: StreamItem<T>) {
        *self.pending.lock() = Some(item);
        self.waker.wake();
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
        self.waker.wake();
    }

    fn try_take(&self) -> Poll<Option<StreamItem<T>>> {
        if let Some(item) = self.pending.lock().take() {
            return Poll::Ready(Some(item));
        }
        if self.closed.load(Ordering::Acquire) {
            return Poll::Ready(None);
        }
        Poll::Pending
    }
}

struct SubjectState<T> {
    closed: bool,
    slots: Vec<Arc<Slot<T>>>,
}

/// Subscription returned by [`LatestSubject::subscribe`].
///
/// Ends once the subject is closed and the last pending item was taken.
pub struct LatestStream<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Stream for LatestStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Poll::Ready(item) = self.slot.try_take() {
            return Poll::Ready(item);
        }

        self.slot.waker.register(cx.waker());

        // An item may have landed between the first check and registration
        self.slot.try_take()
    }
}

/// A hot subject that keeps only the latest unconsumed item per subscriber.
///
/// See the [module documentation](self) for details.
pub struct LatestSubject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone> LatestSubject<T> {
    /// Creates an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                slots: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject. Late subscribers do not receive earlier items.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<LatestStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let slot = Arc::new(Slot::new());
        state.slots.push(Arc::clone(&slot));
        Ok(LatestStream { slot })
    }

    /// Hand an item to every active subscriber, replacing any item it has not
    /// consumed yet. Dropped subscribers are pruned here.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T>) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state.slots.retain(|slot| Arc::strong_count(slot) > 1);
        for slot in &state.slots {
            slot.put(item.clone());
        }
        Ok(())
    }

    /// Convenience wrapper around `send(StreamItem::Value(value))`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send an error to all subscribers and close the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, err: HeroError) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.close();
        result
    }

    /// Closes the subject. Idempotent.
    ///
    /// Subscribers still receive an item that was pending at close time, then end.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        for slot in state.slots.drain(..) {
            slot.close();
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers. Dropped subscribers are counted until the next `send()`.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().slots.len()
    }
}

impl<T: Clone> Default for LatestSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LatestSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
