// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use heroes_core::StreamItem;
use pin_project::pin_project;

/// Extension trait providing the `debounce` operator for streams.
///
/// This trait allows any stream of `StreamItem<T>` to debounce emissions by a
/// specified duration.
pub trait DebounceExt<T, TM>: Stream<Item = StreamItem<T>> + Sized
where
    TM: Timer,
{
    /// Debounces the stream by the specified duration.
    ///
    /// The debounce operator waits for a pause in the input stream of at least
    /// the given duration before emitting the latest value. If a new value
    /// arrives before the duration elapses, the timer is reset and only the
    /// newest value is eventually emitted.
    ///
    /// This implements **trailing debounce** semantics (Rx standard):
    /// - When a value arrives, start/restart the timer
    /// - If no new value arrives before the timer expires, emit the latest value
    /// - If a new value arrives, discard the pending value and restart the timer
    /// - When the stream ends, emit any pending value immediately
    ///
    /// Errors pass through immediately without debounce, to ensure timely
    /// error propagation.
    ///
    /// At most one value is retained, however fast the source emits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heroes_stream_time::{DebounceExt, TokioTimer};
    /// use heroes_core::StreamItem;
    /// use futures::stream::StreamExt;
    /// use std::time::Duration;
    /// use futures::channel::mpsc;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (tx, rx) = mpsc::unbounded();
    /// let source = rx.map(StreamItem::Value);
    ///
    /// let mut debounced = source.debounce_with_timer(Duration::from_millis(10), TokioTimer);
    ///
    /// // "b" is superseded by "ba" before the quiet period elapses
    /// tx.unbounded_send("b").unwrap();
    /// tx.unbounded_send("ba").unwrap();
    ///
    /// assert_eq!(debounced.next().await, Some(StreamItem::Value("ba")));
    /// # }
    /// ```
    fn debounce_with_timer(
        self,
        duration: Duration,
        timer: TM,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send,
        T: Send;
}

impl<S, T, TM> DebounceExt<T, TM> for S
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    fn debounce_with_timer(
        self,
        duration: Duration,
        timer: TM,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send,
        T: Send,
    {
        Box::pin(DebounceStream {
            stream: self,
            duration,
            timer,
            pending_value: None,
            sleep: None,
            stream_ended: false,
        })
    }
}

#[pin_project]
struct DebounceStream<S: Stream, TM: Timer> {
    #[pin]
    stream: S,
    duration: Duration,
    timer: TM,
    pending_value: Option<S::Item>,
    #[pin]
    sleep: Option<TM::Sleep>,
    stream_ended: bool,
}

impl<S, T, TM> Stream for DebounceStream<S, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            // Source ended: flush the pending value, then end
            if *this.stream_ended {
                return Poll::Ready(this.pending_value.take());
            }

            if this.pending_value.is_some() {
                if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
                    if sleep.poll(cx).is_ready() {
                        this.sleep.set(None);
                        return Poll::Ready(this.pending_value.take());
                    }
                }
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    // Restart the quiet period for the newest value
                    this.sleep
                        .set(Some(this.timer.sleep_future(*this.duration)));
                    *this.pending_value = Some(StreamItem::Value(value));

                    // The timer might be zero-length
                    continue;
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    *this.pending_value = None;
                    this.sleep.set(None);
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    *this.stream_ended = true;
                    continue;
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

/// Extension trait for debouncing with the default timer of the active runtime.
pub trait DebounceWithDefaultTimerExt<T>: Sized {
    /// Debounces the stream using [`TokioTimer`](crate::TokioTimer).
    ///
    /// ```rust,no_run
    /// use heroes_stream_time::prelude::*;
    /// use heroes_core::StreamItem;
    /// use std::time::Duration;
    ///
    /// # async fn example() {
    /// let source = futures::stream::empty::<StreamItem<String>>();
    /// let debounced = source.debounce(Duration::from_millis(300));
    /// # }
    /// ```
    fn debounce(self, duration: Duration) -> impl Stream<Item = StreamItem<T>> + Send + Unpin;
}

#[cfg(feature = "runtime-tokio")]
impl<S, T> DebounceWithDefaultTimerExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send,
    T: Send,
{
    fn debounce(self, duration: Duration) -> impl Stream<Item = StreamItem<T>> + Send + Unpin {
        DebounceExt::debounce_with_timer(self, duration, crate::TokioTimer)
    }
}
