// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use heroes_core::StreamItem;
use pin_project::pin_project;

/// Extension trait providing the `switch_map` operator for streams.
pub trait SwitchMapExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Maps each value onto a future and emits the output of the most recent one.
    ///
    /// Only one future is in flight at a time. When a new value arrives while a
    /// future is still pending, that future is dropped, which cancels whatever
    /// work it was doing, and the new value's future takes its place. A
    /// superseded future never emits.
    ///
    /// # Behavior
    ///
    /// - Values are mapped in arrival order; only the latest mapping can emit
    /// - Errors from the source pass through immediately and leave the
    ///   in-flight future untouched
    /// - When the source ends, the in-flight future still completes and
    ///   emits, then the stream ends
    ///
    /// # Example
    ///
    /// ```rust
    /// use heroes_core::StreamItem;
    /// use heroes_stream::SwitchMapExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// // Both terms are ready at once, so "bat" is superseded before it resolves
    /// let terms = stream::iter(["bat", "batman"].map(StreamItem::Value));
    ///
    /// let results: Vec<_> = terms
    ///     .switch_map(|term| async move { term.to_uppercase() })
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(results, vec![StreamItem::Value("BATMAN".to_string())]);
    /// # }
    /// ```
    fn switch_map<U, F, Fut>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send + Unpin
    where
        Self: Send,
        F: FnMut(T) -> Fut + Send,
        Fut: Future<Output = U> + Send;
}

impl<S, T> SwitchMapExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn switch_map<U, F, Fut>(self, f: F) -> impl Stream<Item = StreamItem<U>> + Send + Unpin
    where
        Self: Send,
        F: FnMut(T) -> Fut + Send,
        Fut: Future<Output = U> + Send,
    {
        Box::pin(SwitchMapStream {
            stream: self,
            f,
            in_flight: None,
            stream_ended: false,
        })
    }
}

#[pin_project]
struct SwitchMapStream<S, F, Fut> {
    #[pin]
    stream: S,
    f: F,
    in_flight: Option<Pin<Box<Fut>>>,
    stream_ended: bool,
}

impl<S, T, U, F, Fut> Stream for SwitchMapStream<S, F, Fut>
where
    S: Stream<Item = StreamItem<T>>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = U>,
{
    type Item = StreamItem<U>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        // Drain the source first so the newest value wins
        while !*this.stream_ended {
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if this.in_flight.is_some() {
                        tracing::debug!("switch_map: superseding in-flight future");
                    }
                    *this.in_flight = Some(Box::pin((this.f)(value)));
                }
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => *this.stream_ended = true,
                Poll::Pending => break,
            }
        }

        if let Some(future) = this.in_flight.as_mut() {
            return match future.as_mut().poll(cx) {
                Poll::Ready(output) => {
                    *this.in_flight = None;
                    Poll::Ready(Some(StreamItem::Value(output)))
                }
                Poll::Pending => Poll::Pending,
            };
        }

        if *this.stream_ended {
            Poll::Ready(None)
        } else {
            Poll::Pending
        }
    }
}
