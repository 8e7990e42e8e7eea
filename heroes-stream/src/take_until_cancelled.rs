// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use heroes_core::{CancellationToken, CancelledOwned, StreamItem};
use pin_project::pin_project;

/// Extension trait providing the `take_until_cancelled` operator for streams.
pub trait TakeUntilCancelledExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Forwards items until `token` is cancelled, then ends.
    ///
    /// Cancellation is checked before the source on every poll, so nothing is
    /// emitted once the token fires, even if the source has items ready. The
    /// source is dropped at that point, releasing any timer or pending request
    /// it holds.
    ///
    /// ```rust
    /// use heroes_core::{CancellationToken, StreamItem};
    /// use heroes_stream::TakeUntilCancelledExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let token = CancellationToken::new();
    /// let mut items = stream::iter([StreamItem::Value(1)]).take_until_cancelled(token.clone());
    ///
    /// token.cancel();
    /// assert_eq!(items.next().await, None);
    /// # }
    /// ```
    fn take_until_cancelled(
        self,
        token: CancellationToken,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send;
}

impl<S, T> TakeUntilCancelledExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn take_until_cancelled(
        self,
        token: CancellationToken,
    ) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send,
    {
        Box::pin(TakeUntilCancelledStream {
            stream: Some(self),
            cancelled: token.cancelled_owned(),
        })
    }
}

#[pin_project]
struct TakeUntilCancelledStream<S> {
    #[pin]
    stream: Option<S>,
    cancelled: CancelledOwned,
}

impl<S, T> Stream for TakeUntilCancelledStream<S>
where
    S: Stream<Item = StreamItem<T>>,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if this.stream.is_none() {
            return Poll::Ready(None);
        }

        if Pin::new(this.cancelled).poll(cx).is_ready() {
            tracing::debug!("take_until_cancelled: token fired, dropping source");
            this.stream.set(None);
            return Poll::Ready(None);
        }

        let Some(stream) = this.stream.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };
        match stream.poll_next(cx) {
            Poll::Ready(None) => {
                this.stream.set(None);
                Poll::Ready(None)
            }
            other => other,
        }
    }
}
