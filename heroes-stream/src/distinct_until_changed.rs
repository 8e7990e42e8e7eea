// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future;
use futures::stream::StreamExt;
use futures::Stream;
use heroes_core::StreamItem;

/// Extension trait providing the `distinct_until_changed` operator for streams.
///
/// This operator filters out consecutive duplicate values, emitting only when
/// the value changes from the previous emission.
pub trait DistinctUntilChangedExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Emits values only when they differ from the previous emitted value.
    ///
    /// # Behavior
    ///
    /// - First value is always emitted (no previous value to compare)
    /// - Subsequent values are compared to the last emitted value
    /// - A value equal to one emitted earlier, but not immediately before, is emitted again
    /// - Errors are always propagated immediately and do not reset the comparison
    ///
    /// # Example
    ///
    /// ```rust
    /// use heroes_core::StreamItem;
    /// use heroes_stream::DistinctUntilChangedExt;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let terms = stream::iter(["bat", "bat", "batman", "bat"].map(StreamItem::Value));
    ///
    /// let distinct: Vec<_> = terms.distinct_until_changed().collect().await;
    ///
    /// assert_eq!(
    ///     distinct,
    ///     vec![
    ///         StreamItem::Value("bat"),
    ///         StreamItem::Value("batman"),
    ///         StreamItem::Value("bat"),
    ///     ]
    /// );
    /// # }
    /// ```
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send + 'static;
}

impl<T, S> DistinctUntilChangedExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone + PartialEq + Send + 'static,
{
    fn distinct_until_changed(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        Self: Send + 'static,
    {
        let mut last_value: Option<T> = None;

        let stream = self.filter_map(move |item| {
            let emitted = match item {
                StreamItem::Value(value) => {
                    if last_value.as_ref() == Some(&value) {
                        None
                    } else {
                        last_value = Some(value.clone());
                        Some(StreamItem::Value(value))
                    }
                }
                StreamItem::Error(e) => Some(StreamItem::Error(e)),
            };
            future::ready(emitted)
        });

        Box::pin(stream)
    }
}
