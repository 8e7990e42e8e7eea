// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::future::poll_fn;
use futures::stream::StreamExt;
use futures::Stream;
use heroes_core::StreamItem;
use std::task::Poll;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that nothing is emitted for `timeout_ms`.
///
/// A zero timeout polls the stream exactly once and starts no timer, so a
/// paused clock stays where it is. Any timer the stream arms is armed by that
/// poll. Otherwise the stream is polled before the timeout on every wakeup.
///
/// # Panics
///
/// Panics if the stream yields an item or ends.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    if timeout_ms == 0 {
        let polled = poll_fn(|cx| Poll::Ready(stream.poll_next_unpin(cx))).await;
        if polled.is_ready() {
            panic!("Unexpected element emitted, expected no output.");
        }
        return;
    }

    tokio::select! {
        biased;
        _state = stream.next() => {
            panic!(
                "Unexpected element emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits up to `timeout_ms` for the next item.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an element."),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for an element."),
    }
}
