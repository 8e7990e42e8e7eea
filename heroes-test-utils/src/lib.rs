// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the heroes workspace.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`test_channel`] - push plain values, receive `StreamItem`-wrapped values
//! - [`ScriptedHeroApi`] - a [`HeroApi`](heroes_core::HeroApi) that records
//!   every call, can fail on demand and can hold a search until released
//! - [`test_data`] - hero fixtures taken from the development dataset
//! - [`helpers`] - assertion and utility functions
//!
//! # Example
//!
//! ```rust
//! use heroes_test_utils::test_data::{hero_pandu, heroes};
//!
//! assert_eq!(hero_pandu().id, 12);
//! assert_eq!(heroes().len(), 7);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod scripted_api;
pub mod test_data;

use futures::{Stream, StreamExt};
use heroes_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, unwrap_stream};
pub use scripted_api::{ApiCall, ScriptedHeroApi, SearchGate};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use heroes_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send("bat".to_string()).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap();
/// assert_eq!(item, "bat");
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// ```rust
/// use heroes_test_utils::test_channel_with_errors;
/// use heroes_core::{StreamItem, HeroError};
///
/// let (tx, _stream) = test_channel_with_errors::<String>();
///
/// tx.send(StreamItem::Value("bat".to_string())).unwrap();
/// tx.send(StreamItem::Error(HeroError::transport("api/heroes", "boom"))).unwrap();
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
