// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators for `StreamItem` streams.
//!
//! # Operators
//!
//! - [`DistinctUntilChangedExt::distinct_until_changed`] - suppress consecutive duplicates
//! - [`SwitchMapExt::switch_map`] - latest-wins mapping onto futures
//! - [`TakeUntilCancelledExt::take_until_cancelled`] - end on cancellation
//!
//! # Example
//!
//! ```rust
//! use heroes_core::{CancellationToken, StreamItem};
//! use heroes_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let token = CancellationToken::new();
//! let terms = stream::iter(["bat", "bat", "batman"].map(|t| StreamItem::Value(t.to_string())));
//!
//! let lengths: Vec<_> = terms
//!     .distinct_until_changed()
//!     .switch_map(|term| async move { term.len() })
//!     .take_until_cancelled(token)
//!     .collect()
//!     .await;
//!
//! assert_eq!(lengths, vec![StreamItem::Value(6)]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod distinct_until_changed;
pub mod prelude;
mod switch_map;
mod take_until_cancelled;

pub use distinct_until_changed::DistinctUntilChangedExt;
pub use switch_map::SwitchMapExt;
pub use take_until_cancelled::TakeUntilCancelledExt;
