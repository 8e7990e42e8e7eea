// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for streams with a runtime-agnostic timer abstraction.
//!
//! # Overview
//!
//! - **`Timer` trait** - Runtime-agnostic timer abstraction
//! - **`DebounceExt`** - Extension trait for `.debounce_with_timer(duration, timer)`
//! - **`DebounceWithDefaultTimerExt`** - `.debounce(duration)` using the active runtime's timer
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - Tokio runtime support with `TokioTimer`
//!
//! # Example
//!
//! ```rust,no_run
//! use heroes_stream_time::prelude::*;
//! use heroes_core::StreamItem;
//! use futures::stream::StreamExt;
//! use std::time::Duration;
//! use futures::channel::mpsc;
//!
//! # async fn example() {
//! let (tx, rx) = mpsc::unbounded::<String>();
//!
//! let debounced = rx
//!     .map(StreamItem::Value)
//!     .debounce(Duration::from_millis(300));
//!
//! tx.unbounded_send("an".to_string()).unwrap();
//! tx.unbounded_send("ang".to_string()).unwrap();
//! # }
//! ```

mod debounce;
pub mod prelude;
pub mod runtimes;
pub mod timer;

pub use debounce::{DebounceExt, DebounceWithDefaultTimerExt};

#[cfg(feature = "runtime-tokio")]
pub use runtimes::TokioTimer;
