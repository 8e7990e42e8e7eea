// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Append-only message sinks.
//!
//! Every data-client operation reports exactly one message here. Writes from
//! concurrent operations may interleave; no ordering is promised between
//! unrelated operations.

use parking_lot::Mutex;

/// Sink accepting one text message per call.
///
/// Implementations must not panic: a failing sink would abort the operation
/// that is reporting to it.
pub trait MessageLog: Send + Sync {
    fn add(&self, message: String);
}

/// In-memory message log, the sink a UI renders as its message panel.
///
/// Each message is also forwarded to `tracing` at info level.
///
/// ```
/// use heroes_core::{MessageLog, MessageService};
///
/// let messages = MessageService::new();
/// messages.add("HeroService: fetched heroes".to_string());
/// assert_eq!(messages.messages(), vec!["HeroService: fetched heroes"]);
///
/// messages.clear();
/// assert!(messages.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MessageService {
    messages: Mutex<Vec<String>>,
}

impl MessageService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages in arrival order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Returns `true` if any message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.lock().iter().any(|m| m.contains(needle))
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl MessageLog for MessageService {
    fn add(&self, message: String) {
        tracing::info!(target: "heroes::messages", "{message}");
        self.messages.lock().push(message);
    }
}

/// Sink that only forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl MessageLog for TracingLog {
    fn add(&self, message: String) {
        tracing::info!(target: "heroes::messages", "{message}");
    }
}
