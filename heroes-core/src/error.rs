// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the heroes client.
//!
//! [`HeroError`] is the failure half of the tagged result every [`HeroApi`]
//! call returns. The data client never hands it to its callers: it is logged
//! and replaced by a fallback value. It also travels inside
//! [`StreamItem::Error`] through the search pipeline.
//!
//! [`HeroApi`]: crate::HeroApi
//! [`StreamItem::Error`]: crate::StreamItem::Error
//!
//! # Examples
//!
//! ```
//! use heroes_core::{HeroError, Result};
//!
//! fn lookup() -> Result<()> {
//!     Err(HeroError::status("api/heroes/99", 404))
//! }
//!
//! assert!(lookup().unwrap_err().is_not_found());
//! ```

/// Root error type for transport, validation and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Http failure during request for {url}: {message}")]
    Transport {
        /// Resource the request was sent to
        url: String,
        /// Underlying transport message
        message: String,
    },

    /// The resource answered with a non-success status other than 404.
    #[error("Http failure response for {url}: {status}")]
    Status {
        /// Resource the request was sent to
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The resource does not exist.
    #[error("Http failure response for {url}: 404 Not Found")]
    NotFound {
        /// Resource the request was sent to
        url: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// Resource the request was sent to
        url: String,
        /// Decoder message
        message: String,
    },

    /// The request was rejected before being sent.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// Client configuration could not be built.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl HeroError {
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Builds the error for a non-success status; 404 maps to [`HeroError::NotFound`].
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        if status == 404 {
            Self::NotFound { url }
        } else {
            Self::Status { url, status }
        }
    }

    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Failures that originate from the remote side or the wire, as opposed to
    /// local validation or configuration.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::NotFound { .. } | Self::Decode { .. }
        )
    }
}

/// Specialized Result type for heroes operations.
pub type Result<T> = std::result::Result<T, HeroError>;
