// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by the heroes client and the live search pipeline.
//!
//! - [`Hero`], [`NewHero`] and [`Acknowledgment`] model the single domain entity
//!   and the outcomes of write operations.
//! - [`HeroError`] is the tagged failure signal used at the transport boundary.
//! - [`HeroApi`] is the transport abstraction every backend implements.
//! - [`StreamItem`], [`LatestSubject`] and [`CancellationToken`] are the building
//!   blocks of the reactive search pipeline.
//! - [`MessageLog`] is the append-only sink operations report their outcome to.

pub mod api;
pub mod cancellation_token;
pub mod error;
pub mod hero;
pub mod latest_subject;
pub mod message_log;
pub mod stream_item;
pub mod subject_error;

pub use self::api::HeroApi;
pub use self::cancellation_token::{CancellationToken, Cancelled, CancelledOwned};
pub use self::error::{HeroError, Result};
pub use self::hero::{Acknowledgment, Hero, HeroId, NewHero};
pub use self::latest_subject::{LatestStream, LatestSubject};
pub use self::message_log::{MessageLog, MessageService, TracingLog};
pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
