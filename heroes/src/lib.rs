// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hero collection data client with a live search.
//!
//! This crate re-exports the workspace's public API:
//!
//! - data model, errors and log sinks from `heroes-core`
//! - [`HeroService`], the transports and [`HeroRoster`] from `heroes-client`
//! - [`HeroSearch`] from `heroes-search`
//! - the stream operators the search is built from
//!
//! # Example
//!
//! ```rust,no_run
//! use heroes::prelude::*;
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = HttpHeroApi::new(ClientConfig::from_env()?)?;
//! let service = HeroService::new(Arc::new(api), Arc::new(TracingLog));
//!
//! let search = HeroSearch::new(service.clone());
//! let mut results = search.results()?;
//! search.search("bat")?;
//!
//! if let Some(found) = results.next().await {
//!     println!("{} heroes match", found.len());
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use heroes_core::{
    Acknowledgment, CancellationToken, Hero, HeroApi, HeroError, HeroId, LatestSubject,
    MessageLog, MessageService, NewHero, Result, StreamItem, SubjectError, TracingLog,
};

pub use heroes_client::{
    seed_heroes, ClientConfig, HeroRoster, HeroService, HttpHeroApi, InMemoryHeroApi,
};

pub use heroes_search::{HeroSearch, SearchConfig};

pub use heroes_stream::{DistinctUntilChangedExt, SwitchMapExt, TakeUntilCancelledExt};
pub use heroes_stream_time::{DebounceExt, DebounceWithDefaultTimerExt, TokioTimer};

pub mod prelude {
    pub use crate::{
        Acknowledgment, ClientConfig, Hero, HeroApi, HeroError, HeroRoster, HeroSearch,
        HeroService, HttpHeroApi, InMemoryHeroApi, MessageLog, MessageService, NewHero,
        SearchConfig, TracingLog,
    };
}
