// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Data client for the hero collection.
//!
//! - [`HeroService`] - every operation settles to a usable value and logs one message
//! - [`HttpHeroApi`] - REST transport over `reqwest`
//! - [`InMemoryHeroApi`] - the same contract served from a local list
//! - [`HeroRoster`] - list-view model with load, add and remove
//! - [`ClientConfig`] - base url, collection path, timeout
//!
//! # Example
//!
//! ```rust,no_run
//! use heroes_client::{ClientConfig, HeroService, HttpHeroApi};
//! use heroes_core::TracingLog;
//! use std::sync::Arc;
//!
//! # async fn example() -> heroes_core::Result<()> {
//! let api = HttpHeroApi::new(ClientConfig::from_env()?)?;
//! let service = HeroService::new(Arc::new(api), Arc::new(TracingLog));
//!
//! for hero in service.heroes().await {
//!     println!("{hero}");
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod config;
mod http;
pub mod in_memory;
mod roster;
mod service;

pub use config::ClientConfig;
pub use heroes_core::HeroApi;
pub use http::HttpHeroApi;
pub use in_memory::{seed_heroes, InMemoryHeroApi};
pub use roster::HeroRoster;
pub use service::HeroService;
