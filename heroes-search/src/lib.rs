// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounced, latest-wins live hero search built from stream operators.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod config;
mod search;

pub use config::{SearchConfig, DEFAULT_DEBOUNCE};
pub use search::HeroSearch;
