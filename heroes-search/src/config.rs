// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Tuning for [`HeroSearch`](crate::HeroSearch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSearchConfig")]
pub struct SearchConfig {
    /// Quiet interval a term must survive before it is searched.
    pub debounce: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSearchConfig {
    debounce_ms: Option<u64>,
}

impl From<RawSearchConfig> for SearchConfig {
    fn from(raw: RawSearchConfig) -> Self {
        Self {
            debounce: raw.debounce_ms.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
        }
    }
}
