// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Connection settings for [`HttpHeroApi`](crate::HttpHeroApi).

use heroes_core::{HeroError, HeroId, Result};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4200/";
pub const DEFAULT_HEROES_PATH: &str = "api/heroes";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_USER_AGENT: &str = concat!("heroes-client/", env!("CARGO_PKG_VERSION"));

pub const ENV_BASE_URL: &str = "HEROES_API_BASE_URL";
pub const ENV_HEROES_PATH: &str = "HEROES_API_PATH";
pub const ENV_TIMEOUT_MS: &str = "HEROES_API_TIMEOUT_MS";

/// Where the hero collection lives and how long a request may take.
///
/// ```
/// use heroes_client::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://heroes.test:8080/".parse().unwrap())
///     .with_timeout(Duration::from_secs(2));
///
/// assert_eq!(
///     config.item_url(12).unwrap().as_str(),
///     "http://heroes.test:8080/api/heroes/12"
/// );
/// assert_eq!(
///     config.search_url("bat").unwrap().as_str(),
///     "http://heroes.test:8080/api/heroes/?name=bat"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    base_url: Url,
    heroes_path: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            heroes_path: DEFAULT_HEROES_PATH.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_heroes_path(mut self, heroes_path: impl Into<String>) -> Self {
        self.heroes_path = heroes_path.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reads overrides from `HEROES_API_BASE_URL`, `HEROES_API_PATH` and
    /// `HEROES_API_TIMEOUT_MS`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_BASE_URL) {
            let base_url = Url::parse(raw.trim()).map_err(|error| {
                HeroError::config(format!("{ENV_BASE_URL}={raw:?} is not a valid url: {error}"))
            })?;
            config = config.with_base_url(base_url);
        }

        if let Some(path) = lookup(ENV_HEROES_PATH) {
            config = config.with_heroes_path(path.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis = raw.trim().parse::<u64>().map_err(|error| {
                HeroError::config(format!(
                    "{ENV_TIMEOUT_MS}={raw:?} is not a number of milliseconds: {error}"
                ))
            })?;
            config = config.with_timeout(Duration::from_millis(millis));
        }

        Ok(config)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn heroes_path(&self) -> &str {
        &self.heroes_path
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// `<base>/<heroes_path>`, the target of list, create and update.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] if the base url cannot carry a path.
    pub fn collection_url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| self.not_a_base())?;
            segments.pop_if_empty();
            segments.extend(self.heroes_path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }

    /// `<base>/<heroes_path>/<id>`, the target of get and delete.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] if the base url cannot carry a path.
    pub fn item_url(&self, id: HeroId) -> Result<Url> {
        self.extend_collection(&id.to_string())
    }

    /// `<base>/<heroes_path>/?name=<term>`, the name search.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] if the base url cannot carry a path.
    pub fn search_url(&self, term: &str) -> Result<Url> {
        let mut url = self.extend_collection("")?;
        url.query_pairs_mut().append_pair("name", term);
        Ok(url)
    }

    fn extend_collection(&self, segment: &str) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|()| self.not_a_base())?
            .push(segment);
        Ok(url)
    }

    fn not_a_base(&self) -> HeroError {
        HeroError::config(format!("{} cannot be used as a base url", self.base_url))
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!("default base url is valid"))
}

/// Wire shape of [`ClientConfig`]: every field optional, timeout in milliseconds.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawClientConfig {
    base_url: Option<Url>,
    heroes_path: Option<String>,
    timeout_ms: Option<u64>,
    user_agent: Option<String>,
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: raw.base_url.unwrap_or(defaults.base_url),
            heroes_path: raw.heroes_path.unwrap_or(defaults.heroes_path),
            timeout: raw
                .timeout_ms
                .map_or(defaults.timeout, Duration::from_millis),
            user_agent: raw.user_agent.unwrap_or(defaults.user_agent),
        }
    }
}
