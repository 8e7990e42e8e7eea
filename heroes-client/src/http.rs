// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reqwest-backed [`HeroApi`].
//!
//! Owns transport details only: request construction, timeout, status mapping
//! and JSON decoding. Recovery from failures is [`HeroService`](crate::HeroService)'s job.

use crate::config::ClientConfig;
use async_trait::async_trait;
use heroes_core::{Hero, HeroApi, HeroError, HeroId, NewHero, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const JSON: &str = "application/json";

/// Talks to a REST hero collection.
///
/// Dropping a pending call aborts the underlying request, which is how a
/// superseded search is cancelled.
#[derive(Debug, Clone)]
pub struct HttpHeroApi {
    client: Client,
    config: ClientConfig,
    collection: Url,
}

impl HttpHeroApi {
    /// Builds a client with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::Config`] when the collection url cannot be derived
    /// or the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let collection = config.collection_url()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|error| HeroError::config(format!("cannot build http client: {error}")))?;

        Ok(Self {
            client,
            config,
            collection,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        self.client
            .request(method, url.clone())
            .header(ACCEPT, JSON)
    }

    /// Sends `request` and returns the body of a 2xx response.
    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|error| map_transport_error(url, &error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeroError::status(url.as_str(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(url, &error))?;
        Ok(body.to_vec())
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let body = self.send(self.request(Method::GET, url), url).await?;
        decode(url, &body)
    }
}

#[async_trait]
impl HeroApi for HttpHeroApi {
    async fn list(&self) -> Result<Vec<Hero>> {
        self.fetch(&self.collection).await
    }

    async fn get(&self, id: HeroId) -> Result<Hero> {
        let url = self.config.item_url(id)?;
        self.fetch(&url).await
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        let request = self
            .request(Method::POST, &self.collection)
            .header(CONTENT_TYPE, JSON)
            .json(hero);
        let body = self.send(request, &self.collection).await?;
        decode(&self.collection, &body)
    }

    async fn update(&self, hero: &Hero) -> Result<()> {
        let request = self
            .request(Method::PUT, &self.collection)
            .header(CONTENT_TYPE, JSON)
            .json(hero);
        // The response body carries nothing the caller needs
        self.send(request, &self.collection).await?;
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<Option<Hero>> {
        let url = self.config.item_url(id)?;
        let request = self
            .request(Method::DELETE, &url)
            .header(CONTENT_TYPE, JSON);
        let body = self.send(request, &url).await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        decode(&url, &body)
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>> {
        let url = self.config.search_url(term)?;
        self.fetch(&url).await
    }
}

fn decode<T: DeserializeOwned>(url: &Url, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|error| HeroError::decode(url.as_str(), error.to_string()))
}

fn map_transport_error(url: &Url, error: &reqwest::Error) -> HeroError {
    let message = if error.is_timeout() {
        format!("timed out: {error}")
    } else {
        error.to_string()
    };
    HeroError::transport(url.as_str(), message)
}
