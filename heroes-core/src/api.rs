// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Transport boundary for the hero collection.

use crate::{Hero, HeroId, NewHero, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// An HTTP-shaped hero collection resource.
///
/// Each method maps onto one request against the collection base path:
///
/// | method | request |
/// |---|---|
/// | [`list`](Self::list) | `GET <base>` |
/// | [`get`](Self::get) | `GET <base>/{id}` (404 on miss) |
/// | [`create`](Self::create) | `POST <base>` with a hero without id |
/// | [`update`](Self::update) | `PUT <base>` with the full hero |
/// | [`delete`](Self::delete) | `DELETE <base>/{id}` |
/// | [`search`](Self::search) | `GET <base>/?name={term}` |
///
/// Implementations report every failure as a [`HeroError`](crate::HeroError)
/// and are interchangeable: a real server and an in-memory store satisfy the
/// same contract.
#[async_trait]
pub trait HeroApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Hero>>;

    async fn get(&self, id: HeroId) -> Result<Hero>;

    /// Returns the created hero carrying its server-assigned id.
    async fn create(&self, hero: &NewHero) -> Result<Hero>;

    async fn update(&self, hero: &Hero) -> Result<()>;

    /// Returns the removed hero when the server echoes it.
    async fn delete(&self, id: HeroId) -> Result<Option<Hero>>;

    /// Heroes whose name contains `term`.
    async fn search(&self, term: &str) -> Result<Vec<Hero>>;
}

#[async_trait]
impl<A: HeroApi + ?Sized> HeroApi for Arc<A> {
    async fn list(&self) -> Result<Vec<Hero>> {
        (**self).list().await
    }

    async fn get(&self, id: HeroId) -> Result<Hero> {
        (**self).get(id).await
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        (**self).create(hero).await
    }

    async fn update(&self, hero: &Hero) -> Result<()> {
        (**self).update(hero).await
    }

    async fn delete(&self, id: HeroId) -> Result<Option<Hero>> {
        (**self).delete(id).await
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>> {
        (**self).search(term).await
    }
}
