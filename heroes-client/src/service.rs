// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Failure-absorbing data client.
//!
//! [`HeroService`] turns every [`HeroApi`] call into a value the caller can use
//! directly. A failed call is logged and replaced by a fallback: an empty list,
//! `None` or [`Acknowledgment::Inert`]. Each operation reports exactly one
//! message to the [`MessageLog`], success or failure, prefixed `HeroService: `.

use heroes_core::{Acknowledgment, Hero, HeroApi, HeroError, HeroId, MessageLog, NewHero, Result};
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;

const LOG_PREFIX: &str = "HeroService: ";

/// Data client over a hero transport.
///
/// ```
/// use heroes_client::{HeroService, InMemoryHeroApi};
/// use heroes_core::MessageService;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let messages = Arc::new(MessageService::new());
/// let service = HeroService::new(Arc::new(InMemoryHeroApi::seeded()), messages.clone());
///
/// assert_eq!(service.hero(12).await.map(|h| h.name), Some("Pandu".to_string()));
/// assert_eq!(service.hero(99).await, None);
///
/// assert_eq!(
///     messages.messages(),
///     vec![
///         "HeroService: fetched hero id=12".to_string(),
///         "HeroService: getHero id=99 failed: Http failure response for api/heroes/99: 404 Not Found"
///             .to_string(),
///     ]
/// );
/// # }
/// ```
pub struct HeroService<A: ?Sized> {
    api: Arc<A>,
    log: Arc<dyn MessageLog>,
}

impl<A: ?Sized> Clone for HeroService<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            log: Arc::clone(&self.log),
        }
    }
}

impl<A: ?Sized> fmt::Debug for HeroService<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroService").finish_non_exhaustive()
    }
}

impl<A> HeroService<A>
where
    A: HeroApi + ?Sized + 'static,
{
    pub fn new(api: Arc<A>, log: Arc<dyn MessageLog>) -> Self {
        Self { api, log }
    }

    #[must_use]
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    /// All heroes, or an empty list on failure.
    pub async fn heroes(&self) -> Vec<Hero> {
        let result = self
            .api
            .list()
            .await
            .inspect(|_| self.log("fetched heroes"));
        self.recover("getHeroes", result, Vec::new())
    }

    /// The hero with `id`, or `None` on failure, including when it does not exist.
    pub async fn hero(&self, id: HeroId) -> Option<Hero> {
        let result = self
            .api
            .get(id)
            .await
            .map(Some)
            .inspect(|_| self.log(format!("fetched hero id={id}")));
        self.recover(&format!("getHero id={id}"), result, None)
    }

    /// Creates a hero and returns it with its server-assigned id.
    ///
    /// A blank name is rejected without a request. `None` on failure.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        let result = match hero.trimmed_name() {
            Some(name) => self.api.create(&NewHero::new(name)).await.map(Some),
            None => Err(blank_name()),
        }
        .inspect(|created| {
            if let Some(created) = created {
                self.log(format!("added hero w/ id={}", created.id));
            }
        });
        self.recover("addHero", result, None)
    }

    /// Saves `hero`. [`Acknowledgment::Inert`] on failure.
    ///
    /// A blank name is rejected without a request.
    pub async fn update_hero(&self, hero: &Hero) -> Acknowledgment {
        let result = if hero.name.trim().is_empty() {
            Err(blank_name())
        } else {
            self.api.update(hero).await
        }
        .map(|()| Acknowledgment::Accepted)
        .inspect(|_| self.log(format!("updated hero id={}", hero.id)));
        self.recover("updateHero", result, Acknowledgment::Inert)
    }

    /// Deletes the hero with `id`.
    ///
    /// Returns the removed hero when the server echoes it, `None` when it does
    /// not or on failure.
    pub async fn delete_hero(&self, id: HeroId) -> Option<Hero> {
        let result = self
            .api
            .delete(id)
            .await
            .inspect(|_| self.log(format!("deleted hero id={id}")));
        self.recover("deleteHero", result, None)
    }

    /// Runs [`delete_hero`](Self::delete_hero) on the tokio runtime.
    ///
    /// The request completes even if the handle is dropped unobserved.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn_delete_hero(&self, id: HeroId) -> JoinHandle<Option<Hero>> {
        let service = self.clone();
        tokio::spawn(async move { service.delete_hero(id).await })
    }

    /// Heroes whose name contains `term`, or an empty list on failure.
    ///
    /// An empty or all-whitespace term resolves to an empty list at once,
    /// without a request and without a message.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let result = self.api.search(term).await.inspect(|found| {
            if found.is_empty() {
                self.log(format!("no heroes matching \"{term}\""));
            } else {
                self.log(format!("found heroes matching \"{term}\""));
            }
        });
        self.recover("searchHeroes", result, Vec::new())
    }

    fn log(&self, message: impl fmt::Display) {
        self.log.add(format!("{LOG_PREFIX}{message}"));
    }

    /// Lets the caller continue with `fallback` when `result` failed.
    fn recover<T>(&self, operation: &str, result: Result<T>, fallback: T) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(operation, %error, "hero request failed, using fallback");
                self.log(format!("{operation} failed: {error}"));
                fallback
            }
        }
    }
}

fn blank_name() -> HeroError {
    HeroError::invalid_input("hero name must not be blank")
}
