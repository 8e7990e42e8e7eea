// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A [`HeroApi`] served from a local list, for development without a server.

use async_trait::async_trait;
use heroes_core::{Hero, HeroApi, HeroError, HeroId, NewHero, Result};
use parking_lot::Mutex;

/// Id handed out when the collection is empty.
pub const FIRST_ID: HeroId = 11;

/// The development dataset.
#[must_use]
pub fn seed_heroes() -> Vec<Hero> {
    [
        (12, "Pandu"),
        (13, "Yi Heng"),
        (14, "Rajesh"),
        (15, "Vijay"),
        (16, "Rushabh"),
        (17, "Prajwala"),
        (18, "Prerana"),
    ]
    .into_iter()
    .map(|(id, name)| Hero::new(id, name))
    .collect()
}

/// In-memory hero collection.
///
/// Behaves like the REST collection: ids are assigned on create (highest id
/// plus one, or [`FIRST_ID`] when empty), missing ids fail with
/// [`HeroError::NotFound`], and search is a case-insensitive substring match.
///
/// ```
/// use heroes_client::InMemoryHeroApi;
/// use heroes_core::{HeroApi, NewHero};
///
/// # #[tokio::main]
/// # async fn main() -> heroes_core::Result<()> {
/// let api = InMemoryHeroApi::seeded();
///
/// let zorro = api.create(&NewHero::new("Zorro")).await?;
/// assert_eq!(zorro.id, 19);
///
/// let found = api.search("ra").await?;
/// assert_eq!(found.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryHeroApi {
    heroes: Mutex<Vec<Hero>>,
}

impl InMemoryHeroApi {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding [`seed_heroes`].
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_heroes(seed_heroes())
    }

    #[must_use]
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            heroes: Mutex::new(heroes),
        }
    }

    /// Snapshot of the stored heroes.
    #[must_use]
    pub fn heroes(&self) -> Vec<Hero> {
        self.heroes.lock().clone()
    }

    fn gen_id(heroes: &[Hero]) -> HeroId {
        heroes.iter().map(|h| h.id).max().map_or(FIRST_ID, |max| max + 1)
    }

    fn missing(id: HeroId) -> HeroError {
        HeroError::not_found(format!("api/heroes/{id}"))
    }
}

#[async_trait]
impl HeroApi for InMemoryHeroApi {
    async fn list(&self) -> Result<Vec<Hero>> {
        Ok(self.heroes())
    }

    async fn get(&self, id: HeroId) -> Result<Hero> {
        self.heroes
            .lock()
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        let mut heroes = self.heroes.lock();
        let created = Hero::new(Self::gen_id(&heroes), hero.name.clone());
        heroes.push(created.clone());
        Ok(created)
    }

    async fn update(&self, hero: &Hero) -> Result<()> {
        let mut heroes = self.heroes.lock();
        let stored = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or_else(|| Self::missing(hero.id))?;
        stored.name.clone_from(&hero.name);
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<Option<Hero>> {
        let mut heroes = self.heroes.lock();
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| Self::missing(id))?;
        Ok(Some(heroes.remove(index)))
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>> {
        let needle = term.to_lowercase();
        Ok(self
            .heroes
            .lock()
            .iter()
            .filter(|h| h.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
