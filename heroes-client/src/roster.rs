// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::HeroService;
use heroes_core::{Hero, HeroApi, NewHero};
use tokio::task::JoinHandle;

/// Local hero list backing a list view.
///
/// The list is only a local copy. [`remove`](Self::remove) drops the hero
/// before the delete settles and does not put it back if the delete fails, so
/// the list can drift from the server until the next [`load`](Self::load).
#[derive(Debug)]
pub struct HeroRoster<A: ?Sized> {
    service: HeroService<A>,
    heroes: Vec<Hero>,
}

impl<A> HeroRoster<A>
where
    A: HeroApi + ?Sized + 'static,
{
    /// An empty roster. Call [`load`](Self::load) to fill it.
    pub fn new(service: HeroService<A>) -> Self {
        Self {
            service,
            heroes: Vec::new(),
        }
    }

    #[must_use]
    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Replaces the local list with the server's.
    pub async fn load(&mut self) {
        self.heroes = self.service.heroes().await;
    }

    /// Creates a hero named `name` (trimmed) and appends it.
    ///
    /// A blank name is ignored: no request, no message.
    pub async fn add(&mut self, name: &str) -> Option<Hero> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let created = self.service.add_hero(NewHero::new(name)).await?;
        self.heroes.push(created.clone());
        Some(created)
    }

    /// Removes `hero` locally, then deletes it on the server in the background.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn remove(&mut self, hero: &Hero) -> JoinHandle<Option<Hero>> {
        self.heroes.retain(|h| h != hero);
        self.service.spawn_delete_hero(hero.id)
    }
}
