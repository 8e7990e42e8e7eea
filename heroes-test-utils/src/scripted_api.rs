// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A scripted [`HeroApi`] for driving the client and the search pipeline in tests.
//!
//! The store answers from an in-memory list, records every call, fails every
//! call while a failure is armed, and can hold a search for a given term until
//! the test releases it.

use async_trait::async_trait;
use heroes_core::{Hero, HeroApi, HeroError, HeroId, NewHero, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

/// A call received by [`ScriptedHeroApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Get(HeroId),
    Create(NewHero),
    Update(Hero),
    Delete(HeroId),
    Search(String),
}

/// Handle that lets a held search answer.
#[derive(Debug, Clone)]
pub struct SearchGate {
    notify: Arc<Notify>,
}

impl SearchGate {
    /// Lets the held search answer. Releasing before the search starts is fine.
    pub fn release(&self) {
        self.notify.notify_one();
    }
}

#[derive(Debug, Default)]
pub struct ScriptedHeroApi {
    heroes: Mutex<Vec<Hero>>,
    next_id: Mutex<HeroId>,
    calls: Mutex<Vec<ApiCall>>,
    completed_searches: Mutex<Vec<String>>,
    failure: Mutex<Option<HeroError>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    call_made: Notify,
}

impl ScriptedHeroApi {
    pub fn new() -> Self {
        Self::with_heroes(Vec::new())
    }

    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        let next_id = heroes.iter().map(|h| h.id).max().map_or(11, |max| max + 1);
        Self {
            heroes: Mutex::new(heroes),
            next_id: Mutex::new(next_id),
            ..Self::default()
        }
    }

    /// Every subsequent call fails with `error` until [`heal`](Self::heal).
    pub fn fail_with(&self, error: HeroError) {
        *self.failure.lock() = Some(error);
    }

    pub fn heal(&self) {
        *self.failure.lock() = None;
    }

    /// Holds searches for `term` until the returned gate is released.
    pub fn hold_search(&self, term: &str) -> SearchGate {
        let notify = Arc::clone(
            self.gates
                .lock()
                .entry(term.to_string())
                .or_insert_with(|| Arc::new(Notify::new())),
        );
        SearchGate { notify }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Terms of every search that reached the store, in arrival order.
    pub fn search_terms(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Search(term) => Some(term.clone()),
                _ => None,
            })
            .collect()
    }

    /// Terms of every search that ran to completion (was not dropped while held).
    pub fn completed_searches(&self) -> Vec<String> {
        self.completed_searches.lock().clone()
    }

    pub fn stored_heroes(&self) -> Vec<Hero> {
        self.heroes.lock().clone()
    }

    /// Waits until at least `count` searches reached the store.
    pub async fn wait_for_searches(&self, count: usize) {
        loop {
            let notified = self.call_made.notified();
            if self.search_terms().len() >= count {
                return;
            }
            notified.await;
        }
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.lock().push(call);
        self.call_made.notify_waiters();
        match self.failure.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn missing(id: HeroId) -> HeroError {
        HeroError::not_found(format!("api/heroes/{id}"))
    }
}

#[async_trait]
impl HeroApi for ScriptedHeroApi {
    async fn list(&self) -> Result<Vec<Hero>> {
        self.record(ApiCall::List)?;
        Ok(self.stored_heroes())
    }

    async fn get(&self, id: HeroId) -> Result<Hero> {
        self.record(ApiCall::Get(id))?;
        self.heroes
            .lock()
            .iter()
            .find(|h| h.id == id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }

    async fn create(&self, hero: &NewHero) -> Result<Hero> {
        self.record(ApiCall::Create(hero.clone()))?;
        let mut next_id = self.next_id.lock();
        let created = Hero::new(*next_id, hero.name.clone());
        *next_id += 1;
        self.heroes.lock().push(created.clone());
        Ok(created)
    }

    async fn update(&self, hero: &Hero) -> Result<()> {
        self.record(ApiCall::Update(hero.clone()))?;
        let mut heroes = self.heroes.lock();
        let stored = heroes
            .iter_mut()
            .find(|h| h.id == hero.id)
            .ok_or_else(|| Self::missing(hero.id))?;
        stored.name = hero.name.clone();
        Ok(())
    }

    async fn delete(&self, id: HeroId) -> Result<Option<Hero>> {
        self.record(ApiCall::Delete(id))?;
        let mut heroes = self.heroes.lock();
        let index = heroes
            .iter()
            .position(|h| h.id == id)
            .ok_or_else(|| Self::missing(id))?;
        Ok(Some(heroes.remove(index)))
    }

    async fn search(&self, term: &str) -> Result<Vec<Hero>> {
        self.record(ApiCall::Search(term.to_string()))?;

        let gate = self.gates.lock().get(term).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.completed_searches.lock().push(term.to_string());
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
