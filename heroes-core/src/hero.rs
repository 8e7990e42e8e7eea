// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use serde::{Deserialize, Serialize};

/// Server-assigned hero identifier.
pub type HeroId = i64;

/// A hero as stored by the remote collection.
///
/// The `id` is assigned by the server when the hero is created and never
/// changes afterwards. The client never derives or guesses ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

/// A hero that has not been created yet: the body of a create request.
///
/// There is deliberately no `id` field, so a client cannot ask the server to
/// honor a pre-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name with surrounding whitespace removed, or `None` when
    /// nothing is left.
    #[must_use]
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Outcome of an update.
///
/// `Inert` is what a failed update settles to. A caller must not treat the
/// call having settled as proof that the change was persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Acknowledgment {
    /// The server accepted the update.
    Accepted,
    /// The update failed and was recovered; nothing is known about persistence.
    #[default]
    Inert,
}

impl Acknowledgment {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}
