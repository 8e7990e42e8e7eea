// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hero fixtures mirroring the development dataset.

use heroes_core::{Hero, NewHero};

pub fn hero_pandu() -> Hero {
    Hero::new(12, "Pandu")
}

pub fn hero_yi_heng() -> Hero {
    Hero::new(13, "Yi Heng")
}

pub fn hero_rajesh() -> Hero {
    Hero::new(14, "Rajesh")
}

pub fn hero_vijay() -> Hero {
    Hero::new(15, "Vijay")
}

pub fn hero_rushabh() -> Hero {
    Hero::new(16, "Rushabh")
}

pub fn hero_prajwala() -> Hero {
    Hero::new(17, "Prajwala")
}

pub fn hero_prerana() -> Hero {
    Hero::new(18, "Prerana")
}

/// The full seeded collection, ids 12 to 18.
pub fn heroes() -> Vec<Hero> {
    vec![
        hero_pandu(),
        hero_yi_heng(),
        hero_rajesh(),
        hero_vijay(),
        hero_rushabh(),
        hero_prajwala(),
        hero_prerana(),
    ]
}

pub fn hero_bat() -> Hero {
    Hero::new(21, "Bat")
}

pub fn hero_batman() -> Hero {
    Hero::new(22, "Batman")
}

pub fn new_hero_zorro() -> NewHero {
    NewHero::new("Zorro")
}
