// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use heroes_core::{Acknowledgment, Hero, HeroError, NewHero, StreamItem};
use serde_json::json;

#[test]
fn hero_round_trips_through_the_wire_shape() -> anyhow::Result<()> {
    let hero: Hero = serde_json::from_value(json!({ "id": 12, "name": "Pandu" }))?;

    assert_eq!(hero, Hero::new(12, "Pandu"));
    assert_eq!(serde_json::to_value(&hero)?, json!({ "id": 12, "name": "Pandu" }));
    Ok(())
}

#[test]
fn new_hero_never_carries_an_id() -> anyhow::Result<()> {
    let body = serde_json::to_value(NewHero::new("Zorro"))?;

    assert_eq!(body, json!({ "name": "Zorro" }));
    Ok(())
}

#[test]
fn trimmed_name_rejects_blank_names() {
    assert_eq!(NewHero::new("  Zorro ").trimmed_name(), Some("Zorro"));
    assert_eq!(NewHero::new("   ").trimmed_name(), None);
    assert_eq!(NewHero::new("").trimmed_name(), None);
}

#[test]
fn acknowledgment_defaults_to_inert() {
    assert_eq!(Acknowledgment::default(), Acknowledgment::Inert);
    assert!(!Acknowledgment::Inert.is_accepted());
    assert!(Acknowledgment::Accepted.is_accepted());
}

#[test]
fn status_404_maps_to_not_found() {
    let err = HeroError::status("api/heroes/99", 404);

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Http failure response for api/heroes/99: 404 Not Found"
    );
}

#[test]
fn other_statuses_keep_their_code() {
    let err = HeroError::status("api/heroes", 500);

    assert_eq!(
        err,
        HeroError::Status {
            url: "api/heroes".to_string(),
            status: 500
        }
    );
    assert!(err.is_remote());
    assert!(!HeroError::invalid_input("blank").is_remote());
}

#[test]
fn stream_item_converts_from_and_into_result() {
    let value: StreamItem<i32> = Ok(3).into();
    let error: StreamItem<i32> = Err(HeroError::transport("api/heroes", "boom")).into();

    assert_eq!(value.clone().ok(), Some(3));
    assert!(error.is_error());
    assert_ne!(error.clone(), error);
    assert_eq!(value.map(|v| v * 2).unwrap(), 6);

    let back: Result<i32, HeroError> = error.into();
    assert!(back.is_err());
}
