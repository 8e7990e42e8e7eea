// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use heroes_core::{HeroApi, HeroError, NewHero};
use heroes_test_utils::test_data::{hero_bat, hero_batman, hero_pandu, heroes};
use heroes_test_utils::{ApiCall, ScriptedHeroApi};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn records_calls_in_arrival_order() -> anyhow::Result<()> {
    // Arrange
    let api = ScriptedHeroApi::with_heroes(heroes());

    // Act
    api.list().await?;
    api.get(12).await?;
    api.search("ra").await?;

    // Assert
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::List,
            ApiCall::Get(12),
            ApiCall::Search("ra".to_string())
        ]
    );
    Ok(())
}

#[tokio::test]
async fn create_assigns_the_next_free_id() -> anyhow::Result<()> {
    let api = ScriptedHeroApi::with_heroes(heroes());

    let created = api.create(&NewHero::new("Zorro")).await?;

    assert_eq!(created.id, 19);
    assert_eq!(created.name, "Zorro");
    Ok(())
}

#[tokio::test]
async fn armed_failure_applies_to_every_call_until_healed() -> anyhow::Result<()> {
    let api = ScriptedHeroApi::with_heroes(vec![hero_pandu()]);
    api.fail_with(HeroError::transport("api/heroes", "connection refused"));

    assert!(api.list().await.is_err());
    assert!(api.get(12).await.is_err());

    api.heal();
    assert_eq!(api.list().await?, vec![hero_pandu()]);
    assert_eq!(api.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn held_search_answers_only_after_release() -> anyhow::Result<()> {
    // Arrange
    let api = Arc::new(ScriptedHeroApi::with_heroes(vec![hero_bat(), hero_batman()]));
    let gate = api.hold_search("bat");

    // Act
    let pending = tokio::spawn({
        let api = Arc::clone(&api);
        async move { api.search("bat").await }
    });
    api.wait_for_searches(1).await;

    // Assert
    assert!(api.completed_searches().is_empty());

    gate.release();
    let found = timeout(Duration::from_secs(1), pending).await???;
    assert_eq!(found, vec![hero_bat(), hero_batman()]);
    assert_eq!(api.completed_searches(), vec!["bat".to_string()]);
    Ok(())
}
