// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use heroes_client::{HeroRoster, HeroService};
use heroes_core::{HeroError, MessageService};
use heroes_test_utils::test_data::{hero_pandu, heroes};
use heroes_test_utils::{ApiCall, ScriptedHeroApi};
use std::sync::Arc;

fn roster_with(
    api: ScriptedHeroApi,
) -> (
    HeroRoster<ScriptedHeroApi>,
    Arc<ScriptedHeroApi>,
    Arc<MessageService>,
) {
    let api = Arc::new(api);
    let messages = Arc::new(MessageService::new());
    let roster = HeroRoster::new(HeroService::new(Arc::clone(&api), messages.clone()));
    (roster, api, messages)
}

#[tokio::test]
async fn load_replaces_the_local_list() -> anyhow::Result<()> {
    // Arrange
    let (mut roster, _api, _messages) = roster_with(ScriptedHeroApi::with_heroes(heroes()));
    assert!(roster.heroes().is_empty());

    // Act
    roster.load().await;

    // Assert
    assert_eq!(roster.heroes(), heroes().as_slice());
    Ok(())
}

#[tokio::test]
async fn add_appends_the_created_hero() -> anyhow::Result<()> {
    // Arrange
    let (mut roster, _api, _messages) = roster_with(ScriptedHeroApi::with_heroes(heroes()));
    roster.load().await;

    // Act
    let created = roster.add("  Zorro ").await;

    // Assert
    let created = created.ok_or_else(|| anyhow::anyhow!("hero was not created"))?;
    assert_eq!(created.name, "Zorro");
    assert_eq!(roster.heroes().last(), Some(&created));
    Ok(())
}

#[tokio::test]
async fn add_with_blank_name_is_ignored_silently() -> anyhow::Result<()> {
    let (mut roster, api, messages) = roster_with(ScriptedHeroApi::new());

    assert_eq!(roster.add("   ").await, None);
    assert_eq!(api.call_count(), 0);
    assert!(messages.is_empty());
    Ok(())
}

#[tokio::test]
async fn add_failure_leaves_the_list_untouched() -> anyhow::Result<()> {
    let (mut roster, api, _messages) = roster_with(ScriptedHeroApi::new());
    api.fail_with(HeroError::status("api/heroes", 500));

    assert_eq!(roster.add("Zorro").await, None);
    assert!(roster.heroes().is_empty());
    Ok(())
}

#[tokio::test]
async fn remove_drops_locally_and_deletes_on_the_server() -> anyhow::Result<()> {
    // Arrange
    let (mut roster, api, _messages) = roster_with(ScriptedHeroApi::with_heroes(heroes()));
    roster.load().await;

    // Act
    let deleted = roster.remove(&hero_pandu()).await?;

    // Assert
    assert_eq!(deleted, Some(hero_pandu()));
    assert!(!roster.heroes().contains(&hero_pandu()));
    assert!(api.calls().contains(&ApiCall::Delete(12)));
    Ok(())
}

#[tokio::test]
async fn remove_is_not_rolled_back_when_the_delete_fails() -> anyhow::Result<()> {
    // Arrange
    let (mut roster, api, messages) = roster_with(ScriptedHeroApi::with_heroes(heroes()));
    roster.load().await;
    api.fail_with(HeroError::transport("api/heroes/12", "connection reset"));

    // Act
    let deleted = roster.remove(&hero_pandu()).await?;

    // Assert
    assert_eq!(deleted, None);
    assert_eq!(roster.heroes().len(), 6);
    assert!(api.stored_heroes().contains(&hero_pandu()));
    assert!(messages.contains("deleteHero failed"));
    Ok(())
}
