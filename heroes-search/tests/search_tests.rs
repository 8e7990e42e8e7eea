// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{Stream, StreamExt};
use heroes_client::HeroService;
use heroes_core::{Hero, MessageService, SubjectError};
use heroes_search::{HeroSearch, SearchConfig};
use heroes_test_utils::assert_no_element_emitted;
use heroes_test_utils::test_data::{hero_bat, hero_batman, heroes};
use heroes_test_utils::ScriptedHeroApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{advance, pause, timeout};

const QUIET: Duration = Duration::from_millis(300);

fn search_over(
    api: ScriptedHeroApi,
) -> (
    HeroSearch<ScriptedHeroApi>,
    Arc<ScriptedHeroApi>,
    Arc<MessageService>,
) {
    let api = Arc::new(api);
    let messages = Arc::new(MessageService::new());
    let service = HeroService::new(Arc::clone(&api), messages.clone());
    (HeroSearch::new(service), api, messages)
}

async fn next_batch<S>(results: &mut S) -> anyhow::Result<Option<Vec<Hero>>>
where
    S: Stream<Item = Vec<Hero>> + Unpin,
{
    Ok(timeout(Duration::from_secs(5), results.next()).await?)
}

#[tokio::test]
async fn keystroke_burst_dispatches_only_the_last_term() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, api, _messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    let mut results = search.results()?;

    // Act
    for term in ["a", "an", "ang", "angu"] {
        search.search(term)?;
        assert_no_element_emitted(&mut results, 0).await;
        advance(Duration::from_millis(50)).await;
    }
    advance(QUIET).await;

    // Assert
    assert_eq!(next_batch(&mut results).await?, Some(Vec::new()));
    assert_eq!(api.search_terms(), vec!["angu".to_string()]);
    Ok(())
}

#[tokio::test]
async fn settled_term_emits_matching_heroes() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, _api, messages) =
        search_over(ScriptedHeroApi::with_heroes(vec![hero_bat(), hero_batman()]));
    let mut results = search.results()?;

    // Act
    search.search("bat")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;

    // Assert
    assert_eq!(
        next_batch(&mut results).await?,
        Some(vec![hero_bat(), hero_batman()])
    );
    assert!(messages.contains("found heroes matching \"bat\""));
    Ok(())
}

#[tokio::test]
async fn nothing_is_dispatched_before_the_quiet_interval() -> anyhow::Result<()> {
    pause();
    let (search, api, _messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    let mut results = search.results()?;

    search.search("pan")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(Duration::from_millis(299)).await;
    assert_no_element_emitted(&mut results, 0).await;

    assert_eq!(api.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn repeated_term_is_dispatched_once() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, api, _messages) =
        search_over(ScriptedHeroApi::with_heroes(vec![hero_bat(), hero_batman()]));
    let mut results = search.results()?;

    // Act
    search.search("bat")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;
    let first = next_batch(&mut results).await?;

    search.search("bat")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;

    // Assert
    assert_eq!(first, Some(vec![hero_bat(), hero_batman()]));
    assert_no_element_emitted(&mut results, 1_000).await;
    assert_eq!(api.search_terms(), vec!["bat".to_string()]);
    Ok(())
}

#[tokio::test]
async fn newer_term_supersedes_the_search_in_flight() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, api, _messages) =
        search_over(ScriptedHeroApi::with_heroes(vec![hero_bat(), hero_batman()]));
    let gate = api.hold_search("bat");
    let mut results = search.results()?;

    // Act: "bat" is dispatched and held
    search.search("bat")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;
    assert_no_element_emitted(&mut results, 0).await;
    assert_eq!(api.search_terms(), vec!["bat".to_string()]);

    // Act: "batman" settles while "bat" is still outstanding
    search.search("batman")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;
    let batch = next_batch(&mut results).await?;

    gate.release();

    // Assert
    assert_eq!(batch, Some(vec![hero_batman()]));
    assert_no_element_emitted(&mut results, 1_000).await;
    assert_eq!(api.completed_searches(), vec!["batman".to_string()]);
    Ok(())
}

#[tokio::test]
async fn blank_term_emits_empty_batch_without_request() -> anyhow::Result<()> {
    pause();
    let (search, api, _messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    let mut results = search.results()?;

    search.search("   ")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;

    assert_eq!(next_batch(&mut results).await?, Some(Vec::new()));
    assert_eq!(api.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn failed_search_emits_empty_batch() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, api, messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    api.fail_with(heroes_core::HeroError::status("api/heroes/?name=pan", 500));
    let mut results = search.results()?;

    // Act
    search.search("pan")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;

    // Assert
    assert_eq!(next_batch(&mut results).await?, Some(Vec::new()));
    assert!(messages.contains("searchHeroes failed"));
    Ok(())
}

#[tokio::test]
async fn close_ends_results_and_rejects_terms() -> anyhow::Result<()> {
    // Arrange
    let (search, _api, _messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    let mut results = search.results()?;

    // Act
    search.close();

    // Assert
    assert!(search.is_closed());
    assert_eq!(next_batch(&mut results).await?, None);
    assert_eq!(search.search("bat"), Err(SubjectError::Closed));
    assert!(search.results().is_err());
    Ok(())
}

#[tokio::test]
async fn close_drops_the_search_in_flight() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (search, api, _messages) =
        search_over(ScriptedHeroApi::with_heroes(vec![hero_bat(), hero_batman()]));
    let gate = api.hold_search("bat");
    let mut results = search.results()?;

    search.search("bat")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(QUIET).await;
    assert_no_element_emitted(&mut results, 0).await;

    // Act
    search.close();
    let after_close = next_batch(&mut results).await?;
    gate.release();
    tokio::task::yield_now().await;

    // Assert
    assert_eq!(after_close, None);
    assert_eq!(api.search_terms(), vec!["bat".to_string()]);
    assert!(api.completed_searches().is_empty());
    Ok(())
}

#[tokio::test]
async fn dropping_the_search_ends_results() -> anyhow::Result<()> {
    let (search, _api, _messages) = search_over(ScriptedHeroApi::with_heroes(heroes()));
    let mut results = search.results()?;

    drop(search);

    assert_eq!(next_batch(&mut results).await?, None);
    Ok(())
}

#[tokio::test]
async fn custom_debounce_is_honored() -> anyhow::Result<()> {
    // Arrange
    pause();
    let api = Arc::new(ScriptedHeroApi::with_heroes(heroes()));
    let service = HeroService::new(Arc::clone(&api), Arc::new(MessageService::new()));
    let search = HeroSearch::with_config(
        service,
        SearchConfig::default().with_debounce(Duration::from_millis(50)),
    );
    let mut results = search.results()?;

    // Act
    search.search("pan")?;
    assert_no_element_emitted(&mut results, 0).await;
    advance(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(next_batch(&mut results).await?.map(|b| b.len()), Some(1));
    assert_eq!(api.search_terms(), vec!["pan".to_string()]);
    Ok(())
}
