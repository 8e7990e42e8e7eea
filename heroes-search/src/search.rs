// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::SearchConfig;
use futures::future;
use futures::{Stream, StreamExt};
use heroes_client::HeroService;
use heroes_core::{CancellationToken, Hero, HeroApi, LatestSubject, SubjectError};
use heroes_stream::prelude::*;
use heroes_stream_time::prelude::*;
use std::fmt;

/// Turns a burst of query strings into batches of matching heroes.
///
/// Every term goes through the same pipeline:
///
/// 1. trailing debounce: only the last term of a burst survives the quiet interval
/// 2. a term equal to the previously surviving one is dropped
/// 3. the term is searched; a newer term drops the search in flight, so a
///    stale response is never emitted
/// 4. the matching heroes are emitted
///
/// At most one search is outstanding per results stream, and the term source
/// keeps at most one unconsumed term however fast terms are pushed.
///
/// Closing or dropping the `HeroSearch` ends every results stream and
/// releases its pending timer and in-flight search.
///
/// # Example
///
/// ```rust
/// use futures::StreamExt;
/// use heroes_client::{HeroService, InMemoryHeroApi};
/// use heroes_core::TracingLog;
/// use heroes_search::HeroSearch;
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let service = HeroService::new(Arc::new(InMemoryHeroApi::seeded()), Arc::new(TracingLog));
/// let search = HeroSearch::new(service);
/// let mut results = search.results()?;
///
/// for term in ["p", "pr", "pra"] {
///     search.search(term)?;
/// }
///
/// let heroes = results.next().await.unwrap_or_default();
/// assert_eq!(heroes.len(), 1);
/// assert_eq!(heroes[0].name, "Prajwala");
/// # Ok(())
/// # }
/// ```
pub struct HeroSearch<A: ?Sized> {
    service: HeroService<A>,
    config: SearchConfig,
    terms: LatestSubject<String>,
    token: CancellationToken,
}

impl<A> HeroSearch<A>
where
    A: HeroApi + ?Sized + 'static,
{
    /// A search with the default 300 ms debounce.
    pub fn new(service: HeroService<A>) -> Self {
        Self::with_config(service, SearchConfig::default())
    }

    pub fn with_config(service: HeroService<A>, config: SearchConfig) -> Self {
        Self {
            service,
            config,
            terms: LatestSubject::new(),
            token: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pushes a query string, typically once per keystroke.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] after [`close`](Self::close).
    pub fn search(&self, term: impl Into<String>) -> Result<(), SubjectError> {
        self.terms.next(term.into())
    }

    /// A live stream of search results.
    ///
    /// Only terms pushed after this call are seen. Each call builds an
    /// independent pipeline with its own debounce and dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`SubjectError::Closed`] after [`close`](Self::close).
    pub fn results(&self) -> Result<impl Stream<Item = Vec<Hero>> + Send + Unpin, SubjectError> {
        let service = self.service.clone();

        let results = self
            .terms
            .subscribe()?
            .debounce(self.config.debounce)
            .distinct_until_changed()
            .switch_map(move |term: String| {
                let service = service.clone();
                async move {
                    tracing::debug!(%term, "dispatching hero search");
                    service.search_heroes(&term).await
                }
            })
            .take_until_cancelled(self.token.clone())
            .filter_map(|item| future::ready(item.ok()));

        Ok(results)
    }

    /// Ends every results stream and rejects further terms. Idempotent.
    pub fn close(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("closing hero search");
        }
        self.token.cancel();
        self.terms.close();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl<A: ?Sized> Drop for HeroSearch<A> {
    fn drop(&mut self) {
        self.token.cancel();
        self.terms.close();
    }
}

impl<A: ?Sized> fmt::Debug for HeroSearch<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeroSearch")
            .field("config", &self.config)
            .field("closed", &self.token.is_cancelled())
            .finish_non_exhaustive()
    }
}
