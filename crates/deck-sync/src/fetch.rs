//! Paginated loading into a [`ListStore`].

use std::collections::HashSet;

use deck_core::entities::Identified;
use deck_core::{Page, PageParams};
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::SyncError;
use crate::resource::Resource;
use crate::store::{InFlight, Inner, ListStore};

/// What a load call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was applied to the store.
    Loaded { page: u32, received: usize },
    /// Nothing was requested: no page remains, or a fetch is already running.
    Skipped,
    /// The fetch was cancelled or overtaken by a newer one. Its response, if
    /// any arrived, was dropped.
    Superseded,
}

struct Ticket<F> {
    generation: u64,
    page: u32,
    size: u32,
    cancel: CancellationToken,
    filters: F,
}

/// Frees the in-flight slot of a fetch whose future was dropped before it
/// settled, so later loads are not skipped forever.
///
/// Dropping it takes the store lock, so it must outlive any lock guard.
struct SlotGuard<'a, T> {
    inner: &'a Mutex<Inner<T>>,
    generation: u64,
}

impl<T> Drop for SlotGuard<'_, T> {
    fn drop(&mut self) {
        let abandoned = self
            .inner
            .lock()
            .in_flight
            .take_if(|current| current.generation == self.generation);
        if let Some(abandoned) = abandoned {
            tracing::debug!(generation = self.generation, "released abandoned fetch");
            abandoned.cancel.cancel();
        }
    }
}

impl<R: Resource> ListStore<R> {
    /// Load page 1, replacing the local items. Supersedes a running fetch.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Request`] if the request fails. Prior items are
    /// kept and the failure is recorded as the store's error message.
    pub async fn load_first_page(&self) -> Result<FetchOutcome, SyncError> {
        self.fetch_page(1).await
    }

    /// Same as [`Self::load_first_page`].
    ///
    /// # Errors
    ///
    /// See [`Self::load_first_page`].
    pub async fn refresh(&self) -> Result<FetchOutcome, SyncError> {
        self.load_first_page().await
    }

    /// Append the page after the last one loaded.
    ///
    /// A no-op returning [`FetchOutcome::Skipped`] when `has_more` is false or
    /// another fetch is in flight. Calls are dropped, not queued.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Request`] if the request fails.
    pub async fn load_next_page(&self) -> Result<FetchOutcome, SyncError> {
        let ticket = {
            let mut inner = self.inner.lock();
            if inner.in_flight.is_some() {
                tracing::debug!(noun = R::NOUN, "next page skipped: fetch in flight");
                return Ok(FetchOutcome::Skipped);
            }
            let Some(page) = inner.pagination.next_page() else {
                return Ok(FetchOutcome::Skipped);
            };
            self.issue(&mut inner, page)
        };
        self.run(ticket).await
    }

    /// Load an explicit page: page 1 replaces the local items, later pages
    /// append. Supersedes a running fetch.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Request`] if the request fails.
    pub async fn fetch_page(&self, page: u32) -> Result<FetchOutcome, SyncError> {
        let ticket = {
            let mut inner = self.inner.lock();
            if let Some(previous) = inner.in_flight.take() {
                tracing::debug!(
                    noun = R::NOUN,
                    generation = previous.generation,
                    "superseding in-flight fetch"
                );
                previous.cancel.cancel();
            }
            self.issue(&mut inner, page.max(1))
        };
        self.run(ticket).await
    }

    fn issue(&self, inner: &mut Inner<R::Item>, page: u32) -> Ticket<R::Filters> {
        inner.next_generation += 1;
        let in_flight = InFlight::new(inner.next_generation);
        let ticket = Ticket {
            generation: in_flight.generation,
            page,
            size: inner.pagination.size(),
            cancel: in_flight.cancel.clone(),
            filters: self.filters(),
        };
        inner.in_flight = Some(in_flight);
        inner.error = None;
        ticket
    }

    async fn run(&self, ticket: Ticket<R::Filters>) -> Result<FetchOutcome, SyncError> {
        let _slot = SlotGuard {
            inner: &self.inner,
            generation: ticket.generation,
        };
        let params = PageParams::new(ticket.page, ticket.size);
        tracing::debug!(
            noun = R::NOUN,
            page = ticket.page,
            generation = ticket.generation,
            "fetching page"
        );

        let result = tokio::select! {
            () = ticket.cancel.cancelled() => {
                return Ok(FetchOutcome::Superseded);
            }
            result = self.resource.fetch(params, &ticket.filters) => result,
        };

        let mut inner = self.inner.lock();
        let Some(in_flight) = inner
            .in_flight
            .take_if(|current| current.generation == ticket.generation)
        else {
            tracing::warn!(
                noun = R::NOUN,
                generation = ticket.generation,
                "discarding stale fetch response"
            );
            return Ok(FetchOutcome::Superseded);
        };

        match result {
            Ok(page) => Ok(apply_page(&mut inner, page, ticket.page, &in_flight)),
            Err(error) => {
                tracing::warn!(noun = R::NOUN, page = ticket.page, %error, "fetch failed");
                inner.error = Some(format!("failed to load {}s: {error}", R::NOUN));
                Err(error.into())
            }
        }
    }
}

/// Fold a received page into the store, replaying mutations that landed
/// while it was in flight.
fn apply_page<T: Identified + Clone>(
    inner: &mut Inner<T>,
    mut page: Page<T>,
    requested: u32,
    in_flight: &InFlight<T>,
) -> FetchOutcome {
    let before = page.items.len();
    page.items
        .retain(|item| !in_flight.removed.contains(item.id()));
    let dropped = (before - page.items.len()) as u64;
    page.total_count = page.total_count.saturating_sub(dropped);

    for item in &mut page.items {
        if let Some(newer) = in_flight.replaced.get(item.id()) {
            item.clone_from(newer);
        }
    }

    // Page 1 replaces the local items, so creates the response predates
    // would vanish. Put them back in front, newest first.
    let mut restored = Vec::new();
    if requested <= 1 {
        let fetched: HashSet<&str> = page.items.iter().map(Identified::id).collect();
        restored = in_flight
            .created
            .iter()
            .rev()
            .filter(|item| !fetched.contains(item.id()))
            .map(|item| in_flight.replaced.get(item.id()).unwrap_or(item).clone())
            .collect();
        page.total_count += restored.len() as u64;
    }

    inner.pagination.apply(&page);
    let received = page.items.len();
    if requested <= 1 {
        restored.extend(page.items);
        inner.items = restored;
    } else {
        let known: HashSet<String> = inner.items.iter().map(|item| item.id().to_string()).collect();
        inner
            .items
            .extend(page.items.into_iter().filter(|item| !known.contains(item.id())));
    }
    inner.error = None;

    FetchOutcome::Loaded {
        page: inner.pagination.page(),
        received,
    }
}
