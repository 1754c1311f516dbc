use std::collections::{HashMap, HashSet};

use deck_core::entities::Identified;
use parking_lot::Mutex;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::pagination::PaginationTracker;
use crate::resource::Resource;

/// Local mirror of one server-side list.
///
/// All state sits behind a single lock that is never held across an await,
/// so a store can be shared (`Arc<ListStore<_>>`) between tasks.
pub struct ListStore<R: Resource> {
    pub(crate) resource: R,
    pub(crate) inner: Mutex<Inner<R::Item>>,
    filters: Mutex<R::Filters>,
}

pub(crate) struct Inner<T> {
    pub(crate) items: Vec<T>,
    pub(crate) pagination: PaginationTracker,
    pub(crate) error: Option<String>,
    pub(crate) busy: Busy,
    pub(crate) in_flight: Option<InFlight<T>>,
    pub(crate) next_generation: u64,
}

/// The fetch currently allowed to write into the store.
pub(crate) struct InFlight<T> {
    pub(crate) generation: u64,
    pub(crate) cancel: CancellationToken,
    /// Ids deleted after this fetch was issued.
    pub(crate) removed: HashSet<String>,
    /// Items updated after this fetch was issued.
    pub(crate) replaced: HashMap<String, T>,
    /// Items created after this fetch was issued, oldest first.
    pub(crate) created: Vec<T>,
}

impl<T> InFlight<T> {
    pub(crate) fn new(generation: u64) -> Self {
        Self {
            generation,
            cancel: CancellationToken::new(),
            removed: HashSet::new(),
            replaced: HashMap::new(),
            created: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Busy {
    pub(crate) creating: u32,
    pub(crate) updating: u32,
    pub(crate) deleting: u32,
}

/// Point-in-time copy of a store's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_more: bool,
    pub loading: bool,
    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,
    pub error: Option<String>,
}

impl<R: Resource> ListStore<R> {
    /// Empty store fetching `page_size` items per page.
    pub fn new(resource: R, page_size: u32) -> Self {
        Self::with_filters(resource, page_size, R::Filters::default())
    }

    pub fn with_filters(resource: R, page_size: u32, filters: R::Filters) -> Self {
        Self {
            resource,
            inner: Mutex::new(Inner {
                items: Vec::new(),
                pagination: PaginationTracker::new(page_size),
                error: None,
                busy: Busy::default(),
                in_flight: None,
                next_generation: 0,
            }),
            filters: Mutex::new(filters),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn snapshot(&self) -> ListSnapshot<R::Item> {
        let inner = self.inner.lock();
        ListSnapshot {
            items: inner.items.clone(),
            page: inner.pagination.page(),
            total_pages: inner.pagination.total_pages(),
            total_count: inner.pagination.total_count(),
            has_more: inner.pagination.has_more(),
            loading: inner.in_flight.is_some(),
            creating: inner.busy.creating > 0,
            updating: inner.busy.updating > 0,
            deleting: inner.busy.deleting > 0,
            error: inner.error.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.inner.lock().pagination.has_more()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().in_flight.is_some()
    }

    pub fn pagination(&self) -> PaginationTracker {
        self.inner.lock().pagination
    }

    /// Local copy of the item with `id`, if loaded.
    pub fn get(&self, id: &str) -> Option<R::Item> {
        self.inner
            .lock()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    pub fn clear_error(&self) {
        self.inner.lock().error = None;
    }

    pub fn filters(&self) -> R::Filters {
        self.filters.lock().clone()
    }

    /// Replace the filters. Takes effect on the next load.
    pub fn set_filters(&self, filters: R::Filters) {
        *self.filters.lock() = filters;
    }

    /// Abort the in-flight fetch, if any. Its response will be dropped.
    pub fn cancel(&self) {
        if let Some(in_flight) = self.inner.lock().in_flight.take() {
            tracing::debug!(
                noun = R::NOUN,
                generation = in_flight.generation,
                "cancelled fetch"
            );
            in_flight.cancel.cancel();
        }
    }
}

impl<R: Resource> Drop for ListStore<R> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.inner.get_mut().in_flight.take() {
            in_flight.cancel.cancel();
        }
    }
}
