use deck_sync::{FetchOutcome, ListSnapshot, ListStore, Resource};
use serde::Serialize;

/// What list commands print.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub has_more: bool,
}

impl<T> From<ListSnapshot<T>> for ListResponse<T> {
    fn from(snapshot: ListSnapshot<T>) -> Self {
        Self {
            items: snapshot.items,
            page: snapshot.page,
            total_pages: snapshot.total_pages,
            total_count: snapshot.total_count,
            has_more: snapshot.has_more,
        }
    }
}

/// Load one page (default 1) or, with `all`, every page in order.
pub async fn load<R: Resource>(
    store: &ListStore<R>,
    page: Option<u32>,
    all: bool,
) -> anyhow::Result<ListResponse<R::Item>> {
    if all {
        let mut outcome = store.load_first_page().await?;
        while store.has_more() && matches!(outcome, FetchOutcome::Loaded { .. }) {
            outcome = store.load_next_page().await?;
        }
    } else {
        store.fetch_page(page.unwrap_or(1)).await?;
    }
    Ok(store.snapshot().into())
}
