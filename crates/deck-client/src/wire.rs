//! Backend list envelope and its conversion into [`Page`].

use deck_core::page::{Page, PageParams, total_pages};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct WirePaginationParams {
    page: u32,
    size: u32,
}

/// `{items, total_count, total_pages, pagination_params}` as the backend sends it.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    items: Vec<T>,
    #[serde(default)]
    total_count: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    pagination_params: Option<WirePaginationParams>,
}

impl<T> ListEnvelope<T> {
    /// Normalize into a [`Page`], filling gaps from the request that produced it.
    pub(crate) fn into_page(self, requested: PageParams) -> Page<T> {
        let (page, size) = self
            .pagination_params
            .map_or((requested.page, requested.size), |p| (p.page, p.size));
        let total_count = self
            .total_count
            .unwrap_or_else(|| requested.offset() + self.items.len() as u64);
        let total_pages = self
            .total_pages
            .unwrap_or_else(|| total_pages(total_count, size));

        Page {
            items: self.items,
            total_count,
            total_pages,
            page,
            size,
        }
    }
}
