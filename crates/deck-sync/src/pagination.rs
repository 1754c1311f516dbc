use deck_core::Page;

/// Tracks how far into a server-side collection the local list has loaded.
///
/// `page` is the last page applied, 0 before the first load. `has_more` is
/// `page < total_pages`, so it is false before any load and for an empty
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationTracker {
    page: u32,
    size: u32,
    total_pages: u32,
    total_count: u64,
}

impl PaginationTracker {
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self {
            page: 0,
            size,
            total_pages: 0,
            total_count: 0,
        }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page a `load_next_page` would request, if any remain.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.has_more() {
            Some(self.page + 1)
        } else {
            None
        }
    }

    /// Adopt the counters of a freshly received page.
    pub const fn apply<T>(&mut self, page: &Page<T>) {
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.total_count = page.total_count;
    }

    pub const fn record_created(&mut self) {
        self.total_count = self.total_count.saturating_add(1);
    }

    pub const fn record_deleted(&mut self) {
        self.total_count = self.total_count.saturating_sub(1);
    }
}
