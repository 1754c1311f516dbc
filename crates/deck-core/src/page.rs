//! Pagination envelope and page math.
//!
//! A [`Page`] is derived from a single server response and never stored on
//! its own; list stores fold pages into their item collection.

use serde::{Deserialize, Serialize};

/// Page size used when configuration does not provide one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Requested page window. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    pub page: u32,
    pub size: u32,
}

impl PageParams {
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Zero-based item offset of the first entry on this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }
}

/// One page of a server-side collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub total_pages: u32,
    pub page: u32,
    pub size: u32,
}

/// Number of pages needed to hold `total_count` items at `size` per page.
///
/// A zero `size` yields zero pages.
#[must_use]
pub fn total_pages(total_count: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    u32::try_from(total_count.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
}
