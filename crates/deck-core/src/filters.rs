//! Task list filters and their query-string representation.
//!
//! All enums use `snake_case` serialization so they parse from CLI input and
//! render into query parameters with the same spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Which tasks to include by their `active` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortField
// ---------------------------------------------------------------------------

/// Server-side sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TaskFilters
// ---------------------------------------------------------------------------

/// Filters passed straight through to the task list endpoint.
///
/// Nothing here is applied locally: search and sorting are the server's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilters {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl TaskFilters {
    /// Query parameters for this filter set.
    ///
    /// `status=all` and blank searches are omitted; sort parameters are always
    /// sent so the server never falls back to its own default ordering.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if self.status != StatusFilter::All {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim)
            && !search.is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        pairs.push(("sort_by", self.sort_by.as_str().to_string()));
        pairs.push(("sort_order", self.sort_order.as_str().to_string()));
        pairs
    }
}
