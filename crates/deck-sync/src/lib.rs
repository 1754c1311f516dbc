//! # deck-sync
//!
//! Keeps an in-memory list of tasks or comments in step with the server.
//!
//! A [`ListStore`] combines three pieces:
//! - **fetcher**: paginated GETs that replace (page 1) or append (page > 1)
//!   the local items
//! - **mutator**: create/update/delete requests whose successful responses
//!   are spliced into the local items without a refetch
//! - **pagination tracker**: `{page, total_pages, total_count}` and the
//!   derived `has_more`
//!
//! At most one fetch per store is in flight. Each fetch owns a
//! [`CancellationToken`](tokio_util::sync::CancellationToken) and a
//! generation number; reloading supersedes the running fetch and any response
//! whose generation no longer matches is dropped. Deletes and updates that
//! land while a fetch is running are replayed onto its response.

mod confirm;
mod error;
mod fetch;
mod mutate;
mod pagination;
mod resource;
mod store;

pub use confirm::{AlwaysConfirm, Confirm};
pub use error::SyncError;
pub use fetch::FetchOutcome;
pub use mutate::DeleteOutcome;
pub use pagination::PaginationTracker;
pub use resource::{CommentResource, Resource, TaskResource};
pub use store::{ListSnapshot, ListStore};
