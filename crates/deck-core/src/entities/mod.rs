//! Entity structs for the taskdeck domain objects.
//!
//! Field names follow the backend's `snake_case` JSON. Timestamps are optional
//! because some backend revisions omit them from mutation responses.

mod comment;
mod task;

pub use comment::Comment;
pub use task::Task;

/// An entity addressable by a server-assigned string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

pub(crate) const fn default_active() -> bool {
    true
}
