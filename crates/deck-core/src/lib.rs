//! # deck-core
//!
//! Core types and validation for taskdeck.
//!
//! This crate provides the foundational types shared across all taskdeck crates:
//! - Entity structs for the domain objects (tasks, comments)
//! - The pagination envelope and page math
//! - Task list filters and their query-string form
//! - Draft validation producing send-ready inputs

pub mod entities;
pub mod filters;
pub mod page;
pub mod validation;

pub use page::{Page, PageParams};
pub use validation::{FieldError, ValidationErrors};
