//! Client-side validation of task and comment drafts.
//!
//! A draft is whatever the user typed. Validating it trims the fields,
//! enforces the required/length rules, and yields an input type that is the
//! only thing the HTTP client accepts as a request body. Lengths are counted
//! in characters after trimming.

use serde::Serialize;
use thiserror::Error;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 2000;
pub const CONTENT_MAX_CHARS: usize = 2000;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", joined_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message recorded for `field`, if it was rejected.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

fn joined_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns a user draft into a send-ready input.
pub trait Validate {
    type Output;

    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every rejected field.
    fn validate(&self) -> Result<Self::Output, ValidationErrors>;
}

fn require(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, format!("{label} is required"));
    }
}

fn limit(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(field, format!("{label} cannot exceed {max} characters"));
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Unvalidated task form content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Validated body for task create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskInput {
    title: String,
    description: String,
}

impl TaskInput {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Validate for TaskDraft {
    type Output = TaskInput;

    fn validate(&self) -> Result<TaskInput, ValidationErrors> {
        let title = self.title.trim();
        let description = self.description.trim();

        let mut errors = ValidationErrors::default();
        require(&mut errors, "title", "Task title", title);
        limit(&mut errors, "title", "Task title", title, TITLE_MAX_CHARS);
        limit(
            &mut errors,
            "description",
            "Task description",
            description,
            DESCRIPTION_MAX_CHARS,
        );

        errors.into_result(TaskInput {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Unvalidated comment form content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
}

impl CommentDraft {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Validated body for comment create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInput {
    content: String,
}

impl CommentInput {
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Validate for CommentDraft {
    type Output = CommentInput;

    fn validate(&self) -> Result<CommentInput, ValidationErrors> {
        let content = self.content.trim();

        let mut errors = ValidationErrors::default();
        require(&mut errors, "content", "Comment content", content);
        limit(
            &mut errors,
            "content",
            "Comment content",
            content,
            CONTENT_MAX_CHARS,
        );

        errors.into_result(CommentInput {
            content: content.to_string(),
        })
    }
}
