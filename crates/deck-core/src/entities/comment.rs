use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A text note attached to exactly one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub task_id: String,
    pub account_id: String,
    pub content: String,
    #[serde(default = "super::default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
