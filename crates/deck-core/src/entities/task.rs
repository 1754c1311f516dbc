use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A top-level to-do item owned by one account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub account_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "super::default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
