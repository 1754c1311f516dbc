//! General application configuration.

use deck_core::page::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Items requested per page by list commands.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}
