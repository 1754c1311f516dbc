use anyhow::Context;
use deck_client::ApiClient;
use deck_config::{DeckConfig, MAX_PAGE_SIZE};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: ApiClient,
    pub page_size: u32,
}

impl AppContext {
    /// Build the API client from the stored credential.
    ///
    /// Fails before any request when no credential is stored.
    pub fn init(config: &DeckConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let page_size = effective_page_size(flags.page_size, config.general.page_size)?;
        let client = ApiClient::from_stored_credentials(&config.api)
            .context("failed to initialize API client")?;
        tracing::debug!(
            base_url = config.api.base_url(),
            account_id = client.account_id(),
            page_size,
            "context ready"
        );
        Ok(Self { client, page_size })
    }
}

/// `--page-size` wins over config; both must be in `1..=MAX_PAGE_SIZE`.
fn effective_page_size(flag: Option<u32>, configured: u32) -> anyhow::Result<u32> {
    let size = flag.unwrap_or(configured);
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        anyhow::bail!("--page-size must be between 1 and {MAX_PAGE_SIZE}, got {size}");
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::effective_page_size;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_page_size(Some(25), 10).unwrap(), 25);
    }

    #[test]
    fn config_used_when_flag_missing() {
        assert_eq!(effective_page_size(None, 10).unwrap(), 10);
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(effective_page_size(Some(0), 10).is_err());
        assert!(effective_page_size(Some(101), 10).is_err());
    }
}
