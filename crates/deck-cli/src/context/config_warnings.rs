use deck_config::{ApiConfig, DeckConfig};
use deck_core::page::DEFAULT_PAGE_SIZE;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeckConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeckConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.api.base_url == ApiConfig::default().base_url
        && has_single_underscore_key(&env_keys, "TASKDECK_API")
    {
        warnings.push(
            "API config appears default while TASKDECK_API_* env vars exist. Use double underscores (example: TASKDECK_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.general.page_size == DEFAULT_PAGE_SIZE
        && has_single_underscore_key(&env_keys, "TASKDECK_GENERAL")
    {
        warnings.push(
            "General config appears default while TASKDECK_GENERAL_* env vars exist. Use double underscores (example: TASKDECK_GENERAL__PAGE_SIZE)."
                .to_string(),
        );
    }

    warnings
}

/// `SECTION_KEY` present without the `SECTION__KEY` spelling figment expects.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
