use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or env var could not be read into [`crate::DeckConfig`].
    #[error("failed to read taskdeck configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but cannot be used, e.g. `general.page_size = 0`.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn invalid_value_names_the_setting() {
        let err = ConfigError::InvalidValue {
            field: "general.page_size".into(),
            reason: "must be between 1 and 100".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for general.page_size: must be between 1 and 100"
        );
    }
}
