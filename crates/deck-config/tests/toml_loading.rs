//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use deck_config::{ConfigError, DeckConfig};

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://tasks.example.com/api/"
timeout_secs = 30
user_agent = "deck-test"
"#,
        )?;

        let config: DeckConfig = Figment::from(Serialized::defaults(DeckConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url(), "https://tasks.example.com/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.user_agent, "deck-test");
        assert_eq!(config.general.page_size, 10);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[general]
page_size = 25
",
        )?;

        let config: DeckConfig = Figment::from(Serialized::defaults(DeckConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.page_size, 25);
        assert_eq!(config.api.base_url(), "http://localhost:8080/api");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".taskdeck")).expect("mkdir");
        jail.create_file(
            ".taskdeck/config.toml",
            r#"
[api]
base_url = "https://project.example.com/api"
"#,
        )?;

        let config: DeckConfig = DeckConfig::figment_at(jail.directory()).extract()?;
        assert_eq!(config.api.base_url(), "https://project.example.com/api");
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".taskdeck")).expect("mkdir");
        jail.create_file(
            ".taskdeck/config.toml",
            r"
[general]
page_size = 25
",
        )?;
        jail.set_env("TASKDECK_GENERAL__PAGE_SIZE", "50");
        jail.set_env("TASKDECK_API__BASE_URL", "https://env.example.com");

        let config: DeckConfig = DeckConfig::figment_at(jail.directory()).extract()?;
        assert_eq!(config.general.page_size, 50);
        assert_eq!(config.api.base_url(), "https://env.example.com");
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("TASKDECK_API__BASE_URL", "localhost:8080");

        let err = DeckConfig::load().expect_err("non-http URL should fail validation");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".taskdeck")).expect("mkdir");
        jail.create_file(
            ".taskdeck/config.toml",
            r#"
[general]
page_size = "lots"
"#,
        )?;

        let err = DeckConfig::load().expect_err("string page size should not extract");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
