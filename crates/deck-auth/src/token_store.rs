use std::fs;
use std::path::{Path, PathBuf};

use crate::credentials::AccessToken;
use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "taskdeck-cli";
const KEYRING_USER: &str = "access-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";

const ENV_TOKEN: &str = "TASKDECK_AUTH__TOKEN";
const ENV_ACCOUNT_ID: &str = "TASKDECK_AUTH__ACCOUNT_ID";

/// Which storage tier a credential was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
        }
    }
}

/// Returns the keyring service name.
///
/// Defaults to `"taskdeck-cli"`. Override via `TASKDECK_KEYRING_SERVICE` env var
/// for testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("TASKDECK_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a credential in the OS keychain. Falls back to file if keyring unavailable.
///
/// # Errors
///
/// Returns `AuthError::KeyringError` if the keyring refuses the credential and
/// the file fallback fails too.
pub fn store(token: &AccessToken) -> Result<TokenSource, AuthError> {
    let json = token.to_json()?;
    match keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .and_then(|entry| entry.set_password(&json))
    {
        Ok(()) => {
            tracing::info!(account_id = %token.account_id, "stored credential in keyring");
            Ok(TokenSource::Keyring)
        }
        Err(error) => fall_back_to_file(&credentials_path()?, &json, &error.to_string()),
    }
}

/// Load a credential. Priority: keyring → `TASKDECK_AUTH__*` env → file
/// (`~/.taskdeck/credentials`).
#[must_use]
pub fn load() -> Option<AccessToken> {
    load_with_source().map(|(token, _)| token)
}

/// Detect which tier the current credential came from (for status display).
#[must_use]
pub fn detect_token_source() -> Option<TokenSource> {
    load_with_source().map(|(_, source)| source)
}

fn load_with_source() -> Option<(AccessToken, TokenSource)> {
    // 1. Keyring
    if let Some(token) = load_keyring() {
        return Some((token, TokenSource::Keyring));
    }

    // 2. Environment variables
    if let Some(token) = from_env_values(
        std::env::var(ENV_TOKEN).ok().as_deref(),
        std::env::var(ENV_ACCOUNT_ID).ok().as_deref(),
    ) {
        return Some((token, TokenSource::Env));
    }

    // 3. File fallback
    let path = credentials_path().ok()?;
    load_file_at(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring (ignore errors: may not exist)
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    delete_file_at(&credentials_path()?)?;
    tracing::info!("cleared stored credentials");
    Ok(())
}

// --- Private helpers ---

fn load_keyring() -> Option<AccessToken> {
    let entry = keyring::Entry::new(&keyring_service(), KEYRING_USER).ok()?;
    let raw = entry.get_password().ok()?;
    match AccessToken::from_json(&raw) {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed keyring credential");
            None
        }
    }
}

fn from_env_values(token: Option<&str>, account_id: Option<&str>) -> Option<AccessToken> {
    AccessToken::new(token?, account_id?).ok()
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".taskdeck").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })
}

fn store_file_at(path: &Path, json: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, json)
        .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::TokenStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn fall_back_to_file(path: &Path, json: &str, keyring_error: &str) -> Result<TokenSource, AuthError> {
    tracing::warn!(error = keyring_error, "keyring store failed; falling back to file");
    store_file_at(path, json)
        .map(|()| TokenSource::File)
        .map_err(|file_error| {
            AuthError::KeyringError(format!("{keyring_error} (file fallback failed: {file_error})"))
        })
}

fn load_file_at(path: &Path) -> Option<AccessToken> {
    let raw = fs::read_to_string(path).ok()?;
    if raw.trim().is_empty() {
        return None;
    }
    match AccessToken::from_json(&raw) {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring malformed credentials file");
            None
        }
    }
}

fn delete_file_at(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> AccessToken {
        AccessToken::new("test_token_abc123", "account-42").expect("valid token")
    }

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".taskdeck/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("nested").join("credentials");

        store_file_at(&creds_path, &sample().to_json().unwrap()).expect("store");
        assert_eq!(load_file_at(&creds_path), Some(sample()));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&creds_path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file_at(&creds_path).expect("delete");
        assert!(!creds_path.exists());
        assert!(load_file_at(&creds_path).is_none());
    }

    #[test]
    fn delete_missing_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(delete_file_at(&tmp.path().join("credentials")).is_ok());
    }

    #[test]
    fn load_file_ignores_empty_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");
        std::fs::write(&creds_path, "   \n  ").expect("write");
        assert!(load_file_at(&creds_path).is_none(), "whitespace-only should return None");
    }

    #[test]
    fn load_file_ignores_malformed_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");
        std::fs::write(&creds_path, "not json").expect("write");
        assert!(load_file_at(&creds_path).is_none());
    }

    #[test]
    fn file_fallback_lands_in_file_tier() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");
        let json = sample().to_json().unwrap();

        let source = fall_back_to_file(&creds_path, &json, "no secret service").expect("fallback");
        assert_eq!(source, TokenSource::File);
        assert_eq!(load_file_at(&creds_path), Some(sample()));
    }

    #[test]
    fn keyring_error_when_file_fallback_fails_too() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").expect("write");
        let json = sample().to_json().unwrap();

        let err = fall_back_to_file(&blocker.join("credentials"), &json, "no secret service")
            .unwrap_err();
        match err {
            AuthError::KeyringError(message) => {
                assert!(message.starts_with("no secret service"));
                assert!(message.contains("file fallback failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn env_tier_needs_both_values() {
        assert_eq!(
            from_env_values(Some("test_token_abc123"), Some("account-42")),
            Some(sample())
        );
        assert!(from_env_values(Some("tok"), None).is_none());
        assert!(from_env_values(None, Some("account-42")).is_none());
        assert!(from_env_values(Some(""), Some("account-42")).is_none());
    }

    #[test]
    fn token_source_labels() {
        assert_eq!(TokenSource::Keyring.as_str(), "keyring");
        assert_eq!(TokenSource::Env.as_str(), "env");
        assert_eq!(TokenSource::File.as_str(), "file");
    }
}
