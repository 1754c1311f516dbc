use deck_auth::token_store::{self, TokenSource};
use deck_config::DeckConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    account_id: Option<String>,
    token_source: Option<&'static str>,
    base_url: String,
}

pub fn handle(flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    let token = deck_auth::resolve_token();
    let status = AuthStatusResponse {
        authenticated: token.is_some(),
        account_id: token.map(|token| token.account_id),
        token_source: token_store::detect_token_source().map(TokenSource::as_str),
        base_url: config.api.base_url().to_string(),
    };
    output(&status, flags.format)
}
