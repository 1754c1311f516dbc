use deck_auth::AccessToken;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    account_id: String,
    token_source: &'static str,
}

pub fn handle(args: &AuthLoginArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let token = AccessToken::new(args.token.clone(), args.account.clone())?;
    let source = deck_auth::token_store::store(&token)?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            account_id: token.account_id,
            token_source: source.as_str(),
        },
        flags.format,
    )
}
