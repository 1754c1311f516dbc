mod login;
mod logout;
mod status;

use deck_config::DeckConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `deck auth <subcommand>`. Runs without an API client.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags, config: &DeckConfig) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags),
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags, config),
    }
}
