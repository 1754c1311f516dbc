use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Store a bearer token for an account.
    Login(AuthLoginArgs),
    /// Clear stored credentials.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Bearer token issued by the backend.
    #[arg(long)]
    pub token: String,
    /// Account the token belongs to.
    #[arg(long)]
    pub account: String,
}
