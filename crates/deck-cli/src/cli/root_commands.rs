use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, CommentCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Comments on a task.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
}
