use clap::Subcommand;

/// Comment commands. Every comment is addressed through its task.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// List a task's comments.
    List {
        task_id: String,
        /// Page to fetch (1-based).
        #[arg(long, conflicts_with = "all")]
        page: Option<u32>,
        /// Fetch every page.
        #[arg(long)]
        all: bool,
    },
    /// Get a comment by ID.
    Get { task_id: String, id: String },
    /// Add a comment to a task.
    Create {
        task_id: String,
        #[arg(long)]
        content: String,
    },
    /// Replace a comment's content.
    Update {
        task_id: String,
        id: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a comment.
    Delete { task_id: String, id: String },
}
