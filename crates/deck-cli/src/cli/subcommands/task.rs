use clap::Subcommand;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List tasks.
    List {
        /// Page to fetch (1-based).
        #[arg(long, conflicts_with = "all")]
        page: Option<u32>,
        /// Fetch every page.
        #[arg(long)]
        all: bool,
        /// all, active or inactive.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
        /// created_at, updated_at or title.
        #[arg(long)]
        sort_by: Option<String>,
        /// asc or desc.
        #[arg(long)]
        sort_order: Option<String>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a task. Omitted fields keep their current value.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task.
    Delete { id: String },
}
