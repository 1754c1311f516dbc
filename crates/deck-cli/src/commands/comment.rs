mod create;
mod delete;
mod get;
mod list;
mod update;

use deck_sync::{CommentResource, ListStore};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;

/// Handle `deck comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { task_id, page, all } => {
            list::run(task_id, *page, *all, ctx, flags).await
        }
        CommentCommands::Get { task_id, id } => get::run(task_id, id, ctx, flags).await,
        CommentCommands::Create { task_id, content } => {
            create::run(task_id, content, ctx, flags).await
        }
        CommentCommands::Update {
            task_id,
            id,
            content,
        } => update::run(task_id, id, content, ctx, flags).await,
        CommentCommands::Delete { task_id, id } => delete::run(task_id, id, ctx, flags).await,
    }
}

fn store(ctx: &AppContext, task_id: &str) -> ListStore<CommentResource> {
    ListStore::new(
        CommentResource::new(ctx.client.clone(), task_id),
        ctx.page_size,
    )
}
