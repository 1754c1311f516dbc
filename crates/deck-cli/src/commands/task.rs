mod create;
mod delete;
mod get;
mod list;
mod update;

use deck_sync::{ListStore, TaskResource};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `deck task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            page,
            all,
            status,
            search,
            sort_by,
            sort_order,
        } => {
            let params = list::Params {
                page: *page,
                all: *all,
                status: status.as_deref(),
                search: search.as_deref(),
                sort_by: sort_by.as_deref(),
                sort_order: sort_order.as_deref(),
            };
            list::run(&params, ctx, flags).await
        }
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Create { title, description } => {
            create::run(title, description.as_deref(), ctx, flags).await
        }
        TaskCommands::Update {
            id,
            title,
            description,
        } => {
            let params = update::Params {
                id,
                title: title.as_deref(),
                description: description.as_deref(),
            };
            update::run(&params, ctx, flags).await
        }
        TaskCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}

fn store(ctx: &AppContext) -> ListStore<TaskResource> {
    ListStore::new(TaskResource::new(ctx.client.clone()), ctx.page_size)
}
