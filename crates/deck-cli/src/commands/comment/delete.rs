use deck_sync::DeleteOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui::TerminalConfirm;

#[derive(Serialize)]
struct CommentDeleteResponse<'a> {
    task_id: &'a str,
    id: &'a str,
    deleted: bool,
}

pub async fn run(task_id: &str, id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = super::store(ctx, task_id)
        .delete(id, &TerminalConfirm::new(flags))
        .await?;
    output(
        &CommentDeleteResponse {
            task_id,
            id,
            deleted: outcome == DeleteOutcome::Deleted,
        },
        flags.format,
    )
}
