use deck_sync::DeleteOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui::TerminalConfirm;

#[derive(Serialize)]
struct TaskDeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = super::store(ctx)
        .delete(id, &TerminalConfirm::new(flags))
        .await?;
    output(
        &TaskDeleteResponse {
            id,
            deleted: outcome == DeleteOutcome::Deleted,
        },
        flags.format,
    )
}
