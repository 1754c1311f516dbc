use deck_core::validation::CommentDraft;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    task_id: &str,
    content: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let comment = super::store(ctx, task_id)
        .create(&CommentDraft::new(content))
        .await?;
    output(&comment, flags.format)
}
