use deck_core::validation::TaskDraft;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    title: &str,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = TaskDraft::new(title, description.unwrap_or_default());
    let task = super::store(ctx).create(&draft).await?;
    output(&task, flags.format)
}
