use anyhow::Context;
use deck_core::entities::Task;
use deck_core::validation::TaskDraft;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub id: &'a str,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// The PATCH body always carries both fields, so omitted ones are read from
/// the current task first.
pub async fn run(params: &Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(params)?;

    let current = ctx
        .client
        .get_task(params.id)
        .await
        .with_context(|| format!("failed to load task {}", params.id))?;
    let draft = merge_draft(&current, params);

    let task = super::store(ctx).update(params.id, &draft).await?;
    output(&task, flags.format)
}

fn validate_update_params(params: &Params<'_>) -> anyhow::Result<()> {
    if params.title.is_none() && params.description.is_none() {
        anyhow::bail!("At least one of --title or --description must be provided");
    }
    Ok(())
}

fn merge_draft(current: &Task, params: &Params<'_>) -> TaskDraft {
    TaskDraft::new(
        params.title.unwrap_or(&current.title),
        params.description.unwrap_or(&current.description),
    )
}
