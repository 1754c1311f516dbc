use crate::cli::GlobalFlags;
use crate::commands::shared::listing;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    task_id: &str,
    page: Option<u32>,
    all: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = super::store(ctx, task_id);
    let response = listing::load(&store, page, all).await?;
    output(&response, flags.format)
}
