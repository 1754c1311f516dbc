use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = match ctx.client.get_task(id).await {
        Err(error) if error.is_not_found() => anyhow::bail!("task {id} not found"),
        result => result?,
    };
    output(&task, flags.format)
}
