use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(task_id: &str, id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comment = match ctx.client.get_comment(task_id, id).await {
        Err(error) if error.is_not_found() => {
            anyhow::bail!("comment {id} not found on task {task_id}")
        }
        result => result?,
    };
    output(&comment, flags.format)
}
