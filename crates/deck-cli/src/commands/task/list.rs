use deck_core::filters::TaskFilters;
use deck_sync::{ListStore, TaskResource};

use crate::cli::GlobalFlags;
use crate::commands::shared::listing;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params<'a> {
    pub page: Option<u32>,
    pub all: bool,
    pub status: Option<&'a str>,
    pub search: Option<&'a str>,
    pub sort_by: Option<&'a str>,
    pub sort_order: Option<&'a str>,
}

pub async fn run(params: &Params<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filters = build_filters(params)?;
    let store = ListStore::with_filters(
        TaskResource::new(ctx.client.clone()),
        ctx.page_size,
        filters,
    );
    let response = listing::load(&store, params.page, params.all).await?;
    output(&response, flags.format)
}

fn build_filters(params: &Params<'_>) -> anyhow::Result<TaskFilters> {
    let mut filters = TaskFilters::default();
    if let Some(status) = params.status {
        filters.status = parse_enum(status, "status")?;
    }
    if let Some(sort_by) = params.sort_by {
        filters.sort_by = parse_enum(sort_by, "sort-by")?;
    }
    if let Some(sort_order) = params.sort_order {
        filters.sort_order = parse_enum(sort_order, "sort-order")?;
    }
    filters.search = params
        .search
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(str::to_string);
    Ok(filters)
}
