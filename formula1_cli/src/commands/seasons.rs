use anyhow::Result;
use clap::Args;
use formula1_lib::{QueryKind, QueryParams};

use super::{run_query, Context, FilterArgs};

#[derive(Args, Debug)]
pub struct SeasonsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &SeasonsArgs, ctx: &Context) -> Result<()> {
    let query = QueryParams::new()
        .with_filters(args.filters.to_filter_set()?)
        .build_with_limits(QueryKind::SeasonList, &ctx.limits)?;
    run_query(&query, ctx).await
}
