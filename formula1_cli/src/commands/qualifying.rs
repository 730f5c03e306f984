use anyhow::Result;
use clap::Args;
use formula1_lib::{validation, QueryKind, QueryParams};

use super::{run_query, Context, FilterArgs};

#[derive(Args, Debug)]
pub struct QualifyingArgs {
    /// Season year (e.g. 2021) or "current"
    #[arg(long, default_value = "current")]
    pub season: String,

    /// Round number within the season
    #[arg(long)]
    pub race: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &QualifyingArgs, ctx: &Context) -> Result<()> {
    let query = QueryParams::new()
        .with_season(validation::parse_season(&args.season)?)
        .with_race(validation::parse_number("race", &args.race)?)
        .with_filters(args.filters.to_filter_set()?)
        .build_with_limits(QueryKind::QualifyingResults, &ctx.limits)?;
    run_query(&query, ctx).await
}
