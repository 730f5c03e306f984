use anyhow::Result;
use clap::Args;
use formula1_lib::{validation, QueryKind, QueryParams};

use super::{run_query, Context};

/// Lap timing queries take no filters.
#[derive(Args, Debug)]
pub struct LapsArgs {
    /// Season year (e.g. 2011) or "current"
    #[arg(long)]
    pub season: String,

    /// Round number within the season
    #[arg(long)]
    pub race: String,

    /// Lap number
    #[arg(long)]
    pub lap: String,
}

pub async fn run(args: &LapsArgs, ctx: &Context) -> Result<()> {
    let query = QueryParams::new()
        .with_season(validation::parse_season(&args.season)?)
        .with_race(validation::parse_number("race", &args.race)?)
        .with_lap(validation::parse_number("lap", &args.lap)?)
        .build_with_limits(QueryKind::LapTimes, &ctx.limits)?;
    run_query(&query, ctx).await
}
