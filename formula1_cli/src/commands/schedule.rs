use anyhow::Result;
use clap::Args;
use formula1_lib::{validation, QueryKind, QueryParams};

use super::{run_query, Context, FilterArgs};

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Season year (e.g. 2021) or "current"
    #[arg(long, default_value = "current")]
    pub season: String,

    /// Limit the schedule to a single round
    #[arg(long)]
    pub race: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &ScheduleArgs, ctx: &Context) -> Result<()> {
    let mut params = QueryParams::new()
        .with_season(validation::parse_season(&args.season)?)
        .with_filters(args.filters.to_filter_set()?);
    if let Some(race) = &args.race {
        params = params.with_race(validation::parse_number("race", race)?);
    }
    let query = params.build_with_limits(QueryKind::RaceSchedule, &ctx.limits)?;
    run_query(&query, ctx).await
}
