use anyhow::Result;
use clap::Args;
use formula1_lib::{validation, DatasetBuilder, Param};

use super::Context;
use crate::output::print_records;

#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Seasons to include (repeatable), e.g. --season 2020 --season 2021
    #[arg(long = "season", required = true)]
    pub seasons: Vec<String>,
}

pub async fn run(args: &DatasetArgs, ctx: &Context) -> Result<()> {
    let seasons = args
        .seasons
        .iter()
        .map(|s| validation::parse_season(s))
        .collect::<Result<Vec<Param>, _>>()?;

    let rows = DatasetBuilder::new(&ctx.client)
        .with_limits(ctx.limits)
        .with_keep_urls(ctx.keep_urls)
        .build(&seasons)
        .await?;

    eprintln!("{} rows across {} season(s)", rows.len(), seasons.len());
    print_records(&rows, &ctx.format)
}
