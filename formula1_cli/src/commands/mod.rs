//! CLI subcommand implementations.

pub mod dataset;
pub mod laps;
pub mod qualifying;
pub mod results;
pub mod schedule;
pub mod seasons;

use anyhow::Result;
use clap::Args;
use formula1_lib::{validation, Client, FilterSet, FormatOptions, Limits, QuerySpec};

use crate::output::{print_records, OutputFormat};

/// Settings shared by every subcommand.
pub struct Context {
    pub client: Client,
    pub limits: Limits,
    pub format: OutputFormat,
    pub keep_urls: bool,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Narrow the query, e.g. --filter drivers=hamilton (repeatable).
    /// Keys: circuits, constructors, drivers, grid, results, fastest, status
    #[arg(long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter_set(&self) -> Result<FilterSet> {
        Ok(validation::parse_filters(&self.filters)?)
    }
}

/// Executes a validated query and prints its records.
pub async fn run_query(query: &QuerySpec, ctx: &Context) -> Result<()> {
    tracing::debug!("Query URL: {}", query.build_url());
    let options = FormatOptions::default().with_keep_urls(ctx.keep_urls);
    let records = ctx.client.execute_with(query, options).await?;
    eprintln!("{} records", records.len());
    print_records(&records, &ctx.format)
}
