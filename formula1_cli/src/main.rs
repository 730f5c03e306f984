mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formula1_lib::Settings;

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "formula1")]
#[command(about = "Query Formula 1 statistics from the Ergast API")]
struct Cli {
    /// Output format: table, json, csv, markdown or xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Keep the Wikipedia `url` fields in the output
    #[arg(long, global = true)]
    keep_urls: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List championship seasons
    Seasons(commands::seasons::SeasonsArgs),
    /// Show a season's race calendar
    Schedule(commands::schedule::ScheduleArgs),
    /// Show the classification of one race
    Results(commands::results::ResultsArgs),
    /// Show the qualifying results of one race
    Qualifying(commands::qualifying::QualifyingArgs),
    /// Show every driver's time on one lap
    Laps(commands::laps::LapsArgs),
    /// Build a results table for whole seasons
    Dataset(commands::dataset::DatasetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("formula1=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::from_env();
    let ctx = Context {
        client: settings.client(),
        limits: settings.limits,
        format: OutputFormat::parse(&cli.output),
        keep_urls: cli.keep_urls,
    };

    match &cli.command {
        Commands::Seasons(args) => commands::seasons::run(args, &ctx).await?,
        Commands::Schedule(args) => commands::schedule::run(args, &ctx).await?,
        Commands::Results(args) => commands::results::run(args, &ctx).await?,
        Commands::Qualifying(args) => commands::qualifying::run(args, &ctx).await?,
        Commands::Laps(args) => commands::laps::run(args, &ctx).await?,
        Commands::Dataset(args) => commands::dataset::run(args, &ctx).await?,
    }

    Ok(())
}
