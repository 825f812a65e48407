mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clubmetrics_lib::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "clubmetrics")]
#[command(about = "Render club company analytics from the data provider")]
struct Cli {
    /// Output format: table, markdown, csv, or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the companies in the document
    Companies,
    /// Annual revenue comparison across all companies
    Trends,
    /// Per-year aggregates for one company
    Summary(commands::summary::SummaryArgs),
    /// Quarterly performance for one company
    Performance(commands::performance::PerformanceArgs),
    /// Revenue distribution for one company
    Distribution(commands::distribution::DistributionArgs),
    /// Employee roster for one company
    Employees(commands::employees::EmployeesArgs),
    /// Filtered, date-sorted transactions for one company
    Transactions(commands::transactions::TransactionsArgs),
    /// The full dashboard for one company in a single run
    Overview(commands::overview::OverviewArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clubmetrics_lib=info".parse().unwrap())
                .add_directive("clubmetrics_api=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = match std::env::var("CLUBMETRICS_API_URL") {
        Ok(url) => Client::with_base_url(&url),
        Err(_) => Client::new(),
    };

    match &cli.command {
        Commands::Companies => commands::companies::run(&client, &format).await?,
        Commands::Trends => commands::trends::run(&client, &format).await?,
        Commands::Summary(args) => commands::summary::run(args, &client, &format).await?,
        Commands::Performance(args) => commands::performance::run(args, &client, &format).await?,
        Commands::Distribution(args) => {
            commands::distribution::run(args, &client, &format).await?
        }
        Commands::Employees(args) => commands::employees::run(args, &client, &format).await?,
        Commands::Transactions(args) => {
            commands::transactions::run(args, &client, &format).await?
        }
        Commands::Overview(args) => commands::overview::run(args, &client, &format).await?,
    }

    Ok(())
}
