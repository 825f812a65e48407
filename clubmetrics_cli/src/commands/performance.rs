//! The `performance` subcommand: quarterly metrics for one company.

use anyhow::Result;
use clap::Args;
use clubmetrics_lib::{charts, Client};

use crate::output::{build_quarter_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct PerformanceArgs {
    /// Company id to report on
    #[arg(long, default_value = "1")]
    pub company: i64,
}

pub async fn run(args: &PerformanceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let company = super::select_company(&data, args.company)?;
    let series = charts::quarterly_performance(company);

    if let OutputFormat::Json = format {
        print_json(&series);
        return Ok(());
    }

    if series.labels.is_empty() {
        println!("No performance data available for {}", company.name);
        return Ok(());
    }

    let rows = build_quarter_rows(&series);
    print_rows(&rows, format)
}
