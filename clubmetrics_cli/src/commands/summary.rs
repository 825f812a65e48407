//! The `summary` subcommand: per-year aggregates for one company.

use anyhow::Result;
use clap::Args;
use clubmetrics_lib::Client;

use crate::output::{build_summary_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct SummaryArgs {
    /// Company id to summarize
    #[arg(long, default_value = "1")]
    pub company: i64,
}

pub async fn run(args: &SummaryArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let company = super::select_company(&data, args.company)?;

    if let OutputFormat::Json = format {
        print_json(&company.annual_summary);
        return Ok(());
    }

    let rows = build_summary_rows(company);
    print_rows(&rows, format)
}
