//! The `distribution` subcommand: revenue category shares for one company.
//!
//! Uses the company's first annual-summary entry. A missing or empty
//! distribution renders the defined empty-state line, not an error.

use anyhow::Result;
use clap::Args;
use clubmetrics_lib::{charts, Client};

use crate::output::{build_distribution_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct DistributionArgs {
    /// Company id to report on
    #[arg(long, default_value = "1")]
    pub company: i64,
}

pub async fn run(args: &DistributionArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let company = super::select_company(&data, args.company)?;
    let dist = charts::revenue_distribution(company);

    if let OutputFormat::Json = format {
        print_json(&dist);
        return Ok(());
    }

    match dist {
        Some(dist) => {
            let rows = build_distribution_rows(&dist);
            print_rows(&rows, format)
        }
        None => {
            println!("No distribution data available for {}", company.name);
            Ok(())
        }
    }
}
