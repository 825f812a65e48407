//! The `companies` subcommand: lists the companies available for selection.

use anyhow::Result;
use clubmetrics_lib::Client;

use crate::output::{build_company_rows, print_json, print_rows, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;

    if let OutputFormat::Json = format {
        print_json(&data.companies);
        return Ok(());
    }

    let rows = build_company_rows(&data.companies);
    print_rows(&rows, format)
}
