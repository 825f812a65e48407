//! The `trends` subcommand: annual revenue comparison across companies.
//!
//! Every company's series is aligned to the shared year axis; a year a
//! company did not report renders as `-`, never as zero.

use anyhow::Result;
use clubmetrics_lib::{charts, Client};

use crate::output::{print_trend, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let trend = charts::revenue_trend(&data);
    print_trend(&trend, format)
}
