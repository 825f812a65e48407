//! The `overview` subcommand: the whole dashboard in one run.
//!
//! Mirrors the single-page layout: revenue trend across companies, then
//! the selected company's distribution, quarterly performance, employees,
//! and recent transactions. A stale `--company` falls back to the first
//! company in the document instead of failing.

use anyhow::{bail, Result};
use clap::Args;
use clubmetrics_lib::{charts, pipeline, Client, DashboardState};

use crate::output::{
    build_distribution_rows, build_employee_rows, build_quarter_rows, build_summary_rows,
    build_transaction_rows, print_json, print_rows, print_trend, OutputFormat,
};

#[derive(Args)]
pub struct OverviewArgs {
    /// Company id to focus on
    #[arg(long, default_value = "1")]
    pub company: i64,
}

pub async fn run(args: &OverviewArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let OutputFormat::Csv = format {
        bail!("csv output is not supported for overview; pick a single panel instead");
    }

    let data = super::fetch_document(client).await?;

    let state = DashboardState::new(args.company);
    let Some(company) = state.resolve(&data) else {
        bail!("the document contains no companies");
    };

    let trend = charts::revenue_trend(&data);
    let distribution = charts::revenue_distribution(company);
    let performance = charts::quarterly_performance(company);
    let employees = charts::employee_rows(company);
    let transactions = pipeline::sort_by_date_desc(pipeline::apply_filters(
        &company.transactions,
        &state.filters,
    ));

    if let OutputFormat::Json = format {
        print_json(&serde_json::json!({
            "company": {"id": company.id, "name": &company.name},
            "revenue_trend": &trend,
            "revenue_distribution": &distribution,
            "quarterly_performance": &performance,
            "annual_summary": &company.annual_summary,
            "employees": &employees,
            "transactions": &transactions,
        }));
        return Ok(());
    }

    println!("Annual Revenue Comparison");
    print_trend(&trend, format)?;

    println!();
    println!("Annual Summary - {}", company.name);
    print_rows(&build_summary_rows(company), format)?;

    println!();
    println!("Revenue Distribution - {}", company.name);
    match &distribution {
        Some(dist) => print_rows(&build_distribution_rows(dist), format)?,
        None => println!("No distribution data available for {}", company.name),
    }

    println!();
    println!("Quarterly Performance - {}", company.name);
    if performance.labels.is_empty() {
        println!("No performance data available for {}", company.name);
    } else {
        print_rows(&build_quarter_rows(&performance), format)?;
    }

    println!();
    println!("Employees - {}", company.name);
    print_rows(&build_employee_rows(&employees), format)?;

    println!();
    println!("Recent Transactions - {}", company.name);
    if transactions.is_empty() {
        println!("No transactions found matching current filters");
    } else {
        print_rows(&build_transaction_rows(&transactions), format)?;
    }

    Ok(())
}
