//! The `employees` subcommand: the roster table for one company.

use anyhow::Result;
use clap::Args;
use clubmetrics_lib::{charts, Client};

use crate::output::{build_employee_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct EmployeesArgs {
    /// Company id to report on
    #[arg(long, default_value = "1")]
    pub company: i64,
}

pub async fn run(args: &EmployeesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let company = super::select_company(&data, args.company)?;
    let employee_rows = charts::employee_rows(company);

    if let OutputFormat::Json = format {
        print_json(&employee_rows);
        return Ok(());
    }

    let rows = build_employee_rows(&employee_rows);
    print_rows(&rows, format)
}
