//! The `transactions` subcommand: the filter/sort pipeline over one
//! company's transactions.
//!
//! Filters compose with AND semantics over the allow-listed fields and the
//! result is always sorted by date, most recent first. `--list-filters`
//! prints the distinct values available to each selector instead.

use anyhow::Result;
use clap::Args;
use clubmetrics_lib::{pipeline, Client, FilterField, TransactionFilters};

use crate::output::{
    build_filter_option_rows, build_transaction_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct TransactionsArgs {
    /// Company id to report on
    #[arg(long, default_value = "1")]
    pub company: i64,

    /// Keep only transactions with this exact activity
    #[arg(long)]
    pub activity: Option<String>,

    /// Keep only transactions with this exact membership type
    #[arg(long)]
    pub membership_type: Option<String>,

    /// List the distinct values available to each filter and exit
    #[arg(long)]
    pub list_filters: bool,

    /// Print the distinct values of one filterable field (activity or
    /// membership-type) and exit
    #[arg(long, value_name = "FIELD", conflicts_with = "list_filters")]
    pub distinct: Option<String>,
}

pub async fn run(args: &TransactionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let data = super::fetch_document(client).await?;
    let company = super::select_company(&data, args.company)?;

    if let Some(field_name) = &args.distinct {
        let field: FilterField = field_name.parse()?;
        let values = pipeline::distinct_values(&company.transactions, field);

        if let OutputFormat::Json = format {
            print_json(&values);
            return Ok(());
        }

        let rows = build_filter_option_rows(&[(field.label(), values)]);
        return print_rows(&rows, format);
    }

    if args.list_filters {
        let options: Vec<(&str, Vec<String>)> = FilterField::ALL
            .iter()
            .map(|field| {
                (
                    field.label(),
                    pipeline::distinct_values(&company.transactions, *field),
                )
            })
            .collect();

        if let OutputFormat::Json = format {
            let json: serde_json::Map<String, serde_json::Value> = options
                .into_iter()
                .map(|(label, values)| (label.to_string(), serde_json::json!(values)))
                .collect();
            print_json(&json);
            return Ok(());
        }

        let rows = build_filter_option_rows(&options);
        return print_rows(&rows, format);
    }

    let filters = TransactionFilters {
        activity: args.activity.clone(),
        membership_type: args.membership_type.clone(),
    };
    let sorted = pipeline::sort_by_date_desc(pipeline::apply_filters(
        &company.transactions,
        &filters,
    ));

    if let OutputFormat::Json = format {
        print_json(&sorted);
        return Ok(());
    }

    if sorted.is_empty() {
        println!("No transactions found matching current filters");
        return Ok(());
    }

    let rows = build_transaction_rows(&sorted);
    print_rows(&rows, format)
}
