use anyhow::Result;
use chrono::NaiveDateTime;
use clubmetrics_lib::charts::{format_thousands, EmployeeRow, QuarterlySeries, RevenueTrend};
use clubmetrics_lib::types::{Company, Transaction};
use clubmetrics_lib::DistributionSeries;
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct CompanyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Years")]
    #[serde(rename = "Years")]
    years: String,
    #[tabled(rename = "Employees")]
    #[serde(rename = "Employees")]
    employees: usize,
    #[tabled(rename = "Transactions")]
    #[serde(rename = "Transactions")]
    transactions: usize,
}

#[derive(Tabled, Serialize)]
pub struct SummaryRow {
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: i32,
    #[tabled(rename = "Total Revenue")]
    #[serde(rename = "Total Revenue")]
    total_revenue: String,
    #[tabled(rename = "Memberships")]
    #[serde(rename = "Memberships")]
    memberships: String,
    #[tabled(rename = "Top Location")]
    #[serde(rename = "Top Location")]
    top_location: String,
}

#[derive(Tabled, Serialize)]
pub struct QuarterRow {
    #[tabled(rename = "Period")]
    #[serde(rename = "Period")]
    period: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Memberships Sold")]
    #[serde(rename = "Memberships Sold")]
    memberships_sold: i64,
    #[tabled(rename = "Avg Duration")]
    #[serde(rename = "Avg Duration")]
    avg_duration: String,
    #[tabled(rename = "Profit Margin")]
    #[serde(rename = "Profit Margin")]
    profit_margin: String,
}

#[derive(Tabled, Serialize)]
pub struct DistributionRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Share")]
    #[serde(rename = "Share")]
    share: String,
}

#[derive(Tabled, Serialize)]
pub struct EmployeeTableRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    #[serde(rename = "Role")]
    role: String,
    #[tabled(rename = "Salary")]
    #[serde(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Hired")]
    #[serde(rename = "Hired")]
    hired: String,
}

#[derive(Tabled, Serialize)]
pub struct TransactionRow {
    #[tabled(rename = "Activity")]
    #[serde(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Revenue")]
    #[serde(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Membership Type")]
    #[serde(rename = "Membership Type")]
    membership_type: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
}

#[derive(Tabled, Serialize)]
pub struct FilterOptionRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    field: String,
    #[tabled(rename = "Values")]
    #[serde(rename = "Values")]
    values: String,
}

// -- Row builders --

pub fn build_company_rows(companies: &[Company]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            id: c.id,
            name: c.name.clone(),
            years: year_span(c),
            employees: c.employees.len(),
            transactions: c.transactions.len(),
        })
        .collect()
}

pub fn build_summary_rows(company: &Company) -> Vec<SummaryRow> {
    company
        .annual_summary
        .iter()
        .map(|s| SummaryRow {
            year: s.year,
            total_revenue: format_usd(s.total_revenue),
            memberships: s
                .total_memberships
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
            top_location: s.top_location.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_quarter_rows(series: &QuarterlySeries) -> Vec<QuarterRow> {
    series
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| QuarterRow {
            period: label.clone(),
            revenue: format_usd(series.revenue[i]),
            memberships_sold: series.memberships_sold[i],
            avg_duration: series.avg_duration_minutes[i]
                .map(|v| format!("{:.1} min", v))
                .unwrap_or_else(|| "-".to_string()),
            profit_margin: series.profit_margin[i]
                .map(|v| format!("{:.1}%", v))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_distribution_rows(dist: &DistributionSeries) -> Vec<DistributionRow> {
    dist.labels
        .iter()
        .zip(dist.values.iter())
        .map(|(label, value)| DistributionRow {
            category: label.clone(),
            share: format!("{:.1}%", value),
        })
        .collect()
}

pub fn build_employee_rows(rows: &[EmployeeRow]) -> Vec<EmployeeTableRow> {
    rows.iter()
        .map(|r| EmployeeTableRow {
            name: r.name.clone(),
            role: r.role.clone(),
            salary: format!("${}", r.salary),
            hired: r.hired_date.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_transaction_rows(transactions: &[&Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            activity: t.activity.clone(),
            date: format_date(&t.date),
            revenue: format!("${:.2}", t.revenue),
            membership_type: t.membership_type.clone(),
            location: t.location.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn build_filter_option_rows(options: &[(&str, Vec<String>)]) -> Vec<FilterOptionRow> {
    options
        .iter()
        .map(|(field, values)| FilterOptionRow {
            field: field.to_string(),
            values: values.join(", "),
        })
        .collect()
}

// -- Generic printers --

/// Renders rows in the requested format. JSON callers usually print the
/// underlying view-model instead for full fidelity.
pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Trend output (dynamic columns: one per company) --

fn trend_records(trend: &RevenueTrend) -> (Vec<String>, Vec<Vec<String>>) {
    let mut header = vec!["Year".to_string()];
    header.extend(trend.series.iter().map(|s| s.label.clone()));

    let rows = trend
        .years
        .iter()
        .enumerate()
        .map(|(i, year)| {
            let mut record = vec![year.to_string()];
            record.extend(trend.series.iter().map(|s| {
                s.values[i]
                    .map(format_usd)
                    .unwrap_or_else(|| "-".to_string())
            }));
            record
        })
        .collect();
    (header, rows)
}

pub fn print_trend(trend: &RevenueTrend, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            let (header, rows) = trend_records(trend);
            let mut builder = Builder::default();
            builder.push_record(header);
            for row in rows {
                builder.push_record(row);
            }
            let mut table = builder.build();
            if matches!(format, OutputFormat::Markdown) {
                table.with(Style::markdown());
            }
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let (header, rows) = trend_records(trend);
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(&header)?;
            for row in rows {
                wtr.write_record(&row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(trend),
    }
    Ok(())
}

// -- Formatting helpers --

fn year_span(company: &Company) -> String {
    let min = company.annual_summary.iter().map(|s| s.year).min();
    let max = company.annual_summary.iter().map(|s| s.year).max();
    match (min, max) {
        (Some(lo), Some(hi)) if lo == hi => lo.to_string(),
        (Some(lo), Some(hi)) => format!("{}-{}", lo, hi),
        _ => "-".to_string(),
    }
}

fn format_usd(value: f64) -> String {
    format!("${}", format_thousands(value))
}

/// Normalizes provider date strings for display; unparseable input is
/// shown verbatim.
fn format_date(raw: &str) -> String {
    match clubmetrics_lib::pipeline::parse_date(raw) {
        Some(dt) => short_date(dt),
        None => raw.to_string(),
    }
}

fn short_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}
