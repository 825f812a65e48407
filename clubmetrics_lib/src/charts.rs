//! Chart view-model builders for the dashboard.
//!
//! All functions are pure: they borrow the fetched document, never mutate
//! it, and derive the exact shapes the rendering layer consumes. Nothing is
//! memoized; callers re-derive on every selection change, which is cheap at
//! dashboard sizes.

use clubmetrics_api::types::{Company, CompanyData, CompanyId};
use serde::Serialize;

use crate::error::ClubMetricsError;

/// A revenue series for one company, aligned to a shared year axis.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyTrend {
    pub company_id: CompanyId,
    pub label: String,
    /// One slot per axis year. `None` where the company reported nothing
    /// that year; a reported zero stays `Some(0.0)`.
    pub values: Vec<Option<f64>>,
}

/// Multi-company annual revenue comparison on a shared year axis.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueTrend {
    pub years: Vec<i32>,
    pub series: Vec<CompanyTrend>,
}

/// Per-period series for the selected company, labels in document order.
#[derive(Debug, Clone, Serialize)]
pub struct QuarterlySeries {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub memberships_sold: Vec<i64>,
    pub avg_duration_minutes: Vec<Option<f64>>,
    pub profit_margin: Vec<Option<f64>>,
}

/// Category labels and values for the proportional (pie) chart.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Display row for the employee table.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRow {
    pub name: String,
    pub role: String,
    /// Compensation with grouped thousands, e.g. `52,000`.
    pub salary: String,
    pub hired_date: Option<String>,
}

/// Resolves the selected company, failing explicitly instead of
/// dereferencing a stale id.
pub fn find_company(data: &CompanyData, id: CompanyId) -> Result<&Company, ClubMetricsError> {
    data.companies
        .iter()
        .find(|c| c.id == id)
        .ok_or(ClubMetricsError::CompanyNotFound(id))
}

/// Ascending, duplicate-free union of the years reported by any company.
///
/// Shared by every trend series so multiple companies stay comparable even
/// with gaps in their reporting.
pub fn year_axis(companies: &[Company]) -> Vec<i32> {
    let mut years: Vec<i32> = companies
        .iter()
        .flat_map(|c| c.annual_summary.iter().map(|s| s.year))
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Builds the multi-company revenue trend on the shared year axis.
///
/// Every series has exactly one slot per axis year, so chart labels and
/// values cannot misalign.
pub fn revenue_trend(data: &CompanyData) -> RevenueTrend {
    let years = year_axis(&data.companies);
    let series = data
        .companies
        .iter()
        .map(|company| CompanyTrend {
            company_id: company.id,
            label: company.name.clone(),
            values: years
                .iter()
                .map(|year| {
                    company
                        .annual_summary
                        .iter()
                        .find(|s| s.year == *year)
                        .map(|s| s.total_revenue)
                })
                .collect(),
        })
        .collect();
    RevenueTrend { years, series }
}

/// Builds the per-period bar series for one company.
///
/// The label axis is the document's own key order, not re-sorted; the
/// numeric series are parallel to it.
pub fn quarterly_performance(company: &Company) -> QuarterlySeries {
    let size = company.performance.len();
    let mut series = QuarterlySeries {
        labels: Vec::with_capacity(size),
        revenue: Vec::with_capacity(size),
        memberships_sold: Vec::with_capacity(size),
        avg_duration_minutes: Vec::with_capacity(size),
        profit_margin: Vec::with_capacity(size),
    };
    for (label, point) in company.performance.iter() {
        series.labels.push(label.to_string());
        series.revenue.push(point.revenue);
        series.memberships_sold.push(point.memberships_sold);
        series.avg_duration_minutes.push(point.avg_duration_minutes);
        series.profit_margin.push(point.profit_margin);
    }
    series
}

/// Category shares from the company's first annual-summary entry.
///
/// Returns `None` when the company has no summaries or the first entry's
/// distribution is empty; the caller renders an empty-state instead of an
/// empty chart.
pub fn revenue_distribution(company: &Company) -> Option<DistributionSeries> {
    let first = company.annual_summary.first()?;
    if first.revenue_distribution.is_empty() {
        return None;
    }
    let (labels, values) = first
        .revenue_distribution
        .iter()
        .map(|(label, value)| (label.clone(), *value))
        .unzip();
    Some(DistributionSeries { labels, values })
}

/// Pass-through employee rows with display-formatted compensation.
pub fn employee_rows(company: &Company) -> Vec<EmployeeRow> {
    company
        .employees
        .iter()
        .map(|e| EmployeeRow {
            name: e.name.clone(),
            role: e.role.clone(),
            salary: format_thousands(e.cashmoneh),
            hired_date: e.hired_date.clone(),
        })
        .collect()
}

/// Formats a number with grouped thousands, e.g. `1,250,000`.
///
/// Rounds to the nearest whole unit; no currency conversion.
pub fn format_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clubmetrics_api::types::CompanyData;

    fn load_fixture_document() -> CompanyData {
        let json = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../clubmetrics_api/tests/fixtures/companies.json"
        ))
        .unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_find_company_resolves_exact_id() {
        let data = load_fixture_document();
        let company = find_company(&data, 2).unwrap();
        assert_eq!(company.id, 2);
        assert_eq!(company.name, "AquaVida Wellness");
    }

    #[test]
    fn test_find_company_stale_id_is_explicit_error() {
        let data = load_fixture_document();
        match find_company(&data, 99) {
            Err(ClubMetricsError::CompanyNotFound(99)) => {}
            other => panic!("expected CompanyNotFound, got {:?}", other.map(|c| c.id)),
        }
    }

    #[test]
    fn test_year_axis_is_sorted_union_without_duplicates() {
        let data = load_fixture_document();
        // Company 1 reports 2021 and 2023, company 2 reports 2021-2023.
        assert_eq!(year_axis(&data.companies), vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_year_axis_empty_companies() {
        assert!(year_axis(&[]).is_empty());
    }

    #[test]
    fn test_revenue_trend_aligns_every_series_to_the_axis() {
        let data = load_fixture_document();
        let trend = revenue_trend(&data);

        assert_eq!(trend.years, vec![2021, 2022, 2023]);
        assert_eq!(trend.series.len(), 2);
        for series in &trend.series {
            assert_eq!(series.values.len(), trend.years.len());
        }

        let iron_peak = &trend.series[0];
        assert_eq!(iron_peak.label, "Iron Peak Fitness");
        assert_eq!(
            iron_peak.values,
            vec![Some(310500.0), None, Some(402000.5)]
        );
    }

    #[test]
    fn test_revenue_trend_reported_zero_is_not_absent() {
        let data = load_fixture_document();
        let trend = revenue_trend(&data);

        // AquaVida reported 0.0 for 2021; that is a value, not a gap.
        let aqua_vida = &trend.series[1];
        assert_eq!(
            aqua_vida.values,
            vec![Some(0.0), Some(164850.5), Some(188000.0)]
        );
    }

    #[test]
    fn test_quarterly_labels_keep_document_order() {
        let data = load_fixture_document();
        let company = find_company(&data, 1).unwrap();
        let series = quarterly_performance(company);

        assert_eq!(
            series.labels,
            vec!["2023_Q1", "2023_Q2", "2023_Q3", "2023_Q4"]
        );
        assert_eq!(series.revenue, vec![95000.0, 104500.5, 99000.0, 103500.0]);
        assert_eq!(series.memberships_sold, vec![380, 410, 395, 420]);
        assert_eq!(series.avg_duration_minutes[1], Some(88.0));
        assert_eq!(series.profit_margin[3], Some(22.3));
    }

    #[test]
    fn test_quarterly_series_stay_parallel_without_optional_metrics() {
        let data = load_fixture_document();
        let company = find_company(&data, 2).unwrap();
        let series = quarterly_performance(company);

        assert_eq!(series.labels.len(), 4);
        assert_eq!(series.revenue.len(), 4);
        assert_eq!(series.memberships_sold.len(), 4);
        assert!(series.avg_duration_minutes.iter().all(|v| v.is_none()));
        assert!(series.profit_margin.iter().all(|v| v.is_none()));
    }

    #[test]
    fn test_distribution_uses_first_summary_entry() {
        let data = load_fixture_document();
        let company = find_company(&data, 1).unwrap();
        let dist = revenue_distribution(company).unwrap();

        assert_eq!(dist.labels, vec!["gym", "personal_training", "pool"]);
        assert_eq!(dist.values, vec![45.5, 24.3, 30.2]);
    }

    #[test]
    fn test_distribution_empty_first_entry_is_empty_state() {
        let data = load_fixture_document();
        // AquaVida's first summary year has an empty distribution, even
        // though later years have one.
        let company = find_company(&data, 2).unwrap();
        assert!(revenue_distribution(company).is_none());
    }

    #[test]
    fn test_distribution_without_summaries_is_empty_state() {
        let json = serde_json::json!({"id": 3, "name": "Shell Gym"});
        let company: clubmetrics_api::types::Company = serde_json::from_value(json).unwrap();
        assert!(revenue_distribution(&company).is_none());
    }

    #[test]
    fn test_employee_rows_format_salary_for_display() {
        let data = load_fixture_document();
        let rows = employee_rows(find_company(&data, 2).unwrap());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Sofia Reyes");
        assert_eq!(rows[0].salary, "1,250,000");
        assert_eq!(rows[0].hired_date.as_deref(), Some("2020-01-10"));
        assert_eq!(rows[1].salary, "0");
        assert!(rows[1].hired_date.is_none());
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(48500.0), "48,500");
        assert_eq!(format_thousands(1250000.0), "1,250,000");
        assert_eq!(format_thousands(72000.49), "72,000");
        assert_eq!(format_thousands(-5000.0), "-5,000");
    }

    #[test]
    fn test_transformer_is_deterministic() {
        let data = load_fixture_document();
        let first = serde_json::to_value(revenue_trend(&data)).unwrap();
        let second = serde_json::to_value(revenue_trend(&data)).unwrap();
        assert_eq!(first, second);
    }
}
