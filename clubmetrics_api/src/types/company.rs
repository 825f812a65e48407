use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PerformanceMap, Transaction};

/// Unique company identifier within one fetched document.
pub type CompanyId = i64;

/// The full analytics document returned by `/api/data/all`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyData {
    pub companies: Vec<Company>,
}

/// A business entity with financial, personnel, and transactional records.
///
/// Everything below is a read-only snapshot: it lives exactly as long as
/// the fetched document it came from.
#[derive(Debug, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,

    pub name: String,

    /// One entry per reported year. Years are not necessarily contiguous
    /// or sorted in the document.
    #[serde(default)]
    pub annual_summary: Vec<AnnualSummary>,

    #[serde(default)]
    pub performance: PerformanceMap,

    #[serde(default)]
    pub employees: Vec<Employee>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// One year's aggregate revenue and category breakdown for a company.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub year: i32,

    pub total_revenue: f64,

    /// Category label to numeric share. Keys vary per company and year
    /// and the mapping may be empty.
    #[serde(default)]
    pub revenue_distribution: BTreeMap<String, f64>,

    #[serde(default)]
    pub total_memberships: Option<i64>,

    #[serde(default)]
    pub top_location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,

    pub name: String,

    pub role: String,

    /// Compensation as reported upstream. Display-only.
    pub cashmoneh: f64,

    #[serde(default)]
    pub hired_date: Option<String>,
}
