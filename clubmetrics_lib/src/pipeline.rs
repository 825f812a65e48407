//! Transaction filtering and ordering for the dashboard table.
//!
//! Stateless per invocation: the caller owns the filter selections and
//! passes them in on every derivation. Filtering composes equality
//! constraints with AND semantics; ordering is a fixed descending date
//! sort.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clubmetrics_api::types::Transaction;
use serde::{Deserialize, Serialize};

use crate::error::ClubMetricsError;

/// The closed set of filterable transaction fields.
///
/// Each variant carries its own extractor instead of indexing records by a
/// field-name string, so a typo cannot silently filter on nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Activity,
    MembershipType,
}

impl FilterField {
    /// All filterable fields, in selector display order.
    pub const ALL: [FilterField; 2] = [FilterField::Activity, FilterField::MembershipType];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Activity => "Activity",
            FilterField::MembershipType => "Membership Type",
        }
    }

    fn extract<'a>(&self, tx: &'a Transaction) -> &'a str {
        match self {
            FilterField::Activity => &tx.activity,
            FilterField::MembershipType => &tx.membership_type,
        }
    }
}

impl FromStr for FilterField {
    type Err = ClubMetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activity" => Ok(FilterField::Activity),
            "membership_type" | "membership-type" => Ok(FilterField::MembershipType),
            other => Err(ClubMetricsError::InvalidFilter(other.to_string())),
        }
    }
}

/// Active equality filters for the transaction table.
///
/// `None` or an empty string means the field is unconstrained; constrained
/// fields must match exactly. The selections are scoped to one company and
/// reset when the selection changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    pub activity: Option<String>,
    pub membership_type: Option<String>,
}

impl TransactionFilters {
    pub fn is_empty(&self) -> bool {
        FilterField::ALL
            .iter()
            .all(|field| self.constraint(*field).is_none())
    }

    fn constraint(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::Activity => self.activity.as_deref(),
            FilterField::MembershipType => self.membership_type.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// Sorted, duplicate-free values observed for a filterable field.
///
/// Populates the filter selector options.
pub fn distinct_values(transactions: &[Transaction], field: FilterField) -> Vec<String> {
    let mut values: Vec<String> = transactions
        .iter()
        .map(|tx| field.extract(tx).to_string())
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Keeps transactions whose constrained fields match exactly.
///
/// An empty filter set returns the input unchanged.
pub fn apply_filters<'a>(
    transactions: &'a [Transaction],
    filters: &TransactionFilters,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| {
            FilterField::ALL
                .iter()
                .all(|field| match filters.constraint(*field) {
                    Some(value) => field.extract(tx) == value,
                    None => true,
                })
        })
        .collect()
}

/// Orders transactions by parsed date, most recent first.
///
/// The sort is stable, so equal timestamps keep their input order.
/// Unparseable dates order as the earliest possible value.
pub fn sort_by_date_desc(mut transactions: Vec<&Transaction>) -> Vec<&Transaction> {
    transactions.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
    transactions
}

/// Parses the date shapes the provider emits: RFC 3339 timestamps, naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps, or plain `YYYY-MM-DD` dates.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
