//! Library layer for ClubMetrics: chart view-model builders, the
//! transaction filter/sort pipeline, and the dashboard UI-state object.
//!
//! Everything here is pure and synchronous. The only asynchronous
//! operation in the system is the one-shot document fetch in
//! `clubmetrics_api`; after the document arrives, every view is re-derived
//! in full from it on each selection change.

pub mod charts;
pub mod error;
pub mod pipeline;
pub mod state;

pub use clubmetrics_api;
pub use clubmetrics_api::types;
pub use clubmetrics_api::Client;

pub use charts::{
    employee_rows, find_company, quarterly_performance, revenue_distribution, revenue_trend,
    year_axis, CompanyTrend, DistributionSeries, EmployeeRow, QuarterlySeries, RevenueTrend,
};
pub use error::ClubMetricsError;
pub use pipeline::{
    apply_filters, distinct_values, sort_by_date_desc, FilterField, TransactionFilters,
};
pub use state::DashboardState;
