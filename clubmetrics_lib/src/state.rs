//! Dashboard UI state: the selected company and active filters.
//!
//! The presentation layer owns one of these and passes it into the pure
//! derivation functions. It is plain serializable data, not a cache;
//! nothing derived from the document is stored here.

use clubmetrics_api::types::{Company, CompanyData, CompanyId};
use serde::{Deserialize, Serialize};

use crate::pipeline::TransactionFilters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardState {
    pub selected_company: CompanyId,
    pub filters: TransactionFilters,
}

impl DashboardState {
    pub fn new(selected_company: CompanyId) -> Self {
        Self {
            selected_company,
            filters: TransactionFilters::default(),
        }
    }

    /// Switches the selection. Filter selections are scoped to a company,
    /// so changing company resets them to empty.
    pub fn select_company(&mut self, id: CompanyId) {
        if self.selected_company != id {
            self.filters = TransactionFilters::default();
        }
        self.selected_company = id;
    }

    /// Resolves the current selection against a fetched document, falling
    /// back to the document's first company when the id is stale.
    ///
    /// Returns `None` only for a document with no companies at all.
    pub fn resolve<'a>(&self, data: &'a CompanyData) -> Option<&'a Company> {
        let exact = data
            .companies
            .iter()
            .find(|c| c.id == self.selected_company);
        if exact.is_none() && !data.companies.is_empty() {
            tracing::warn!(
                "selected company {} not in document, falling back to first",
                self.selected_company
            );
        }
        exact.or_else(|| data.companies.first())
    }
}
