//! CLI subcommand implementations.

use anyhow::{bail, Result};
use clubmetrics_lib::charts;
use clubmetrics_lib::types::{Company, CompanyData, CompanyId};
use clubmetrics_lib::Client;

pub mod companies;
pub mod distribution;
pub mod employees;
pub mod overview;
pub mod performance;
pub mod summary;
pub mod transactions;
pub mod trends;

/// Fetches the document once. Everything after this call is synchronous
/// derivation; a failure here blanks the whole run, matching the
/// dashboard's single failure path.
pub(crate) async fn fetch_document(client: &Client) -> Result<CompanyData> {
    Ok(client.get_all_data().await?)
}

/// Resolves `--company`, failing with the list of valid ids when the id is
/// stale instead of dereferencing an absent record.
pub(crate) fn select_company(data: &CompanyData, id: CompanyId) -> Result<&Company> {
    match charts::find_company(data, id) {
        Ok(company) => Ok(company),
        Err(_) => {
            if data.companies.is_empty() {
                bail!("company {} not found: the document contains no companies", id);
            }
            let available = data
                .companies
                .iter()
                .map(|c| format!("{} ({})", c.id, c.name))
                .collect::<Vec<_>>()
                .join(", ");
            bail!("company {} not found; available: {}", id, available);
        }
    }
}
