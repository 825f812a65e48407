//! Error types for the library layer.

use std::fmt;

use clubmetrics_api::types::CompanyId;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding selection and filter validation failures.
#[derive(Debug)]
pub enum ClubMetricsError {
    /// An error from the underlying API client.
    Api(clubmetrics_api::Error),
    /// The selected company id does not exist in the fetched document.
    CompanyNotFound(CompanyId),
    /// A filter field name outside the allow-list.
    InvalidFilter(String),
}

impl fmt::Display for ClubMetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::CompanyNotFound(id) => {
                write!(f, "Company {} not found in the fetched document", id)
            }
            Self::InvalidFilter(name) => write!(
                f,
                "Unknown filter field: {} (expected activity or membership-type)",
                name
            ),
        }
    }
}

impl std::error::Error for ClubMetricsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<clubmetrics_api::Error> for ClubMetricsError {
    fn from(e: clubmetrics_api::Error) -> Self {
        Self::Api(e)
    }
}
