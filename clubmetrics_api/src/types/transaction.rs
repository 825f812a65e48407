use serde::{Deserialize, Serialize};

/// A single dated revenue-generating event with categorical attributes.
///
/// Field names on the wire are capitalized (`Activity`, `Revenue`, ...),
/// matching the provider's CSV-derived records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Activity")]
    pub activity: String,

    #[serde(rename = "Revenue")]
    pub revenue: f64,

    /// ISO-style date string. Kept unparsed; consumers parse defensively
    /// so one malformed date cannot reject the whole document.
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Membership_Type")]
    pub membership_type: String,

    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
