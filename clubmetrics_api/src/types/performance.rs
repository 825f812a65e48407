use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-period (e.g. quarterly) revenue and membership-count snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub revenue: f64,

    pub memberships_sold: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_duration_minutes: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<f64>,
}

/// Period label to [`PerformancePoint`], preserving the document's key order.
///
/// The period axis of the quarterly chart is the iteration order of this
/// map, so deserialization must not re-sort or re-hash the keys. Entries
/// are kept in an ordered vector and looked up linearly; a company has a
/// handful of quarters, never enough to justify a hash map.
#[derive(Debug, Clone, Default)]
pub struct PerformanceMap(Vec<(String, PerformancePoint)>);

impl PerformanceMap {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Period labels in document order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(label, _)| label.as_str())
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PerformancePoint)> {
        self.0.iter().map(|(label, point)| (label.as_str(), point))
    }

    pub fn get(&self, label: &str) -> Option<&PerformancePoint> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == label)
            .map(|(_, point)| point)
    }
}

impl From<Vec<(String, PerformancePoint)>> for PerformanceMap {
    fn from(entries: Vec<(String, PerformancePoint)>) -> Self {
        Self(entries)
    }
}

impl Serialize for PerformanceMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, point) in &self.0 {
            map.serialize_entry(label, point)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PerformanceMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PerformanceMapVisitor;

        impl<'de> Visitor<'de> for PerformanceMapVisitor {
            type Value = PerformanceMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of period labels to performance points")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, point)) = access.next_entry()? {
                    entries.push((label, point));
                }
                Ok(PerformanceMap(entries))
            }
        }

        deserializer.deserialize_map(PerformanceMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_document_key_order() {
        let json = r#"{
            "2023_Q4": {"revenue": 4.0, "memberships_sold": 40},
            "2023_Q1": {"revenue": 1.0, "memberships_sold": 10},
            "2023_Q3": {"revenue": 3.0, "memberships_sold": 30}
        }"#;
        let map: PerformanceMap = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = map.labels().collect();
        assert_eq!(labels, vec!["2023_Q4", "2023_Q1", "2023_Q3"]);
    }

    #[test]
    fn roundtrips_in_order() {
        let json = r#"{"2022_Q1":{"revenue":1.5,"memberships_sold":5},"2022_Q2":{"revenue":2.5,"memberships_sold":7}}"#;
        let map: PerformanceMap = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&map).unwrap();
        assert_eq!(out, json);
    }

    #[test]
    fn optional_metrics_default_to_none() {
        let json = r#"{"2022_Q1": {"revenue": 1.0, "memberships_sold": 2}}"#;
        let map: PerformanceMap = serde_json::from_str(json).unwrap();
        let point = map.get("2022_Q1").unwrap();
        assert!(point.avg_duration_minutes.is_none());
        assert!(point.profit_margin.is_none());
    }

    #[test]
    fn lookup_miss_is_none() {
        let map = PerformanceMap::default();
        assert!(map.is_empty());
        assert!(map.get("2023_Q1").is_none());
    }
}
