//! Sandwich-collection arithmetic.
//!
//! Group collections are stored as a free-form JSON blob in a single cell.
//! The expected shape is an array of `{ "groupName": ..., "sandwichCount": n }`
//! objects; anything else contributes zero sandwiches.

use serde::{Deserialize, Serialize};

/// One group's contribution inside a collection's `groupCollections` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCollection {
    #[serde(rename = "groupName", alias = "name", default)]
    pub group_name: String,
    #[serde(rename = "sandwichCount", alias = "count", default)]
    pub sandwich_count: i64,
}

/// Parse a `groupCollections` blob.
///
/// Blank blobs and the literal `[]` parse to an empty list. Returns `None`
/// when the blob is not valid group JSON.
pub fn parse_group_collections(raw: &str) -> Option<Vec<GroupCollection>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Vec::new());
    }
    serde_json::from_str(trimmed).ok()
}

/// Total sandwiches across all groups in a blob; unparsable blobs count 0.
///
/// Negative counts count 0 and the total saturates at `i64::MAX`.
pub fn group_total(raw: &str) -> i64 {
    parse_group_collections(raw)
        .map(|groups| {
            groups
                .iter()
                .fold(0i64, |acc, g| acc.saturating_add(g.sandwich_count.max(0)))
        })
        .unwrap_or(0)
}

/// Aggregate totals over a set of collection entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionStats {
    pub total_entries: i64,
    pub individual_sandwiches: i64,
    pub group_sandwiches: i64,
    pub total_sandwiches: i64,
}

impl CollectionStats {
    /// Fold one entry into the totals. Hand-edited negative counts count 0
    /// and every total saturates instead of overflowing.
    pub fn add(&mut self, individual: i64, group_blob: &str) {
        let individual = individual.max(0);
        let group = group_total(group_blob);
        self.total_entries = self.total_entries.saturating_add(1);
        self.individual_sandwiches = self.individual_sandwiches.saturating_add(individual);
        self.group_sandwiches = self.group_sandwiches.saturating_add(group);
        self.total_sandwiches = self
            .total_sandwiches
            .saturating_add(individual.saturating_add(group));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_group_counts() {
        let raw = r#"[{"groupName":"Church","sandwichCount":120},{"groupName":"School","sandwichCount":30}]"#;
        assert_eq!(group_total(raw), 150);
    }

    #[test]
    fn accepts_short_key_names() {
        let raw = r#"[{"name":"Scouts","count":12}]"#;
        let groups = parse_group_collections(raw).unwrap();
        assert_eq!(groups[0].group_name, "Scouts");
        assert_eq!(group_total(raw), 12);
    }

    #[test]
    fn blank_and_garbage_blobs_count_zero() {
        assert_eq!(group_total(""), 0);
        assert_eq!(group_total("[]"), 0);
        assert_eq!(group_total("two bags"), 0);
        assert!(parse_group_collections("two bags").is_none());
    }

    #[test]
    fn stats_accumulate_individual_and_group() {
        let mut stats = CollectionStats::default();
        stats.add(40, r#"[{"groupName":"A","sandwichCount":10}]"#);
        stats.add(5, "");
        assert_eq!(
            stats,
            CollectionStats {
                total_entries: 2,
                individual_sandwiches: 45,
                group_sandwiches: 10,
                total_sandwiches: 55,
            }
        );
    }

    #[test]
    fn stats_ignore_negative_counts_and_saturate() {
        let mut stats = CollectionStats::default();
        stats.add(-20, r#"[{"groupName":"A","sandwichCount":-5}]"#);
        assert_eq!(stats.total_sandwiches, 0);

        stats.add(i64::MAX, "");
        stats.add(i64::MAX, r#"[{"groupName":"B","sandwichCount":9223372036854775807},{"groupName":"C","sandwichCount":1}]"#);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.individual_sandwiches, i64::MAX);
        assert_eq!(stats.group_sandwiches, i64::MAX);
        assert_eq!(stats.total_sandwiches, i64::MAX);
    }
}
