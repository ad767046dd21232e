//! Append-only feed of produced snapshots.

use studytrace_core_types::{SnapshotFeed, SummarySnapshot};

/// Ordered, append-only in-memory collection of summary snapshots.
///
/// The host appends one entry per successful build; downstream reporting
/// and export collaborators read through the [`SnapshotFeed`] trait.
/// Entries are never reordered or removed.
#[derive(Debug, Clone, Default)]
pub struct SessionFeed {
    snapshots: Vec<SummarySnapshot>,
}

impl SessionFeed {
    /// Create a new empty feed
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Append a snapshot to the end of the feed.
    pub fn push(&mut self, snapshot: SummarySnapshot) {
        self.snapshots.push(snapshot);
    }

    /// Number of snapshots in the feed
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if the feed is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate over the snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SummarySnapshot> {
        self.snapshots.iter()
    }
}

impl SnapshotFeed for SessionFeed {
    fn summary_snapshots(&self) -> &[SummarySnapshot] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use studytrace_core_types::{ElementReferences, ElementType, LearningMode};

    fn snapshot_for(element_id: i64) -> SummarySnapshot {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap();
        SummarySnapshot {
            start_timestamp: at,
            end_timestamp: at,
            duration_seconds: 0.0,
            element_id,
            title: String::new(),
            element_type: ElementType::Item,
            concept_id: -1,
            concept_name: String::new(),
            full_path: Vec::new(),
            deleted: false,
            references: ElementReferences::default(),
            children_delta: 0,
            first_content: String::new(),
            last_content: String::new(),
            diffed_content: String::new(),
            collection_name: String::new(),
            learning_mode: LearningMode::None,
        }
    }

    #[test]
    fn test_feed_preserves_insertion_order() {
        let mut feed = SessionFeed::new();
        feed.push(snapshot_for(1));
        feed.push(snapshot_for(2));
        feed.push(snapshot_for(3));

        let ids: Vec<i64> = feed.summary_snapshots().iter().map(|s| s.element_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(feed.len(), 3);
        assert!(!feed.is_empty());
    }
}
