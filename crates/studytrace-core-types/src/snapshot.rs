//! Summary snapshot types - the aggregate produced from an event sequence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element::{ElementId, ElementType, LearningMode};
use crate::reference::ElementReferences;

/// An element that sits somewhere on the path between a snapshot's element
/// and the collection root.
///
/// A `PathNode` is a descriptive copy of one ancestor's identity taken at
/// resolution time; it is never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    /// Ancestor title at resolution time
    pub title: String,
    /// Ancestor element id
    pub element_id: ElementId,
    /// Ancestor element type
    pub element_type: ElementType,
}

/// Aggregates low-level interaction events into a snapshot that summarises
/// the user's activity on one element over a closed `[start, end]` interval.
///
/// A snapshot is built once, from a finalized event list, and never mutated.
/// Element fields (`title`, `element_type`, `deleted`, concept, path) reflect
/// the element's registry state *at construction time*, not at event time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    // Time information
    /// Timestamp of the first event
    pub start_timestamp: DateTime<Utc>,
    /// Timestamp of the last event
    pub end_timestamp: DateTime<Utc>,
    /// `end - start`, in seconds; zero when the timestamps coincide
    pub duration_seconds: f64,

    // Element information
    /// Element all events in the batch belong to
    pub element_id: ElementId,
    /// Element title at construction time
    pub title: String,
    /// Element type at construction time
    pub element_type: ElementType,
    /// Associated concept id, or `-1` when the element has no concept
    pub concept_id: i64,
    /// Associated concept name, or empty when the element has no concept
    pub concept_name: String,
    /// Ancestor chain, nearest ancestor first, collection root last
    pub full_path: Vec<PathNode>,
    /// Whether the element was deleted by construction time
    pub deleted: bool,
    /// References extracted from the raw last content
    pub references: ElementReferences,
    /// Change in the element's number of children across the batch
    pub children_delta: i64,

    // Element content
    /// Normalized content of the earliest content-bearing event
    pub first_content: String,
    /// Normalized content of the latest content-bearing event
    pub last_content: String,
    /// Serialized diff transforming `first_content` into `last_content`
    pub diffed_content: String,

    // Session information
    /// Collection the session was operating on
    pub collection_name: String,
    /// Learning mode at construction time
    pub learning_mode: LearningMode,
}

impl std::fmt::Display for SummarySnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[\nstart: {},\nend: {},\nelid: {},\nduration: {},\ncontent_diff: {},\n]",
            self.start_timestamp,
            self.end_timestamp,
            self.element_id,
            self.duration_seconds,
            self.diffed_content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SummarySnapshot {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 10, 0, 0).unwrap();
        SummarySnapshot {
            start_timestamp: start,
            end_timestamp: start + chrono::Duration::seconds(30),
            duration_seconds: 30.0,
            element_id: 42,
            title: "Cats".to_string(),
            element_type: ElementType::Topic,
            concept_id: -1,
            concept_name: String::new(),
            full_path: vec![PathNode {
                title: "Biology".to_string(),
                element_id: 7,
                element_type: ElementType::ConceptGroup,
            }],
            deleted: false,
            references: ElementReferences::default(),
            children_delta: 1,
            first_content: "cat".to_string(),
            last_content: "cats".to_string(),
            diffed_content: "{}".to_string(),
            collection_name: "zoology".to_string(),
            learning_mode: LearningMode::Standard,
        }
    }

    #[test]
    fn test_display_contains_identity() {
        let rendered = sample().to_string();

        assert!(rendered.contains("elid: 42"));
        assert!(rendered.contains("duration: 30"));
    }

    #[test]
    fn test_serde_round_trip() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SummarySnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
    }
}
