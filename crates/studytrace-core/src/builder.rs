//! Snapshot builder.
//!
//! Turns a finalized, chronological event batch for one element into an
//! immutable [`SummarySnapshot`]. The build is a pure, sequential
//! computation: validation first, then field derivation, with the snapshot
//! constructed in one step only after every precondition holds. Collaborators
//! are injected, never reached through globals, and only ever read.

use std::time::Instant;

use studytrace_core_types::{Event, SummarySnapshot};

use crate::diff::compute_diff;
use crate::errors::{Result, SnapshotError};
use crate::normalize::normalize;
use crate::references::parse_references;
use crate::registry::{ElementRegistry, SessionState};
use crate::traversal::resolve_full_path;
use crate::{log_op_end, log_op_error, log_op_start};

/// Concept sentinel recorded when the element has no associated concept.
const NO_CONCEPT_ID: i64 = -1;

/// Builds summary snapshots from event batches.
///
/// One builder can serve any number of sequential builds; it holds only the
/// collaborator handles. Overlapping builds for the same element are the
/// host's responsibility to prevent - the engine assumes each batch is
/// closed and exclusively owned for the duration of the call.
pub struct SnapshotBuilder<'a> {
    registry: &'a dyn ElementRegistry,
    session: &'a dyn SessionState,
}

impl<'a> SnapshotBuilder<'a> {
    /// Create a builder over the given collaborators.
    pub fn new(registry: &'a dyn ElementRegistry, session: &'a dyn SessionState) -> Self {
        Self { registry, session }
    }

    /// Build one snapshot from a finalized event batch.
    ///
    /// Fails fast on the first violated precondition; no partial snapshot is
    /// ever produced. Callers should log and drop the batch on failure
    /// rather than retry it unchanged.
    ///
    /// # Errors
    ///
    /// - `InsufficientEvents` - fewer than two events supplied
    /// - `InconsistentElementId` - events reference more than one element
    /// - `InvertedTimeRange` - last event's timestamp precedes the first's
    /// - `ElementNotFound` - the registry cannot resolve the element id
    pub fn build(&self, events: &[Event]) -> Result<SummarySnapshot> {
        let started = Instant::now();
        log_op_start!("build_snapshot", event_count = events.len() as u64);

        match self.build_inner(events) {
            Ok(snapshot) => {
                log_op_end!(
                    "build_snapshot",
                    duration_ms = started.elapsed().as_millis() as u64,
                    element_id = snapshot.element_id,
                    path_len = snapshot.full_path.len() as u64
                );
                Ok(snapshot)
            }
            Err(err) => {
                log_op_error!(
                    "build_snapshot",
                    err,
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn build_inner(&self, events: &[Event]) -> Result<SummarySnapshot> {
        if events.len() < 2 {
            return Err(SnapshotError::InsufficientEvents {
                count: events.len(),
            });
        }

        // events.len() >= 2 was just checked
        let first_event = &events[0];
        let last_event = &events[events.len() - 1];

        // Every event must come from the same element
        let element_id = first_event.element_id;
        if let Some(stray) = events.iter().find(|e| e.element_id != element_id) {
            return Err(SnapshotError::InconsistentElementId {
                expected: element_id,
                found: stray.element_id,
            });
        }

        let start_timestamp = first_event.timestamp;
        let end_timestamp = last_event.timestamp;
        if start_timestamp > end_timestamp {
            return Err(SnapshotError::InvertedTimeRange {
                start: start_timestamp,
                end: end_timestamp,
            });
        }

        let element = self
            .registry
            .element(element_id)
            .ok_or(SnapshotError::ElementNotFound { element_id })?;

        let duration_seconds =
            (end_timestamp - start_timestamp).num_milliseconds() as f64 / 1000.0;

        let (concept_id, concept_name) = match &element.concept {
            Some(concept) => (concept.id, concept.name.clone()),
            None => (NO_CONCEPT_ID, String::new()),
        };

        // The first and last content-bearing events are found independently:
        // both scans run over the whole batch, so a single content-bearing
        // event supplies both sides and diffs to the identity.
        let raw_first_content = events
            .iter()
            .find(|e| e.has_content())
            .and_then(|e| e.content.clone())
            .unwrap_or_default();
        let raw_last_content = events
            .iter()
            .rev()
            .find(|e| e.has_content())
            .and_then(|e| e.content.clone())
            .unwrap_or_default();

        // References live in the raw markup; extract before normalization
        let references = parse_references(&raw_last_content);

        // Children delta uses the literal first/last events of the batch,
        // not the content-filtered ones
        let children_delta = last_event.children_count - first_event.children_count;

        let first_content = normalize(&raw_first_content);
        let last_content = normalize(&raw_last_content);
        let diffed_content = compute_diff(&first_content, &last_content).to_json();

        let full_path = resolve_full_path(self.registry, Some(&element));

        Ok(SummarySnapshot {
            start_timestamp,
            end_timestamp,
            duration_seconds,
            element_id,
            title: element.title.clone(),
            element_type: element.element_type,
            concept_id,
            concept_name,
            full_path,
            deleted: element.deleted,
            references,
            children_delta,
            first_content,
            last_content,
            diffed_content,
            collection_name: self.session.collection_name(),
            learning_mode: self.session.learning_mode(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;
    use crate::registry::{FixedSession, InMemoryRegistry};
    use chrono::{Duration, TimeZone, Utc};
    use studytrace_core_types::{ElementType, EventOrigin, LearningMode};

    fn event_at(offset_secs: i64, element_id: i64, content: Option<&str>) -> Event {
        let mut event = Event::new(
            element_id,
            EventOrigin::EditedElement,
            content.map(str::to_string),
        );
        event.timestamp = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
            + Duration::seconds(offset_secs);
        event
    }

    fn fixture() -> (InMemoryRegistry, FixedSession) {
        let mut registry = InMemoryRegistry::new();
        registry.insert(Element::new(42, "Cats", ElementType::Topic));
        let session = FixedSession::new("zoology", LearningMode::Standard);
        (registry, session)
    }

    #[test]
    fn test_single_event_is_insufficient() {
        let (registry, session) = fixture();
        let builder = SnapshotBuilder::new(&registry, &session);
        let events = vec![event_at(0, 42, None)];

        let err = builder.build(&events).unwrap_err();
        assert_eq!(err, SnapshotError::InsufficientEvents { count: 1 });
    }

    #[test]
    fn test_duration_zero_when_timestamps_coincide() {
        let (registry, session) = fixture();
        let builder = SnapshotBuilder::new(&registry, &session);
        let events = vec![event_at(0, 42, None), event_at(0, 42, None)];

        let snapshot = builder.build(&events).unwrap();
        assert_eq!(snapshot.duration_seconds, 0.0);
    }

    #[test]
    fn test_concept_sentinel_when_absent() {
        let (registry, session) = fixture();
        let builder = SnapshotBuilder::new(&registry, &session);
        let events = vec![event_at(0, 42, None), event_at(5, 42, None)];

        let snapshot = builder.build(&events).unwrap();
        assert_eq!(snapshot.concept_id, -1);
        assert_eq!(snapshot.concept_name, "");
    }
}
