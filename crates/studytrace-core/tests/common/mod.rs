use chrono::{DateTime, Duration, TimeZone, Utc};
use studytrace_core::{Element, FixedSession, InMemoryRegistry};
use studytrace_core_types::{ElementType, Event, EventOrigin, LearningMode};

/// Fixed base instant all test events are offset from
#[allow(dead_code)]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

/// Create an event at `base_time() + offset_secs` for the given element.
#[allow(dead_code)]
pub fn event_at(offset_secs: i64, element_id: i64, content: Option<&str>) -> Event {
    let mut event = Event::new(
        element_id,
        EventOrigin::EditedElement,
        content.map(str::to_string),
    );
    event.timestamp = base_time() + Duration::seconds(offset_secs);
    event
}

/// Same as `event_at`, with an explicit children count.
#[allow(dead_code)]
pub fn event_with_children(
    offset_secs: i64,
    element_id: i64,
    content: Option<&str>,
    children_count: i64,
) -> Event {
    let mut event = event_at(offset_secs, element_id, content);
    event.children_count = children_count;
    event
}

/// Registry holding a three-level hierarchy:
/// `Zoology (1, ConceptGroup) -> Mammals (10, Topic) -> Cats (42, Topic)`
#[allow(dead_code)]
pub fn registry_with_tree() -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();

    let root = Element::new(1, "Zoology", ElementType::ConceptGroup);
    let mut mid = Element::new(10, "Mammals", ElementType::Topic);
    mid.parent_id = Some(1);
    let mut leaf = Element::new(42, "Cats", ElementType::Topic);
    leaf.parent_id = Some(10);

    registry.insert(root);
    registry.insert(mid);
    registry.insert(leaf);
    registry
}

/// Standard-mode session over the "zoology" collection
#[allow(dead_code)]
pub fn standard_session() -> FixedSession {
    FixedSession::new("zoology", LearningMode::Standard)
}
