//! Low-level interaction events observed on a single element.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Source of an observed interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventOrigin {
    /// The element shown in the host window changed
    DisplayChanged,
    /// Keyboard activity while the element was displayed
    Keyboard,
    /// Mouse activity while the element was displayed
    Mouse,
    /// The element's content was edited
    EditedElement,
}

/// One timestamped observation of activity on an element.
///
/// Events are produced continuously by the host as the user interacts and
/// collected into an ordered sequence per element (insertion order is
/// chronological order). An event is immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the activity was observed
    pub timestamp: DateTime<Utc>,

    /// Element the activity belongs to
    pub element_id: ElementId,

    /// Raw element content captured with the event, if any
    pub content: Option<String>,

    /// What produced the event
    pub origin: EventOrigin,

    /// Number of children the element had when the event was captured
    pub children_count: i64,
}

impl Event {
    /// Create a new event stamped with the current time and zero children.
    pub fn new(element_id: ElementId, origin: EventOrigin, content: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            element_id,
            content,
            origin,
            children_count: 0,
        }
    }

    /// Check whether this event carries non-empty content.
    pub fn has_content(&self) -> bool {
        matches!(self.content.as_deref(), Some(c) if !c.is_empty())
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[timestamp={} id={} origin={:?}]",
            self.timestamp, self.element_id, self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event() {
        let event = Event::new(42, EventOrigin::Keyboard, Some("hello".to_string()));

        assert_eq!(event.element_id, 42);
        assert_eq!(event.origin, EventOrigin::Keyboard);
        assert_eq!(event.children_count, 0);
        assert!(event.has_content());
    }

    #[test]
    fn test_has_content_empty_cases() {
        let none = Event::new(1, EventOrigin::Mouse, None);
        let empty = Event::new(1, EventOrigin::Mouse, Some(String::new()));

        assert!(!none.has_content());
        assert!(!empty.has_content());
    }

    #[test]
    fn test_display_format() {
        let event = Event::new(7, EventOrigin::DisplayChanged, None);
        let rendered = event.to_string();

        assert!(rendered.contains("id=7"));
        assert!(rendered.contains("origin=DisplayChanged"));
    }

    #[test]
    fn test_serde_round_trip() {
        let event = Event::new(3, EventOrigin::EditedElement, Some("<p>x</p>".to_string()));
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
    }
}
