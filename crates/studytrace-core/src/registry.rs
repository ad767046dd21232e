//! Collaborator interfaces the engine consumes.
//!
//! The host environment owns element identity, hierarchy, and session state.
//! The engine reaches them only through the traits below, passed into
//! [`crate::SnapshotBuilder`] at construction time, so tests can substitute
//! deterministic fakes or mocks. In-memory implementations are provided for
//! hosts that keep their registry resident and for test fixtures.

use std::collections::HashMap;

use studytrace_core_types::{ElementId, LearningMode};

use crate::model::Element;

/// Read access to the host's element hierarchy.
///
/// Lookups are expected to be fast, in-process, and side-effect-free; the
/// engine performs several per build (element resolution plus one per
/// ancestor on the path walk).
pub trait ElementRegistry {
    /// Look up an element by id. Deleted elements are still returned - the
    /// tombstone flag is part of the data a snapshot records.
    fn element(&self, id: ElementId) -> Option<Element>;
}

/// Ambient session state read at snapshot construction time.
pub trait SessionState {
    /// Name of the collection the session operates on.
    fn collection_name(&self) -> String;

    /// Learning mode currently active in the session.
    fn learning_mode(&self) -> LearningMode;
}

/// HashMap-backed element registry.
///
/// Not thread-safe - designed for single-threaded use, matching the
/// synchronous build model. Hosts with a resident registry can use this
/// directly; tests build small hierarchies with it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    elements: HashMap<ElementId, Element>,
}

impl InMemoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
        }
    }

    /// Insert an element, replacing any previous entry with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id, element);
    }

    /// Number of elements in the registry
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementRegistry for InMemoryRegistry {
    fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.get(&id).cloned()
    }
}

/// Session state with fixed values, read back verbatim.
#[derive(Debug, Clone)]
pub struct FixedSession {
    pub collection_name: String,
    pub learning_mode: LearningMode,
}

impl FixedSession {
    /// Create a session with the given collection name and learning mode.
    pub fn new(collection_name: impl Into<String>, learning_mode: LearningMode) -> Self {
        Self {
            collection_name: collection_name.into(),
            learning_mode,
        }
    }
}

impl SessionState for FixedSession {
    fn collection_name(&self) -> String {
        self.collection_name.clone()
    }

    fn learning_mode(&self) -> LearningMode {
        self.learning_mode
    }
}
