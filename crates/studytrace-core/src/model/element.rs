use serde::{Deserialize, Serialize};
use studytrace_core_types::{ElementId, ElementType};

/// Optional concept tag an element may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    /// Concept id in the host registry
    pub id: i64,
    /// Human-readable concept name
    pub name: String,
}

/// One element as seen through the hierarchy collaborator.
///
/// Elements form a tree through parent pointers; a root element has no
/// parent. This is a read-only view owned by the host registry - the engine
/// copies what it needs at build time and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier assigned by the host
    pub id: ElementId,

    /// Human-readable title
    pub title: String,

    /// Kind of element
    pub element_type: ElementType,

    /// Optional parent element id (None for roots)
    pub parent_id: Option<ElementId>,

    /// Optional concept the element belongs to
    pub concept: Option<Concept>,

    /// Tombstone flag - if true, this element is considered deleted
    pub deleted: bool,
}

impl Element {
    /// Create a new element with no parent, no concept, and not deleted.
    pub fn new(id: ElementId, title: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            id,
            title: title.into(),
            element_type,
            parent_id: None,
            concept: None,
            deleted: false,
        }
    }

    /// Check if this element is a root (has no parent)
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check if this element is deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}
