//! Element vocabulary shared between the engine and the host registry.

use serde::{Deserialize, Serialize};

/// Identifier of an element in the host's content hierarchy.
///
/// Ids are assigned by the host registry; this crate never generates them.
pub type ElementId = i64;

/// Kind of an element in the host's content hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Article-style material the user reads and extracts from
    Topic,
    /// Question/answer material the user is tested on
    Item,
    /// Grouping node that tags related elements
    ConceptGroup,
    /// Scheduled to-do entry
    Task,
    /// Anything the host reports that this crate has no mapping for
    Unknown,
}

impl Default for ElementType {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Learning mode the session was in when a snapshot was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningMode {
    /// Regular outstanding-queue repetitions
    Standard,
    /// Repetitions restricted to a subset of the collection
    Subset,
    /// Neural review ordering
    Neural,
    /// No learning process active
    None,
}

impl Default for LearningMode {
    fn default() -> Self {
        Self::None
    }
}
