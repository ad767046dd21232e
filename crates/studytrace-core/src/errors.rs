use chrono::{DateTime, Utc};
use studytrace_core_types::ElementId;
use thiserror::Error;

/// Result type alias using SnapshotError
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Construction-time failures of a snapshot build.
///
/// Every variant is recoverable by the caller: the expected response to a
/// failed build is to log and drop the event batch, never to retry it
/// unchanged. The builder fails fast on the first violated precondition and
/// emits no partially-populated snapshot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Fewer than two events were supplied
    #[error("cannot build snapshot from {count} events: at least 2 required")]
    InsufficientEvents { count: usize },

    /// The event batch references more than one element
    #[error("event batch mixes element ids: expected {expected}, found {found}")]
    InconsistentElementId {
        expected: ElementId,
        found: ElementId,
    },

    /// The computed end timestamp precedes the start timestamp
    #[error("inverted time range: start {start} is after end {end}")]
    InvertedTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// The hierarchy collaborator cannot resolve the element id
    #[error("element not found in registry: {element_id}")]
    ElementNotFound { element_id: ElementId },
}

impl SnapshotError {
    /// Get the stable error code for this error
    ///
    /// Codes are part of the crate's external contract and never change for
    /// an existing variant.
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::InsufficientEvents { .. } => "ERR_INSUFFICIENT_EVENTS",
            SnapshotError::InconsistentElementId { .. } => "ERR_INCONSISTENT_ELEMENT_ID",
            SnapshotError::InvertedTimeRange { .. } => "ERR_INVERTED_TIME_RANGE",
            SnapshotError::ElementNotFound { .. } => "ERR_ELEMENT_NOT_FOUND",
        }
    }
}

/// Failures of the diff decode/apply surface.
///
/// `compute_diff` itself never fails; these only arise when consuming a
/// serialized diff produced elsewhere.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The serialized diff is not valid JSON for the current schema version
    #[error("failed to parse serialized diff: {message}")]
    Parse { message: String },

    /// The diff's kept/deleted segments do not match the supplied base text
    #[error("diff does not apply to the supplied base text: {message}")]
    Mismatch { message: String },
}
