//! studytrace core - event-to-snapshot aggregation and content diffing
//!
//! This crate turns a finalized sequence of low-level interaction events on
//! one element into an immutable [`SummarySnapshot`], including:
//! - Event batch validation with a typed error per failure condition
//! - Ancestor path resolution over the host's element hierarchy
//! - Markup-to-plain-text content normalization
//! - A token-granular structural diff with a versioned JSON encoding
//! - Reference-marker extraction from raw element content
//! - An ordered, append-only feed of produced snapshots
//!
//! The host environment supplies element identity, hierarchy, and session
//! state through the [`ElementRegistry`] and [`SessionState`] traits; the
//! engine only ever reads from them.

pub mod builder;
pub mod diff;
pub mod errors;
pub mod feed;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod references;
pub mod registry;
pub mod traversal;

// Re-export commonly used types
pub use builder::SnapshotBuilder;
pub use diff::{compute_diff, ContentDiff};
pub use errors::{DiffError, Result, SnapshotError};
pub use feed::SessionFeed;
pub use model::{Concept, Element};
pub use normalize::normalize;
pub use references::parse_references;
pub use registry::{ElementRegistry, FixedSession, InMemoryRegistry, SessionState};
pub use traversal::resolve_full_path;

pub use studytrace_core_types::{
    Event, EventOrigin, PathNode, SnapshotFeed, SummarySnapshot,
};
