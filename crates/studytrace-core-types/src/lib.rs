//! Core types shared across studytrace facilities
//!
//! This crate provides the boundary value types exchanged between the
//! snapshot engine and its downstream consumers:
//!
//! - **Event types**: `Event`, `EventOrigin`
//! - **Snapshot types**: `SummarySnapshot`, `PathNode`
//! - **Element vocabulary**: `ElementId`, `ElementType`, `LearningMode`
//! - **References**: `ElementReferences` extracted from element content
//! - **Feed surface**: the `SnapshotFeed` read trait
//! - **Schema constants**: canonical field keys and event names for logging

pub mod element;
pub mod event;
pub mod feed;
pub mod reference;
pub mod schema;
pub mod snapshot;

pub use element::{ElementId, ElementType, LearningMode};
pub use event::{Event, EventOrigin};
pub use feed::SnapshotFeed;
pub use reference::ElementReferences;
pub use snapshot::{PathNode, SummarySnapshot};
