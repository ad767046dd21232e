//! Read surface for a feed of produced snapshots.

use crate::snapshot::SummarySnapshot;

/// Ordered, append-only feed of summary snapshots.
///
/// The engine appends one entry per successful build; reporting and export
/// collaborators consume the feed read-only through this trait. Entries are
/// in build order.
pub trait SnapshotFeed {
    /// All snapshots produced so far, oldest first.
    fn summary_snapshots(&self) -> &[SummarySnapshot];
}
