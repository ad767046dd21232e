//! Content diff engine.
//!
//! Computes a structural, token-granular diff between two plain-text blobs
//! and serializes it to a versioned JSON encoding.
//!
//! ## Entry point
//!
//! ```
//! use studytrace_core::diff::compute_diff;
//!
//! let diff = compute_diff("cat", "cats");
//! let encoded = diff.to_json();
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical diffs.
//! - **Totality**: `compute_diff` accepts any two strings, including empty
//!   ones, and never fails.
//! - **Exactness**: `after` is always reconstructible from `before` plus the
//!   diff via [`ContentDiff::apply`]; there is no approximate output.
//! - **Identity**: equal inputs produce an empty segment list.

pub mod engine;
pub mod model;

pub use engine::compute_diff;
pub use model::{ContentDiff, DiffOp, DiffSegment, DIFF_SCHEMA_VERSION};
