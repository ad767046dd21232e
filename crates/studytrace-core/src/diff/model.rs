//! Diff output types and the versioned serialized encoding.
//!
//! The serialized form is the contract between the diff engine and snapshot
//! consumers: a JSON object with a `diff_schema_version` field and an ordered
//! `segments` list of `{op, text}` entries. An empty `segments` list means
//! the two inputs were equal.

use serde::{Deserialize, Serialize};

use crate::errors::DiffError;

/// Schema version of the serialized diff encoding produced by this build.
pub const DIFF_SCHEMA_VERSION: u32 = 1;

/// Kind of one edit segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    /// Segment present in both texts
    Keep,
    /// Segment present only in the after text
    Insert,
    /// Segment present only in the before text
    Delete,
}

/// One contiguous edit segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// What happens to this segment
    pub op: DiffOp,
    /// The segment text, verbatim
    pub text: String,
}

impl DiffSegment {
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// An ordered list of edit segments transforming one text into another.
///
/// Applying the segments in order against the before text yields the after
/// text exactly: `Keep` and `Delete` segments must match the before text as
/// they are consumed, `Keep` and `Insert` segments are emitted. An empty
/// list is the identity diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDiff {
    /// Schema version of this diff structure (always 1)
    pub diff_schema_version: u32,
    /// Ordered edit segments; empty when the inputs were equal
    pub segments: Vec<DiffSegment>,
}

impl ContentDiff {
    /// Create a diff from raw segments.
    pub fn new(segments: Vec<DiffSegment>) -> Self {
        Self {
            diff_schema_version: DIFF_SCHEMA_VERSION,
            segments,
        }
    }

    /// The identity diff (equal inputs).
    pub fn identity() -> Self {
        Self::new(Vec::new())
    }

    /// Check whether this is the identity diff.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Serialize to the stable JSON encoding.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse the JSON encoding back into an equivalent segment list.
    ///
    /// # Errors
    ///
    /// `Parse` when the input is not a valid encoding of this schema.
    pub fn from_json(encoded: &str) -> std::result::Result<Self, DiffError> {
        serde_json::from_str(encoded).map_err(|e| DiffError::Parse {
            message: e.to_string(),
        })
    }

    /// Reconstruct the after text from the before text and this diff.
    ///
    /// # Errors
    ///
    /// `Mismatch` when a `Keep` or `Delete` segment does not match the
    /// before text at its position, or when before text is left over.
    pub fn apply(&self, before: &str) -> std::result::Result<String, DiffError> {
        if self.segments.is_empty() {
            return Ok(before.to_string());
        }

        let mut remaining = before;
        let mut after = String::new();

        for segment in &self.segments {
            match segment.op {
                DiffOp::Keep => {
                    remaining = consume(remaining, &segment.text)?;
                    after.push_str(&segment.text);
                }
                DiffOp::Delete => {
                    remaining = consume(remaining, &segment.text)?;
                }
                DiffOp::Insert => {
                    after.push_str(&segment.text);
                }
            }
        }

        if !remaining.is_empty() {
            return Err(DiffError::Mismatch {
                message: format!("{} unconsumed bytes in base text", remaining.len()),
            });
        }
        Ok(after)
    }
}

fn consume<'a>(remaining: &'a str, expected: &str) -> std::result::Result<&'a str, DiffError> {
    remaining
        .strip_prefix(expected)
        .ok_or_else(|| DiffError::Mismatch {
            message: format!("base text does not contain expected segment {:?}", expected),
        })
}
