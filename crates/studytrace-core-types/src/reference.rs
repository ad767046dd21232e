//! Structured cross-references extracted from element content.

use serde::{Deserialize, Serialize};

/// Structured reference set parsed from an element's content text.
///
/// Hosts annotate element content with `#Field:` reference markers; the
/// engine extracts them into this shape. A field is `None` when its marker
/// is absent. Content without any markers yields the `Default` (empty) set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ElementReferences {
    /// `#Title:` marker value
    pub title: Option<String>,
    /// `#Author:` marker value
    pub author: Option<String>,
    /// `#Date:` marker value
    pub date: Option<String>,
    /// `#Source:` marker value
    pub source: Option<String>,
    /// `#Link:` marker value
    pub link: Option<String>,
    /// `#Email:` marker value
    pub email: Option<String>,
    /// `#Comment:` marker value
    pub comment: Option<String>,
}

impl ElementReferences {
    /// Check whether no reference field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.date.is_none()
            && self.source.is_none()
            && self.link.is_none()
            && self.email.is_none()
            && self.comment.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ElementReferences::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_non_empty() {
        let refs = ElementReferences {
            link: Some("https://example.org".to_string()),
            ..Default::default()
        };
        assert!(!refs.is_empty());
    }
}
