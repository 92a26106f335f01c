//! Highlight catalog: the externally supplied root groups
//!
//! The catalog is read-only input to the pipeline. Its wire form is a JSON
//! object with one field, `highlights`, an ordered array of groups:
//!
//! ```text
//! { "highlights": [ { "root": "ד.ג.ב", "words": [["אבגד", 0], ...] }, ... ] }
//! ```
//!
//! Word indices reference the tokenizer's zero-based numbering over the
//! exact same source text. That coupling is validated at the loading
//! boundary by [`HighlightCatalog::validate`], which reports issues instead
//! of silently mis-highlighting; the index map itself keeps trusting the
//! catalog as-is.
//!
//! Degradation policy: an absent or non-array `highlights` field yields an
//! empty catalog. A group element that does not match the schema yields an
//! empty group at that position rather than failing the whole load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One named set of word occurrences sharing a morphological root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightGroup {
    /// Display label for the group; absence falls back to a positional one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Ordered occurrences as (word text, word index) pairs.
    #[serde(default)]
    pub words: Vec<(String, usize)>,
}

impl HighlightGroup {
    /// Display label: the root text, or "Group N" for the group at
    /// zero-based position `position`.
    pub fn label(&self, position: usize) -> String {
        match &self.root {
            Some(root) => root.clone(),
            None => format!("Group {}", position + 1),
        }
    }
}

/// The ordered collection of highlight groups for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightCatalog {
    groups: Vec<HighlightGroup>,
}

/// Errors raised when reading a catalog document.
#[derive(Debug)]
pub enum CatalogError {
    /// The document is not valid JSON at all.
    InvalidJson(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidJson(err) => write!(f, "catalog is not valid JSON: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A reported inconsistency between the catalog and the tokenized text.
///
/// Issues are diagnostics, never fatal: rendering proceeds with the catalog
/// as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// A catalog entry references a word index past the end of the text.
    IndexOutOfRange {
        group: usize,
        word: String,
        index: usize,
        word_count: usize,
    },
    /// The catalog's word text disagrees with the token at that index.
    TextMismatch {
        group: usize,
        index: usize,
        expected: String,
        found: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::IndexOutOfRange {
                group,
                word,
                index,
                word_count,
            } => write!(
                f,
                "group {}: \"{}\" references word index {} but the text has {} words",
                group, word, index, word_count
            ),
            CatalogIssue::TextMismatch {
                group,
                index,
                expected,
                found,
            } => write!(
                f,
                "group {}: word index {} is \"{}\" in the text, catalog says \"{}\"",
                group, index, found, expected
            ),
        }
    }
}

impl HighlightCatalog {
    pub fn new(groups: Vec<HighlightGroup>) -> Self {
        HighlightCatalog { groups }
    }

    /// Parse a catalog from its JSON wire form.
    ///
    /// Returns an error only when the document is not JSON. A missing or
    /// non-array `highlights` field, or a malformed group element, degrades
    /// per the module policy.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(source).map_err(CatalogError::InvalidJson)?;

        let groups = match value.get("highlights").and_then(|v| v.as_array()) {
            Some(entries) => entries
                .iter()
                .map(|entry| {
                    serde_json::from_value::<HighlightGroup>(entry.clone()).unwrap_or_default()
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(HighlightCatalog { groups })
    }

    pub fn groups(&self) -> &[HighlightGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check every catalog entry against the tokenized text, where
    /// `words[i]` is the text of the word at index `i`.
    pub fn validate(&self, words: &[String]) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for (group_idx, group) in self.groups.iter().enumerate() {
            for (text, index) in &group.words {
                match words.get(*index) {
                    None => issues.push(CatalogIssue::IndexOutOfRange {
                        group: group_idx,
                        word: text.clone(),
                        index: *index,
                        word_count: words.len(),
                    }),
                    Some(found) if found != text => issues.push(CatalogIssue::TextMismatch {
                        group: group_idx,
                        index: *index,
                        expected: text.clone(),
                        found: found.clone(),
                    }),
                    Some(_) => {}
                }
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_catalog() {
        let catalog = HighlightCatalog::from_json_str(
            r#"{"highlights":[{"root":"ד.ג.ב","words":[["אבגד",0],["אבגד",5]]}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.groups()[0].root.as_deref(), Some("ד.ג.ב"));
        assert_eq!(catalog.groups()[0].words.len(), 2);
    }

    #[test]
    fn test_missing_highlights_field_is_empty_catalog() {
        let catalog = HighlightCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_non_array_highlights_is_empty_catalog() {
        let catalog = HighlightCatalog::from_json_str(r#"{"highlights": "oops"}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_group_degrades_to_empty_group() {
        let catalog =
            HighlightCatalog::from_json_str(r#"{"highlights":[{"words": 3}, {"words":[["א",0]]}]}"#)
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.groups()[0].words.is_empty());
        assert_eq!(catalog.groups()[1].words.len(), 1);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(HighlightCatalog::from_json_str("not json").is_err());
    }

    #[test]
    fn test_label_falls_back_to_position() {
        let group = HighlightGroup::default();
        assert_eq!(group.label(2), "Group 3");
        let named = HighlightGroup {
            root: Some("ש.ר.ש".to_string()),
            words: Vec::new(),
        };
        assert_eq!(named.label(2), "ש.ר.ש");
    }

    #[test]
    fn test_validate_reports_range_and_text_issues() {
        let catalog = HighlightCatalog::from_json_str(
            r#"{"highlights":[{"words":[["א",0],["ב",1],["ג",9]]}]}"#,
        )
        .unwrap();
        let words = vec!["א".to_string(), "אחר".to_string()];
        let issues = catalog.validate(&words);
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0],
            CatalogIssue::TextMismatch { group: 0, index: 1, .. }
        ));
        assert!(matches!(
            issues[1],
            CatalogIssue::IndexOutOfRange { group: 0, index: 9, .. }
        ));
    }
}
