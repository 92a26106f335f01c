//! Derived word-index -> group-index map
//!
//! Rebuilt from the catalog and the selection whenever either changes.
//! Groups are processed in ascending index order and every occurrence they
//! own is written unconditionally, so when two active groups claim the same
//! word the higher-numbered group wins. That is a reconciliation rule, not
//! an error; the catalog's word text is not checked here (the loading
//! boundary reports inconsistencies, see [`crate::catalog`]).

use std::collections::HashMap;

use crate::catalog::HighlightCatalog;
use crate::selection::SelectionState;

/// Mapping from word index to the active group that claims it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightIndex {
    map: HashMap<usize, usize>,
}

impl HighlightIndex {
    /// Derive the index for the current catalog and selection.
    pub fn build(catalog: &HighlightCatalog, selection: &SelectionState) -> Self {
        let mut map = HashMap::new();
        for (group_index, group) in catalog.groups().iter().enumerate() {
            if !selection.is_active(group_index) {
                continue;
            }
            for (_text, word_index) in &group.words {
                map.insert(*word_index, group_index);
            }
        }
        HighlightIndex { map }
    }

    /// The active group claiming this word, if any.
    pub fn group_for(&self, word_index: usize) -> Option<usize> {
        self.map.get(&word_index).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
