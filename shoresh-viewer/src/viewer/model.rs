//! Data model for the shoresh viewer
//!
//! The Model struct holds the pure application state:
//! - The loaded study (tokenized text + highlight catalog + diagnostics)
//! - The selection state (which groups are active, pulse window)
//! - The hovered group and the word cursor
//!
//! Rendering state is derived from here on every frame: the highlight
//! index, the palette, and the composed segments are all recomputed, never
//! patched incrementally. That keeps the model testable without a
//! terminal.

use std::time::Instant;

use shoresh::{compose, palette, HighlightIndex, SegmentGroup, SelectionState, Study};

/// Which pane currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Text pane (the verse text) has focus
    #[default]
    TextViewer,
    /// Group panel has focus
    GroupViewer,
}

impl Focus {
    /// Toggle focus to the other pane
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::TextViewer => Focus::GroupViewer,
            Focus::GroupViewer => Focus::TextViewer,
        }
    }
}

/// One row of the group panel, precomputed for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRow {
    pub index: usize,
    pub label: String,
    pub occurrences: usize,
    pub active: bool,
    pub hovered: bool,
    pub color: palette::Color,
}

/// The core data model
#[derive(Debug, Clone)]
pub struct Model {
    study: Study,
    selection: SelectionState,
    colors: Vec<palette::Color>,
    hovered_group: Option<usize>,
}

impl Model {
    /// Create a model from a loaded study. All groups start active, and
    /// colors are assigned with the catalog-derived seed so a reloaded
    /// catalog keeps its color associations.
    pub fn new(study: Study) -> Self {
        let group_count = study.catalog().len();
        let seed = palette::seed_from_catalog(study.catalog());
        Model {
            selection: SelectionState::all_active(group_count),
            colors: palette::assign_seeded(group_count, seed),
            study,
            hovered_group: None,
        }
    }

    pub fn study(&self) -> &Study {
        &self.study
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn group_count(&self) -> usize {
        self.study.catalog().len()
    }

    pub fn hovered_group(&self) -> Option<usize> {
        self.hovered_group
    }

    pub fn set_hovered_group(&mut self, group: Option<usize>) {
        self.hovered_group = group;
    }

    /// The group index that owns a word, under the current selection.
    pub fn group_for_word(&self, word_index: usize) -> Option<usize> {
        HighlightIndex::build(self.study.catalog(), &self.selection).group_for(word_index)
    }

    pub fn toggle_group(&mut self, group_index: usize, now: Instant) {
        self.selection.toggle(group_index, now);
    }

    pub fn select_all(&mut self, now: Instant) {
        self.selection.select_all(self.group_count(), now);
    }

    pub fn clear_all(&mut self, now: Instant) {
        self.selection.clear_all(now);
    }

    /// Compose the display segments for the current state.
    pub fn segments(&self, now: Instant) -> Vec<SegmentGroup> {
        let index = HighlightIndex::build(self.study.catalog(), &self.selection);
        compose(
            self.study.groups(),
            &index,
            &self.colors,
            self.selection.pulse_active(now),
            self.hovered_group,
        )
    }

    /// Rows for the group panel, in catalog order.
    pub fn group_rows(&self) -> Vec<GroupRow> {
        self.study
            .catalog()
            .groups()
            .iter()
            .enumerate()
            .map(|(index, group)| GroupRow {
                index,
                label: group.label(index),
                occurrences: group.words.len(),
                active: self.selection.is_active(index),
                hovered: self.hovered_group == Some(index),
                color: self.colors[index],
            })
            .collect()
    }
}
