//! Core library for shoresh, a root-repetition highlighter for Hebrew
//! verse texts.
//!
//! The pipeline, leaf-first:
//! - [`tokenizer`] splits raw verse text into addressable word tokens,
//!   grouping maqaf-joined words into unbreakable units and assigning each
//!   real word a stable zero-based index.
//! - [`catalog`] holds the externally supplied highlight groups (sets of
//!   word occurrences sharing a morphological root) and validates them
//!   against tokenizer output.
//! - [`selection`] tracks which groups are active and the transient pulse
//!   that follows a mutation.
//! - [`index`] derives the word-index -> group-index map from catalog and
//!   selection, with last-active-group-wins conflict resolution.
//! - [`palette`] assigns one display color per group.
//! - [`compose`] turns all of the above into renderable display segments.
//! - [`loader`] is the file-loading boundary that assembles a study from
//!   the two external documents.
//!
//! Everything downstream of the tokenizer is a pure derivation; the only
//! write path is [`selection::SelectionState`].

pub mod catalog;
pub mod compose;
pub mod index;
pub mod loader;
pub mod palette;
pub mod selection;
pub mod tokenizer;

pub use catalog::{CatalogIssue, HighlightCatalog, HighlightGroup};
pub use compose::{compose, Segment, SegmentGroup, WordHighlight};
pub use index::HighlightIndex;
pub use loader::{LoadError, Study, StudyLoader};
pub use palette::Color;
pub use selection::SelectionState;
pub use tokenizer::{tokenize, MaqafGroup, Token, TokenKind};
