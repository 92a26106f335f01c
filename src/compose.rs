//! Compositor: from tokens and derived state to display segments
//!
//! The compositor is the read side of the pipeline. It walks the maqaf
//! groups in order and classifies every token into a display segment:
//!
//! - maqaf tokens become fixed glyph segments, never highlighted
//! - one- or two-digit words become verse-number segments, visually
//!   de-emphasized and never highlighted or interactive even when the
//!   highlight index claims their word index
//! - any other word becomes a word segment, carrying the owning group's
//!   color when the highlight index claims it
//!
//! Hovering any occurrence of a highlighted root designates its group as
//! hovered; every segment of that group carries the emphasis mark, so all
//! occurrences light up together.

use serde::Serialize;

use crate::index::HighlightIndex;
use crate::palette::Color;
use crate::tokenizer::MaqafGroup;

/// Highlight styling attached to a word segment whose index is claimed by
/// an active group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordHighlight {
    /// The owning group's index.
    pub group: usize,
    /// The group's assigned color.
    pub color: Color,
    /// One-shot transition cue after a selection mutation.
    pub pulse: bool,
    /// Shared emphasis: some occurrence of this group is hovered.
    pub emphasized: bool,
}

/// One renderable unit of the composed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    /// A 1-2 digit numeral rendered as metadata (smaller, muted).
    VerseNumber { text: String },
    /// The fixed maqaf glyph between joined words.
    Maqaf,
    /// A content word, highlighted when an active group claims its index.
    Word {
        text: String,
        word_index: usize,
        highlight: Option<WordHighlight>,
    },
}

impl Segment {
    /// Whether this segment reacts to hover and focus.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Segment::Word {
                highlight: Some(_),
                ..
            }
        )
    }
}

/// A run of segments that must render with no line break inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentGroup {
    pub segments: Vec<Segment>,
}

impl SegmentGroup {
    /// Concatenated display text, used for width measurement when flowing
    /// groups into lines.
    pub fn display_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::VerseNumber { text } => text.as_str(),
                Segment::Maqaf => "־",
                Segment::Word { text, .. } => text.as_str(),
            })
            .collect()
    }
}

/// Compose the tokenized document into display segments.
///
/// `colors` must hold one color per catalog group (see
/// [`crate::palette::assign`]); a group index past its end falls back to
/// position modulo length, mirroring positional palette assignment.
pub fn compose(
    groups: &[MaqafGroup],
    index: &HighlightIndex,
    colors: &[Color],
    pulse_active: bool,
    hovered_group: Option<usize>,
) -> Vec<SegmentGroup> {
    groups
        .iter()
        .map(|group| {
            let segments = group
                .tokens()
                .iter()
                .map(|token| match token.word_index() {
                    None => Segment::Maqaf,
                    Some(_) if token.is_verse_number() => Segment::VerseNumber {
                        text: token.text().to_string(),
                    },
                    Some(word_index) => {
                        let highlight = index.group_for(word_index).map(|group_index| {
                            let color = if colors.is_empty() {
                                Color::new(0, 0, 0)
                            } else {
                                colors[group_index % colors.len()]
                            };
                            WordHighlight {
                                group: group_index,
                                color,
                                pulse: pulse_active,
                                emphasized: hovered_group == Some(group_index),
                            }
                        });
                        Segment::Word {
                            text: token.text().to_string(),
                            word_index,
                            highlight,
                        }
                    }
                })
                .collect();
            SegmentGroup { segments }
        })
        .collect()
}
