//! Text pane - displays the verse text with its highlights
//!
//! The text pane flows the composed segment groups into terminal lines,
//! breaking only between groups so a maqaf-joined unit never splits across
//! lines. A word cursor stands in for the pointer: the group owning the
//! word under the cursor becomes the hovered group, and every occurrence
//! of that group renders emphasized.
//!
//! The text is Hebrew and reads right to left, but terminal cells advance
//! left to right; glyph ordering within a line is left to the terminal's
//! bidi handling. Cursor movement is therefore expressed in word-index
//! order: Left advances to the next word, Right goes back.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use shoresh::{Segment, SegmentGroup};
use std::time::Instant;

/// Amount added to pulsing highlight channels, the one-shot brightness cue.
const PULSE_LIGHTEN: u8 = 30;

/// Text pane state: the word cursor and vertical scroll.
#[derive(Debug, Default)]
pub struct TextViewer {
    cursor_word: usize,
    scroll_offset: u16,
}

impl TextViewer {
    pub fn new() -> Self {
        TextViewer::default()
    }

    #[allow(dead_code)]
    pub fn cursor_word(&self) -> usize {
        self.cursor_word
    }

    fn move_cursor_forward(&mut self, model: &Model) {
        let count = model.study().word_count();
        if count > 0 && self.cursor_word < count - 1 {
            self.cursor_word += 1;
        }
    }

    fn move_cursor_back(&mut self) {
        self.cursor_word = self.cursor_word.saturating_sub(1);
    }

    /// Flow segment groups into lines no wider than `width` columns,
    /// breaking only at group boundaries.
    fn flow_lines<'a>(
        &self,
        composed: &'a [SegmentGroup],
        width: usize,
    ) -> Vec<Vec<&'a SegmentGroup>> {
        let width = width.max(1);
        let mut lines: Vec<Vec<&SegmentGroup>> = Vec::new();
        let mut current: Vec<&SegmentGroup> = Vec::new();
        let mut current_width = 0usize;

        for group in composed {
            let group_width = group.display_text().chars().count();
            let needed = if current.is_empty() {
                group_width
            } else {
                group_width + 1
            };
            if !current.is_empty() && current_width + needed > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current_width += if current.is_empty() {
                group_width
            } else {
                group_width + 1
            };
            current.push(group);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    fn segment_span<'a>(&self, segment: &'a Segment) -> Span<'a> {
        match segment {
            Segment::VerseNumber { text } => Span::styled(
                text.as_str(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ),
            Segment::Maqaf => Span::raw("־"),
            Segment::Word {
                text,
                word_index,
                highlight,
            } => {
                let mut style = Style::default();
                if let Some(h) = highlight {
                    let bg = if h.pulse {
                        h.color.lighten(PULSE_LIGHTEN)
                    } else {
                        h.color
                    };
                    style = style
                        .bg(Color::Rgb(bg.r, bg.g, bg.b))
                        .fg(Color::Rgb(0x22, 0x22, 0x22));
                    if h.emphasized {
                        // Shared emphasis: every occurrence of the hovered
                        // group carries it, not just the cursor word.
                        style = style
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                    }
                }
                if *word_index == self.cursor_word {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(text.as_str(), style)
            }
        }
    }
}

impl Viewer for TextViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model, now: Instant) {
        let composed = model.segments(now);
        let lines: Vec<Line> = self
            .flow_lines(&composed, area.width as usize)
            .into_iter()
            .map(|groups| {
                let mut spans = Vec::new();
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    for segment in &group.segments {
                        spans.push(self.segment_span(segment));
                    }
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines).scroll((self.scroll_offset, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Left => self.move_cursor_forward(model),
            KeyCode::Right => self.move_cursor_back(),
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                return Some(ViewerEvent::NoChange);
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                return Some(ViewerEvent::NoChange);
            }
            _ => return Some(ViewerEvent::NoChange),
        }

        // The word under the cursor designates its owning group as hovered.
        Some(ViewerEvent::HoverGroup(
            model.group_for_word(self.cursor_word),
        ))
    }
}
