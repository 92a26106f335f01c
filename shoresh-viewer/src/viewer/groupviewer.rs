//! Group panel - lists the highlight groups and toggles them
//!
//! One row per catalog group: active marker, color swatch, label, and
//! occurrence count. The cursor row also counts as hovered, so moving
//! through the panel lights up the corresponding occurrences in the text
//! pane, mirroring hover on the words themselves.
//!
//! Keys: Up/Down move, Space/Enter toggle, `a` selects all, `x` clears all.

use super::model::Model;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Instant;

/// Group panel state: the cursor row.
#[derive(Debug, Default)]
pub struct GroupViewer {
    cursor_row: usize,
}

impl GroupViewer {
    pub fn new() -> Self {
        GroupViewer::default()
    }

    #[allow(dead_code)]
    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    fn move_cursor(&mut self, delta: isize, model: &Model) -> Option<usize> {
        let count = model.group_count();
        if count == 0 {
            return None;
        }
        let last = count - 1;
        let next = if delta < 0 {
            self.cursor_row.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor_row + delta as usize).min(last)
        };
        self.cursor_row = next;
        Some(next)
    }
}

impl Viewer for GroupViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model, _now: Instant) {
        let rows = model.group_rows();
        let lines: Vec<Line> = if rows.is_empty() {
            vec![Line::from(Span::styled(
                "(no highlight groups)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            rows.iter()
                .map(|row| {
                    let marker = if row.active { "[x]" } else { "[ ]" };
                    let swatch_style =
                        Style::default().fg(Color::Rgb(row.color.r, row.color.g, row.color.b));
                    let mut label_style = Style::default();
                    if row.active {
                        label_style = label_style.add_modifier(Modifier::BOLD);
                    }
                    if row.hovered {
                        label_style = label_style.add_modifier(Modifier::UNDERLINED);
                    }
                    let mut line = Line::from(vec![
                        Span::raw(format!("{} ", marker)),
                        Span::styled("■ ", swatch_style),
                        Span::styled(row.label.clone(), label_style),
                        Span::styled(
                            format!(" ({})", row.occurrences),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]);
                    if row.index == self.cursor_row {
                        line = line.style(Style::default().bg(Color::Blue).fg(Color::White));
                    }
                    line
                })
                .collect()
        };

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        match key.code {
            KeyCode::Up => Some(ViewerEvent::HoverGroup(self.move_cursor(-1, model))),
            KeyCode::Down => Some(ViewerEvent::HoverGroup(self.move_cursor(1, model))),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if model.group_count() == 0 {
                    Some(ViewerEvent::NoChange)
                } else {
                    Some(ViewerEvent::ToggleGroup(self.cursor_row))
                }
            }
            KeyCode::Char('a') => Some(ViewerEvent::SelectAll),
            KeyCode::Char('x') => Some(ViewerEvent::ClearAll),
            _ => Some(ViewerEvent::NoChange),
        }
    }
}
