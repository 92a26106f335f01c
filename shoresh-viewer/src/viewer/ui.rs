//! UI rendering logic
//!
//! Handles layout and rendering of the application using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Middle section (responsive height):
//!   - Group panel (30 chars, fixed width)
//!   - Text pane (remaining space)
//! - Status line (1 line, fixed)

use super::app::App;
use super::model::Focus;
use super::viewer::Viewer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::Instant;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 50;
/// Width allocated to the group panel
const GROUP_PANEL_WIDTH: u16 = 30;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App, file_name: &str, now: Instant) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    // Split layout vertically: title, middle (groups|text), status line
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], file_name);
    render_middle_section(frame, chunks[1], app, now);
    render_status_line(frame, chunks[2], app, now);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("shoresh:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_middle_section(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(GROUP_PANEL_WIDTH),
            Constraint::Min(1),
        ])
        .split(area);

    render_group_panel(frame, chunks[0], app, now);
    render_text_pane(frame, chunks[1], app, now);
}

fn render_group_panel(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let focus_indicator = if app.focus == Focus::GroupViewer {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Groups{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.group_viewer.render(frame, inner_area, &app.model, now);
}

fn render_text_pane(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let focus_indicator = if app.focus == Focus::TextViewer {
        " [FOCUSED]"
    } else {
        ""
    };

    let title = format!("Text{}", focus_indicator);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    app.text_viewer.render(frame, inner_area, &app.model, now);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let model = &app.model;
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!("{} words", model.study().word_count()),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!(
            "{}/{} groups active",
            model.selection().active_count(),
            model.group_count()
        ),
        Style::default().fg(Color::Yellow),
    ));

    if let Some(group) = model.hovered_group() {
        let label = model
            .group_rows()
            .get(group)
            .map(|row| row.label.clone())
            .unwrap_or_else(|| format!("Group {}", group + 1));
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Hover: ", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(label));
    }

    let issues = model.study().issues().len();
    if issues > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} catalog issue(s)", issues),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    if model.selection().pulse_active(now) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("*", Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(ratatui::text::Line::from(spans))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_panel_width_constant() {
        assert_eq!(GROUP_PANEL_WIDTH, 30);
    }

    #[test]
    fn test_status_line_height_constant() {
        assert_eq!(STATUS_LINE_HEIGHT, 1);
    }

    #[test]
    fn test_min_terminal_width() {
        assert_eq!(MIN_TERMINAL_WIDTH, 50);
    }
}
