//! Integration tests for the viewer: app-level event dispatch and
//! full-frame rendering against a test backend.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shoresh::selection::PULSE_WINDOW;
use shoresh::Study;

use super::app::App;
use super::model::{Focus, Model};
use super::ui;

fn sample_app() -> App {
    let study = Study::from_documents(
        "1 אבגד־הוזח 2 טיכ אבגד",
        r#"{"highlights":[{"root":"ד.ג.ב","words":[["אבגד",1],["אבגד",5]]},{"root":"כ.י.ט","words":[["טיכ",4]]}]}"#,
    )
    .unwrap();
    App::new(Model::new(study))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer().clone();
    let area = *buffer.area();
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_focus_toggles_between_panes() {
    let mut app = sample_app();
    assert_eq!(app.focus, Focus::TextViewer);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::GroupViewer);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::TextViewer);
}

#[test]
fn test_group_panel_toggle_flows_to_model() {
    let mut app = sample_app();
    app.toggle_focus();
    let now = Instant::now();

    assert!(app.model.selection().is_active(0));
    app.handle_key(key(KeyCode::Char(' ')), now);
    assert!(!app.model.selection().is_active(0));

    // The mutation opened the pulse window.
    assert!(app.model.selection().pulse_active(now));
    assert!(!app
        .model
        .selection()
        .pulse_active(now + PULSE_WINDOW + Duration::from_millis(1)));
}

#[test]
fn test_select_all_and_clear_all_from_group_panel() {
    let mut app = sample_app();
    app.toggle_focus();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Char('x')), now);
    assert_eq!(app.model.selection().active_count(), 0);
    app.handle_key(key(KeyCode::Char('a')), now);
    assert_eq!(app.model.selection().active_count(), 2);
}

#[test]
fn test_text_cursor_hover_reaches_model() {
    let mut app = sample_app();
    let now = Instant::now();

    // Word 0 is the verse number "1"; word 1 belongs to group 0.
    app.handle_key(key(KeyCode::Left), now);
    assert_eq!(app.model.hovered_group(), Some(0));

    // Word 2 is plain; hover clears.
    app.handle_key(key(KeyCode::Left), now);
    assert_eq!(app.model.hovered_group(), None);
}

#[test]
fn test_hover_ignores_deactivated_groups() {
    let mut app = sample_app();
    let now = Instant::now();

    app.toggle_focus();
    app.handle_key(key(KeyCode::Char(' ')), now); // deactivate group 0
    app.toggle_focus();

    app.handle_key(key(KeyCode::Left), now); // cursor to word 1
    assert_eq!(app.model.hovered_group(), None);
}

#[test]
fn test_full_frame_renders_text_and_groups() {
    let app = sample_app();
    let backend = TestBackend::new(90, 20);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| ui::render(frame, &app, "verses.txt", Instant::now()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("shoresh:: verses.txt"));
    assert!(text.contains("אבגד"));
    assert!(text.contains("ד.ג.ב"));
    assert!(text.contains("2/2 groups active"));
}

#[test]
fn test_narrow_terminal_shows_error() {
    let app = sample_app();
    let backend = TestBackend::new(30, 5);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| ui::render(frame, &app, "verses.txt", Instant::now()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Terminal too narrow"));
}

#[test]
fn test_empty_study_renders_without_panicking() {
    let app = App::new(Model::new(Study::empty()));
    let backend = TestBackend::new(80, 10);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| ui::render(frame, &app, "empty.txt", Instant::now()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("(no highlight groups)"));
    assert!(text.contains("0 words"));
}
