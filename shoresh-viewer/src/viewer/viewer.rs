//! Viewer module - trait, events, and main entry point
//!
//! The Viewer trait defines a common interface for UI components that:
//! - Render themselves given a model and area
//! - Handle keyboard input and return events
//!
//! This module also contains the viewer application entry point and the
//! synchronous event loop. The loop polls with a short timeout, so the
//! post-toggle pulse window expires on its own within one poll tick.

use super::app::App;
use super::model::Model;
use super::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::layout::Rect;
use ratatui::prelude::{CrosstermBackend, Terminal};
use ratatui::Frame;
use shoresh::StudyLoader;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Events that can be emitted by viewers
///
/// These represent model changes that should be applied after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    /// Flip one group's active state
    ToggleGroup(usize),
    /// Activate every group
    SelectAll,
    /// Deactivate every group
    ClearAll,
    /// Designate a group as hovered (or clear the hover)
    HoverGroup(Option<usize>),
    /// No change to model
    NoChange,
}

/// Trait for UI viewers
///
/// A viewer is a component that:
/// - Knows how to render itself given a model
/// - Knows how to interpret keyboard input
/// - Emits ViewerEvents when user interactions require model changes
pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model, now: Instant);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent>;
}

/// Run the viewer for the given study documents
pub fn run_viewer(verses_path: PathBuf, highlights_path: PathBuf) -> io::Result<()> {
    let loader = StudyLoader::new();
    let study = loader
        .load(&verses_path, &highlights_path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let file_name = verses_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let model = Model::new(study);
    let mut app = App::new(model);

    // Setup terminal
    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, &file_name);

    // Restore terminal
    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    file_name: &str,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| {
            ui::render(frame, app, file_name, now);
        })?;

        // Poll with a timeout so the pulse window expires without input
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(key, app) {
                        return Ok(());
                    }
                }
                // On resize the next loop iteration re-renders with the
                // new dimensions; nothing to do here
                Event::Resize(_, _) => {}
                _ => {
                    // Ignore other events (mouse, focus, etc.)
                }
            }
        }
    }
}

fn handle_key_event(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Tab => {
            app.toggle_focus();
            false
        }
        _ => {
            app.handle_key(key, Instant::now());
            false
        }
    }
}
