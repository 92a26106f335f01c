//! Application state and event dispatch
//!
//! The App owns the model and the two panes, routes keyboard input to
//! whichever pane has focus, and applies the resulting events to the
//! model. Mutations pass the current instant through so the pulse window
//! restarts rather than stacks.

use std::time::Instant;

use crossterm::event::KeyEvent;

use super::groupviewer::GroupViewer;
use super::model::{Focus, Model};
use super::textviewer::TextViewer;
use super::viewer::{Viewer, ViewerEvent};

pub struct App {
    pub model: Model,
    pub focus: Focus,
    pub text_viewer: TextViewer,
    pub group_viewer: GroupViewer,
}

impl App {
    pub fn new(model: Model) -> Self {
        App {
            model,
            focus: Focus::default(),
            text_viewer: TextViewer::new(),
            group_viewer: GroupViewer::new(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Route a key to the focused pane and apply the resulting event.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let event = match self.focus {
            Focus::TextViewer => self.text_viewer.handle_key(key, &self.model),
            Focus::GroupViewer => self.group_viewer.handle_key(key, &self.model),
        };
        if let Some(event) = event {
            self.apply_event(event, now);
        }
    }

    fn apply_event(&mut self, event: ViewerEvent, now: Instant) {
        match event {
            ViewerEvent::ToggleGroup(index) => self.model.toggle_group(index, now),
            ViewerEvent::SelectAll => self.model.select_all(now),
            ViewerEvent::ClearAll => self.model.clear_all(now),
            ViewerEvent::HoverGroup(group) => self.model.set_hovered_group(group),
            ViewerEvent::NoChange => {}
        }
    }
}
