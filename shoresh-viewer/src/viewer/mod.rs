//! Interactive viewer for root-highlighted verse texts
//!
//! Module layout:
//! - `model`: pure application state (study, selection, hover)
//! - `app`: event dispatch and focus handling
//! - `textviewer` / `groupviewer`: the two focusable panes
//! - `ui`: frame layout
//! - `viewer`: the Viewer trait, events, and the terminal event loop

pub mod app;
pub mod groupviewer;
pub mod model;
pub mod textviewer;
pub mod ui;
#[allow(clippy::module_inception)]
pub mod viewer;

#[cfg(test)]
mod tests;
