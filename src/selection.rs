//! Selection state: which highlight groups are active
//!
//! The selection is the only write path in the pipeline; everything else is
//! a pure derivation. Each mutation restarts a short pulse window used to
//! drive a one-shot visual cue on newly highlighted segments. The pulse is
//! held as a deadline and polled, so restarting it is a plain assignment;
//! there is no timer to race with.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How long the post-mutation pulse stays active.
pub const PULSE_WINDOW: Duration = Duration::from_millis(400);

/// The set of currently active group indices plus the transient pulse.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    active: HashSet<usize>,
    pulse_deadline: Option<Instant>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState::default()
    }

    /// Start with every group of an `n`-group catalog active, the state a
    /// fresh catalog load resets to.
    pub fn all_active(group_count: usize) -> Self {
        SelectionState {
            active: (0..group_count).collect(),
            pulse_deadline: None,
        }
    }

    /// Flip membership of one group. Bounds are the caller's concern; an
    /// out-of-range index simply toggles a member no catalog group owns.
    pub fn toggle(&mut self, group_index: usize, now: Instant) {
        if !self.active.remove(&group_index) {
            self.active.insert(group_index);
        }
        self.restart_pulse(now);
    }

    /// Activate all group indices `0..group_count`.
    pub fn select_all(&mut self, group_count: usize, now: Instant) {
        self.active = (0..group_count).collect();
        self.restart_pulse(now);
    }

    /// Deactivate everything.
    pub fn clear_all(&mut self, now: Instant) {
        self.active.clear();
        self.restart_pulse(now);
    }

    pub fn is_active(&self, group_index: usize) -> bool {
        self.active.contains(&group_index)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Whether the post-mutation pulse window is still open at `now`.
    pub fn pulse_active(&self, now: Instant) -> bool {
        match self.pulse_deadline {
            Some(deadline) => now < deadline,
            None => false,
        }
    }

    // A new mutation cancels and restarts the window, never stacks it.
    fn restart_pulse(&mut self, now: Instant) {
        self.pulse_deadline = Some(now + PULSE_WINDOW);
    }
}
